use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use fontdue::{Font, FontSettings};

use crate::{
    RenderError,
    text::{GlyphMetrics, LineMetrics, Typeface},
};

/// Tried in order before the generic sans-serif family.
const PREFERRED_FAMILIES: &[&str] = &[
    "SF Pro Text",
    "Helvetica Neue",
    "Segoe UI",
    "Inter",
    "Noto Sans",
    "DejaVu Sans",
    "Liberation Sans",
    "Cantarell",
    "Arial",
];

/// Loads the semibold sans-serif face closest to the platform's UI font.
pub fn load_system_font() -> Result<Font, RenderError> {
    let mut db = Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "loaded system font database");

    let mut families: Vec<Family> = PREFERRED_FAMILIES.iter().copied().map(Family::Name).collect();
    families.push(Family::SansSerif);

    let query = Query {
        families: &families,
        weight: Weight::SEMIBOLD,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    // any face beats no face
    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|face| face.id))
        .ok_or(RenderError::NoSystemFont)?;

    if let Some(face) = db.face(id) {
        tracing::debug!(
            family = face.families.first().map(|(name, _)| name.as_str()),
            weight = face.weight.0,
            index = face.index,
            "selected font face"
        );
    }

    db.with_face_data(id, |data, index| {
        let settings = FontSettings {
            collection_index: index,
            ..FontSettings::default()
        };
        Font::from_bytes(data, settings)
    })
    .ok_or(RenderError::NoSystemFont)?
    .map_err(RenderError::Font)
}

/// A fontdue font fixed at one pixel size.
#[derive(Debug, Clone)]
pub struct SizedFont {
    font: Font,
    px: f32,
}

impl SizedFont {
    pub fn new(font: Font, px: f32) -> Self {
        Self { font, px }
    }

    pub fn px(&self) -> f32 {
        self.px
    }
}

impl Typeface for SizedFont {
    fn line_metrics(&self) -> LineMetrics {
        match self.font.horizontal_line_metrics(self.px) {
            Some(metrics) => LineMetrics {
                ascent: metrics.ascent,
                descent: metrics.descent,
                line_gap: metrics.line_gap,
            },
            // faces without hhea data
            None => LineMetrics {
                ascent: self.px,
                descent: 0.,
                line_gap: 0.,
            },
        }
    }

    fn advance(&self, ch: char) -> f32 {
        self.font.metrics(ch, self.px).advance_width
    }

    fn kern(&self, left: char, right: char) -> f32 {
        self.font
            .horizontal_kern(left, right, self.px)
            .unwrap_or_default()
    }

    fn rasterize(&self, ch: char) -> (GlyphMetrics, Vec<u8>) {
        let (metrics, coverage) = self.font.rasterize(ch, self.px);
        let metrics = GlyphMetrics {
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            width: metrics.width,
            height: metrics.height,
            advance_width: metrics.advance_width,
        };
        (metrics, coverage)
    }
}
