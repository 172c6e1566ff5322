mod error;
mod font;
mod geometry;
mod shapes;
mod text;

use base64::{Engine, engine::general_purpose};
use pill_parser::PillArgs;
use tiny_skia::Pixmap;

use crate::shapes::Pill;

pub use error::RenderError;
pub use font::{SizedFont, load_system_font};
pub use geometry::{PillGeometry, TextExtent};
pub use text::{GlyphMetrics, LineMetrics, Text, Typeface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub(crate) trait Drawable {
    fn draw(&self, target: &mut Pixmap) -> Result<(), RenderError>;
}

#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub png: Vec<u8>,
    pub geometry: PillGeometry,
}

impl RenderOutput {
    /// Standard, padded base64 of the PNG bytes.
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.png)
    }
}

/// Measure the label with `typeface` (already sized to `args.font_size`) and
/// draw it onto a transparent pill-shaped PNG.
pub fn render(args: &PillArgs, typeface: &dyn Typeface) -> Result<RenderOutput, RenderError> {
    if args.font_size <= 0.0 {
        return Err(RenderError::FontSize(args.font_size));
    }

    let position = Position::new(args.padding.x, args.padding.y);
    let text = Text::new(args.text.clone(), typeface, position, args.foreground);

    let extent = text.extent();
    let geometry = PillGeometry::new(extent, args.padding);
    tracing::debug!(
        text_width = extent.width,
        text_height = extent.height,
        width = geometry.width,
        height = geometry.height,
        corner_radius = geometry.corner_radius,
        "computed pill geometry"
    );

    let mut pixmap =
        Pixmap::new(geometry.width, geometry.height).ok_or(RenderError::PixmapAllocation {
            width: geometry.width,
            height: geometry.height,
        })?;

    Pill::new(&geometry, args.background).draw(&mut pixmap)?;
    text.draw(&mut pixmap)?;

    let png = pixmap
        .encode_png()
        .map_err(|err| RenderError::Encode(err.to_string()))?;
    Ok(RenderOutput { png, geometry })
}
