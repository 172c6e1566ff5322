use std::fmt::Debug;

use pill_parser::HexColor;
use tiny_skia::{IntSize, Pixmap, PixmapPaint, Transform};

use crate::{Drawable, Position, RenderError, geometry::TextExtent};

/// Vertical metrics of a face at a fixed size. `descent` is negative below the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

impl LineMetrics {
    pub fn line_height(&self) -> f32 {
        self.ascent - self.descent + self.line_gap
    }
}

/// Placement of a rasterized glyph relative to the pen position on the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphMetrics {
    pub xmin: i32,
    pub ymin: i32,
    pub width: usize,
    pub height: usize,
    pub advance_width: f32,
}

/// A font face already scaled to the label's pixel size.
pub trait Typeface {
    fn line_metrics(&self) -> LineMetrics;
    fn advance(&self, ch: char) -> f32;
    fn kern(&self, left: char, right: char) -> f32;
    /// Coverage bitmap, one byte per pixel, row-major.
    fn rasterize(&self, ch: char) -> (GlyphMetrics, Vec<u8>);
}

#[derive(Clone, PartialEq)]
struct Glyph {
    #[cfg(debug_assertions)]
    ch: char,
    x: i32,
    y: i32,
    width: usize,
    height: usize,
    color: HexColor,
    coverage: Vec<u8>,
}

impl Debug for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Glyph");
        #[cfg(debug_assertions)]
        s.field("char", &self.ch);
        s.field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("coverage", &"...")
            .finish()
    }
}

impl Glyph {
    fn new(typeface: &dyn Typeface, ch: char, pen_x: f32, baseline: f32, color: HexColor) -> Self {
        let (metrics, coverage) = typeface.rasterize(ch);
        Self {
            #[cfg(debug_assertions)]
            ch,
            x: (pen_x + metrics.xmin as f32).round() as i32,
            y: (baseline - metrics.ymin as f32 - metrics.height as f32).round() as i32,
            width: metrics.width,
            height: metrics.height,
            color,
            coverage,
        }
    }

    /// transform coverage to premultiplied rgba data
    fn to_rgba(&self) -> Vec<u8> {
        let [r, g, b, _] = self.color.to_rgba8();
        let mut buf = Vec::with_capacity(self.coverage.len() * 4);
        for &alpha in &self.coverage {
            buf.push(premultiply(r, alpha));
            buf.push(premultiply(g, alpha));
            buf.push(premultiply(b, alpha));
            buf.push(alpha);
        }
        buf
    }

    fn to_pixmap(&self) -> Result<Pixmap, RenderError> {
        let size = IntSize::from_wh(self.width as u32, self.height as u32)
            .ok_or(RenderError::Glyph("invalid size"))?;
        Pixmap::from_vec(self.to_rgba(), size).ok_or(RenderError::Glyph("data not matching size"))
    }
}

fn premultiply(channel: u8, alpha: u8) -> u8 {
    ((channel as u16 * alpha as u16 + 127) / 255) as u8
}

impl Drawable for Glyph {
    fn draw(&self, target: &mut Pixmap) -> Result<(), RenderError> {
        // whitespace has no coverage
        if self.height > 0 && self.width > 0 {
            let glyph_pixmap = self.to_pixmap()?;
            target.draw_pixmap(
                self.x,
                self.y,
                glyph_pixmap.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
        Ok(())
    }
}

/// Label text whose first line box starts at `position`. Lines break on `\n`.
pub struct Text<'a> {
    content: String,
    typeface: &'a dyn Typeface,
    position: Position,
    color: HexColor,
}

impl<'a> Text<'a> {
    pub fn new(
        content: String,
        typeface: &'a dyn Typeface,
        position: Position,
        color: HexColor,
    ) -> Self {
        Self {
            content,
            typeface,
            position,
            color,
        }
    }

    /// Always at least one line, so empty text keeps the line height.
    fn lines(&self) -> impl Iterator<Item = &str> {
        self.content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }

    /// Pen offsets of every char from the line start, kerning applied, plus the final advance.
    fn pen_positions(&self, line: &str) -> (Vec<(char, f32)>, f32) {
        let mut pen = 0.0;
        let mut previous = None;
        let mut positions = Vec::with_capacity(line.len());
        for ch in line.chars() {
            if let Some(prev) = previous {
                pen += self.typeface.kern(prev, ch);
            }
            positions.push((ch, pen));
            pen += self.typeface.advance(ch);
            previous = Some(ch);
        }
        (positions, pen)
    }

    /// Typographic size: widest line advance, line height times line count.
    pub fn extent(&self) -> TextExtent {
        let mut width: f32 = 0.0;
        let mut count = 0;
        for line in self.lines() {
            let (_, advance) = self.pen_positions(line);
            width = width.max(advance);
            count += 1;
        }
        TextExtent {
            width,
            height: self.typeface.line_metrics().line_height() * count as f32,
        }
    }

    fn glyphs(&self) -> Vec<Glyph> {
        let metrics = self.typeface.line_metrics();
        let mut glyphs = Vec::with_capacity(self.content.len());
        for (index, line) in self.lines().enumerate() {
            let baseline =
                self.position.y + metrics.line_height() * index as f32 + metrics.ascent;
            let (positions, _) = self.pen_positions(line);
            glyphs.extend(positions.into_iter().map(|(ch, pen)| {
                Glyph::new(
                    self.typeface,
                    ch,
                    self.position.x + pen,
                    baseline,
                    self.color,
                )
            }));
        }
        glyphs
    }
}

impl Drawable for Text<'_> {
    fn draw(&self, target: &mut Pixmap) -> Result<(), RenderError> {
        for glyph in self.glyphs() {
            glyph.draw(target)?;
        }
        Ok(())
    }
}
