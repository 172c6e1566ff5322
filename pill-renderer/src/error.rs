/// Failures while producing the pill image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// No installed font face could be found.
    #[error("no usable system font")]
    NoSystemFont,

    /// The selected font face could not be parsed.
    #[error("font: {0}")]
    Font(&'static str),

    /// Glyphs cannot be rasterized at a zero or negative size.
    #[error("font size {0} is not positive")]
    FontSize(f32),

    /// The pixmap could not be created for the computed size.
    #[error("cannot allocate {width}x{height} pixmap")]
    PixmapAllocation { width: u32, height: u32 },

    /// The pill outline could not be built.
    #[error("invalid pill shape {width}x{height}")]
    Shape { width: f32, height: f32 },

    /// A rasterized glyph could not be turned into a pixmap.
    #[error("glyph: {0}")]
    Glyph(&'static str),

    /// PNG encoding failed.
    #[error("encode png: {0}")]
    Encode(String),
}
