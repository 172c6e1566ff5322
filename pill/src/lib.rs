use std::ffi::OsString;

mod error;

pub use error::*;

pub use pill_parser::{HexColor, Padding, PillArgs, parse_args};
pub use pill_renderer::{
    PillGeometry, RenderOutput, SizedFont, TextExtent, Typeface, load_system_font, render,
};

pub struct PillRenderer;

impl PillRenderer {
    /// Render with the default system font.
    pub fn render(args: &PillArgs) -> Result<RenderOutput, PillError> {
        let font = load_system_font()?;
        let typeface = SizedFont::new(font, args.font_size);
        tracing::debug!(px = typeface.px(), text = %args.text, "rendering pill");
        Ok(render(args, &typeface)?)
    }

    /// Full pipeline from a raw argument list, program name first.
    pub fn parse_and_render<I, T>(args: I) -> Result<RenderOutput, PillError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = parse_args(args)?;
        Self::render(&args)
    }
}
