use pill_parser::ParseError;
use pill_renderer::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum PillError {
    /// The command line could not be turned into pill arguments.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Font lookup, drawing or PNG encoding failed.
    #[error("Failed to render: {0}")]
    Render(#[from] RenderError),
}

impl PillError {
    /// Help and version requests are reported on stdout with a zero exit code.
    pub fn is_informational(&self) -> bool {
        matches!(self, PillError::Parse(err) if err.is_informational())
    }
}
