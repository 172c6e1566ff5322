use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Missing or unexpected arguments.
    Usage,
    /// `--help` was requested.
    Help,
    /// `--version` was requested.
    Version,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
}

impl ParseError {
    /// Help and version output belong on stdout and are not failures.
    pub fn is_informational(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Help | ParseErrorKind::Version)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // clap already renders the full message, including the usage line
        write!(f, "{}", self.message.trim_end())
    }
}

impl std::error::Error for ParseError {}

impl From<clap::Error> for ParseError {
    fn from(value: clap::Error) -> Self {
        let kind = match value.kind() {
            clap::error::ErrorKind::DisplayHelp => ParseErrorKind::Help,
            clap::error::ErrorKind::DisplayVersion => ParseErrorKind::Version,
            _ => ParseErrorKind::Usage,
        };
        ParseError {
            kind,
            message: value.render().to_string(),
        }
    }
}
