use std::ffi::OsString;

use clap::{CommandFactory, Parser};

use crate::{HexColor, ParseError, ParseErrorKind};

pub const DEFAULT_FONT_SIZE: f32 = 11.0;
pub const DEFAULT_PADDING_X: f32 = 8.0;
pub const DEFAULT_PADDING_Y: f32 = 3.0;

/// Raw positional arguments, kept as strings so bad numbers can fall back to defaults.
///
/// Values are taken strictly by position; clap only answers a lone `--help`/`--version`
/// and renders the usage line.
#[derive(Debug, Parser)]
#[command(
    name = "pill_render",
    version,
    about = "Render a text label as a rounded pill and print it as a base64-encoded PNG"
)]
struct Cli {
    /// Label text
    #[arg(value_name = "text", allow_hyphen_values = true)]
    text: String,

    /// Background color, `#RRGGBB` or `RRGGBB`
    #[arg(value_name = "bg_hex", allow_hyphen_values = true)]
    bg_hex: String,

    /// Foreground (text) color, `#RRGGBB` or `RRGGBB`
    #[arg(value_name = "fg_hex", allow_hyphen_values = true)]
    fg_hex: String,

    /// Font size in pixels [default: 11]
    #[arg(value_name = "font_size", allow_hyphen_values = true)]
    font_size: Option<String>,

    /// Horizontal padding in pixels [default: 8]
    #[arg(value_name = "pad_x", allow_hyphen_values = true)]
    pad_x: Option<String>,

    /// Vertical padding in pixels [default: 3]
    #[arg(value_name = "pad_y", allow_hyphen_values = true)]
    pad_y: Option<String>,

    #[arg(hide = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub x: f32,
    pub y: f32,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            x: DEFAULT_PADDING_X,
            y: DEFAULT_PADDING_Y,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PillArgs {
    pub text: String,
    pub background: HexColor,
    pub foreground: HexColor,
    pub font_size: f32,
    pub padding: Padding,
}

impl PillArgs {
    pub fn new(text: impl Into<String>, background: HexColor, foreground: HexColor) -> Self {
        Self {
            text: text.into(),
            background,
            foreground,
            font_size: DEFAULT_FONT_SIZE,
            padding: Padding::default(),
        }
    }
}

impl From<Cli> for PillArgs {
    fn from(cli: Cli) -> Self {
        if !cli.rest.is_empty() {
            tracing::debug!(ignored = ?cli.rest, "ignoring extra positional arguments");
        }

        let font_size = lenient_number(cli.font_size.as_deref(), DEFAULT_FONT_SIZE);
        let padding = Padding {
            x: lenient_number(cli.pad_x.as_deref(), DEFAULT_PADDING_X),
            y: lenient_number(cli.pad_y.as_deref(), DEFAULT_PADDING_Y),
        };

        Self {
            text: cli.text,
            background: HexColor::parse(&cli.bg_hex),
            foreground: HexColor::parse(&cli.fg_hex),
            font_size,
            padding,
        }
    }
}

impl Cli {
    fn from_positions(args: &[OsString]) -> Option<Self> {
        let mut values = args
            .iter()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned());
        Some(Self {
            text: values.next()?,
            bg_hex: values.next()?,
            fg_hex: values.next()?,
            font_size: values.next(),
            pad_x: values.next(),
            pad_y: values.next(),
            rest: values.collect(),
        })
    }
}

/// Parse a full argument list, program name first.
///
/// Any three values render, including labels such as `--` or `-h`.
pub fn parse_args<I, T>(args: I) -> Result<PillArgs, ParseError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let Some(cli) = Cli::from_positions(&args) else {
        return Err(match Cli::try_parse_from(&args) {
            // lone flag or a single label
            Err(err) if args.len() <= 2 => err.into(),
            _ => usage_error(args.len().saturating_sub(1)),
        });
    };
    Ok(cli.into())
}

fn usage_error(provided: usize) -> ParseError {
    let usage = Cli::command().render_usage();
    ParseError {
        kind: ParseErrorKind::Usage,
        message: format!("error: expected at least 3 arguments, got {provided}\n\n{usage}"),
    }
}

/// Values that do not parse as a finite number fall back to `default`.
fn lenient_number(raw: Option<&str>, default: f32) -> f32 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value as f32,
        _ => {
            tracing::warn!(value = raw, default, "non-numeric argument, using default");
            default
        }
    }
}
