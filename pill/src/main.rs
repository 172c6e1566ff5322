//! `pill_render <text> <bg_hex> <fg_hex> [font_size] [pad_x] [pad_y]`
//!
//! Prints the rendered pill as one line of base64-encoded PNG.

use std::io::Write as _;
use std::process::ExitCode;

use pill::{PillError, PillRenderer};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // stdout carries the image, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match PillRenderer::parse_and_render(std::env::args_os()) {
        Ok(output) => emit(&output.to_base64()),
        Err(err) if err.is_informational() => {
            println!("{err}");
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

fn emit(encoded: &str) -> ExitCode {
    let mut stdout = std::io::stdout().lock();
    match writeln!(stdout, "{encoded}").and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "failed to write image to stdout");
            ExitCode::FAILURE
        }
    }
}

fn fail(err: &PillError) -> ExitCode {
    eprintln!("{err}");
    ExitCode::FAILURE
}
