mod args;
mod color;
mod error;

pub use args::*;
pub use color::*;
pub use error::*;
