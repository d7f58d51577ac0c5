pub mod compress;
pub mod config;
pub mod grid;
pub mod histogram;
pub mod parse;
pub mod plane;
pub mod profile;

use miette::*;

pub use config::{Configuration, Segment};
pub use plane::{solve, CompressedPlane};

/// Parses the textual input and returns the largest wall-free area.
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn process(input: &str) -> Result<String> {
    let cfg = parse::parse_configuration(input)?;
    let area = solve(&cfg)?;
    Ok(area.to_string())
}
