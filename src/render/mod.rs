pub mod json;
pub mod svg;

pub use json::write_json;
pub use svg::write_svg;

use serde::Deserialize;

/// Output document format for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Json,
}
