use serde::Deserialize;
use std::path::PathBuf;

use crate::render::OutputFormat;

fn default_width() -> f64 {
    900.0
}
fn default_hex_radius() -> f64 {
    40.0
}
fn default_simplify() -> u8 {
    0
}
fn default_verbose() -> bool {
    false
}

/// Settings loadable from a toml file; every field can be overridden on the
/// command line.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_hex_radius")]
    pub hex_radius: f64,
    #[serde(default)]
    pub hex_km: Option<f64>,
    #[serde(default = "default_simplify")]
    pub simplify: u8,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("hexcover.toml"));
    paths.push(PathBuf::from(".hexcover.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("hexcover").join("config.toml"));
        paths.push(config_dir.join("hexcover.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".hexcover.toml"));
        paths.push(home.join(".config").join("hexcover").join("config.toml"));
    }

    paths
}
