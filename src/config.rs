use serde::Deserialize;
use std::fs;
use tracing::{info, warn};

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct MapConfig {
    #[serde(default = "default_map_path")]
    pub path: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ViewConfig {
    /// Side of one grid cell in pixels
    #[serde(default = "default_square")]
    pub square: f32,
    #[serde(default)]
    pub offset_x: i32,
    #[serde(default)]
    pub offset_y: i32,
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_bg")]
    pub background_r: u8,
    #[serde(default = "default_bg")]
    pub background_g: u8,
    #[serde(default = "default_bg")]
    pub background_b: u8,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_map_path() -> String { "maps/default.txt".to_string() }
fn default_square() -> f32 { 24.0 }
fn default_window_title() -> String { "Grid Map Viewer".to_string() }
fn default_bg() -> u8 { 0 }
fn default_log_level() -> String { "info".to_string() }

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            path: default_map_path(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            square: default_square(),
            offset_x: 0,
            offset_y: 0,
            window_title: default_window_title(),
            background_r: default_bg(),
            background_g: default_bg(),
            background_b: default_bg(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            view: ViewConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Where the active configuration came from
#[derive(Debug)]
pub enum ConfigSource {
    File,
    Missing,
    Invalid(toml::de::Error),
}

impl Config {
    /// Load configuration from config.toml, or use defaults if the file doesn't exist.
    /// Logging is not up yet at this point, so the outcome is returned for the caller to report.
    pub fn load() -> (Self, ConfigSource) {
        match fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => match Self::from_toml(&contents) {
                Ok(config) => (config, ConfigSource::File),
                Err(e) => (Config::default(), ConfigSource::Invalid(e)),
            },
            Err(_) => (Config::default(), ConfigSource::Missing),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

impl ConfigSource {
    pub fn report(&self) {
        match self {
            ConfigSource::File => info!("loaded configuration from {}", CONFIG_PATH),
            ConfigSource::Missing => info!("no {} found, using default configuration", CONFIG_PATH),
            ConfigSource::Invalid(e) => {
                warn!("failed to parse {}: {}; using default configuration", CONFIG_PATH, e)
            }
        }
    }
}
