use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigTable {
    #[serde(rename = "Config")]
    pub config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub meta_path: PathBuf,
    pub log_directory: PathBuf,
    pub log_level: String,
    pub warning_duration_ms: u64, // milli second
    pub window_width: f32,        // logical pixel
    pub window_height: f32,       // logical pixel
}

impl Default for Config {
    fn default() -> Self {
        Self {
            meta_path: PathBuf::from("./meta.json"),
            log_directory: PathBuf::from("./logs"),
            log_level: "info".to_string(),
            warning_duration_ms: 2000,
            window_width: 650.0,
            window_height: 375.0,
        }
    }
}
