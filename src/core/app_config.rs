use crate::model::config::{Config, ConfigTable};
use crate::model::error::Error;
use crate::model::error::system::SystemError;
use std::fs;
use std::io::ErrorKind;
use std::ops::{Deref, RangeInclusive};
use std::path::{Path, PathBuf};

pub const CONFIG_PATH: &str = "./config.toml";

const WARNING_DURATION_RANGE: RangeInclusive<u64> = 1..=60_000;
const WINDOW_SIDE_RANGE: RangeInclusive<f32> = 200.0..=4000.0;

pub struct AppConfig {
    config: Config,
    path: PathBuf,
    defaulted: bool,
}

impl AppConfig {
    pub fn new() -> Result<Self, Error> {
        Self::load(Path::new(CONFIG_PATH))
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let (config, defaulted) = match fs::read_to_string(path) {
            Ok(toml_string) => (Self::parse(path, &toml_string)?, false),
            Err(err) if err.kind() == ErrorKind::NotFound => (Config::default(), true),
            Err(err) => Err(SystemError::ReadConfigFailed(path, err))?,
        };
        Self::validate(&config)?;
        Ok(Self {
            config,
            path: path.to_path_buf(),
            defaulted,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_defaulted(&self) -> bool {
        self.defaulted
    }

    fn parse(path: &Path, toml_string: &str) -> Result<Config, Error> {
        let config = toml::from_str::<ConfigTable>(toml_string)
            .map_err(|err| SystemError::InvalidConfig(path, err))?
            .config;
        Ok(config)
    }

    fn validate(config: &Config) -> Result<(), Error> {
        if !WARNING_DURATION_RANGE.contains(&config.warning_duration_ms) {
            Err(SystemError::ConfigOutOfRange("warning_duration_ms"))?
        }
        if !WINDOW_SIDE_RANGE.contains(&config.window_width) {
            Err(SystemError::ConfigOutOfRange("window_width"))?
        }
        if !WINDOW_SIDE_RANGE.contains(&config.window_height) {
            Err(SystemError::ConfigOutOfRange("window_height"))?
        }
        Ok(())
    }
}

impl Deref for AppConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let tmp = tempdir().unwrap();

        let app_config = AppConfig::load(&tmp.path().join("config.toml")).unwrap();

        assert!(app_config.is_defaulted());
        assert_eq!(*app_config, Config::default());
        assert_eq!(app_config.warning_duration_ms, 2000);
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "[Config]\nmeta_path = \"/srv/swapper/meta.json\"\nwarning_duration_ms = 3500\n",
        )
        .unwrap();

        let app_config = AppConfig::load(&path).unwrap();

        assert!(!app_config.is_defaulted());
        assert_eq!(app_config.meta_path, PathBuf::from("/srv/swapper/meta.json"));
        assert_eq!(app_config.warning_duration_ms, 3500);
        assert_eq!(app_config.log_level, "info");
    }

    #[test]
    fn malformed_file_is_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[Config\nwarning_duration_ms = ").unwrap();

        let err = AppConfig::load(&path).err().unwrap();

        assert!(matches!(err, Error::System(SystemError::InvalidConfig { .. })));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[Config]\nwarning_duration_ms = 0\n").unwrap();

        let err = AppConfig::load(&path).err().unwrap();

        assert_eq!(
            err,
            Error::System(SystemError::ConfigOutOfRange("warning_duration_ms"))
        );
    }
}
