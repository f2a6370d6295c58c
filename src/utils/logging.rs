use crate::model::config::Config;
use crate::model::error::Error;
use crate::model::error::io::IOError;
use crate::model::error::system::SystemError;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "swapper";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;

pub struct Logging;

impl Logging {
    pub fn initialize(config: &Config) -> Result<WorkerGuard, Error> {
        let filter =
            EnvFilter::try_new(&config.log_level).map_err(SystemError::LoggingInitFailed)?;

        fs::create_dir_all(&config.log_directory)
            .map_err(|err| IOError::CreateDirectoryFailed(&config.log_directory, err))?;
        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(MAX_LOG_FILES)
            .build(&config.log_directory)
            .map_err(SystemError::LoggingInitFailed)?;
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .with(fmt::layer().with_ansi(false).with_writer(file_writer))
            .try_init()
            .map_err(SystemError::LoggingInitFailed)?;

        log_panics::init();

        Ok(guard)
    }
}
