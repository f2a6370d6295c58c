use crate::core::app_config::AppConfig;
use crate::core::gui_manager::GuiManager;
use crate::core::meta_store::MetaStore;
use crate::core::swap_session::SwapSession;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use crate::utils::logging::Logging;
use macros::log;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

pub struct System {
    app_config: Arc<AppConfig>,
    _log_guard: WorkerGuard,
}

impl System {
    pub fn initialize() -> Result<Self, Error> {
        let app_config = Arc::new(AppConfig::new()?);
        let log_guard = Logging::initialize(&app_config)?;

        log!(SystemLog::Initializing);
        if app_config.is_defaulted() {
            log!(SystemLog::ConfigDefaulted {
                path: app_config.path().to_path_buf()
            });
        }
        log!(SystemLog::InitializeComplete);

        Ok(Self {
            app_config,
            _log_guard: log_guard,
        })
    }

    pub fn run(&self) -> Result<(), Error> {
        log!(SystemLog::Online);

        let store = MetaStore::new(&self.app_config.meta_path);
        let session = SwapSession::restore(store);
        GuiManager::new(self.app_config.clone(), session)
            .start()
            .inspect_err(|err| log!(err))
    }

    pub fn terminate(self) {
        log!(SystemLog::Terminating);
        log!(SystemLog::TerminateComplete);
    }
}
