use crate::core::app_config::AppConfig;
use crate::core::swap_session::SwapSession;
use crate::model::error::Error;
use crate::model::error::misc::MiscError;
use crate::ui::main_page::MainPage;
use eframe::egui;
use std::sync::Arc;

const WINDOW_TITLE: &str = "Foundry Data Swapper";

pub struct GuiManager {
    app_config: Arc<AppConfig>,
    session: SwapSession,
}

impl GuiManager {
    pub fn new(app_config: Arc<AppConfig>, session: SwapSession) -> Self {
        Self {
            app_config,
            session,
        }
    }

    pub fn start(self) -> Result<(), Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.app_config.window_width, self.app_config.window_height])
                .with_resizable(false)
                .with_title(WINDOW_TITLE),
            ..Default::default()
        };

        let main_page = MainPage::new(self.app_config, self.session);
        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(|_| Ok(Box::new(main_page))),
        )
        .map_err(MiscError::UIPlatformError)?;

        Ok(())
    }
}
