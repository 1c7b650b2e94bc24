use crate::config::RenderConfig;
use crate::input::gui::app::run_gui;

pub struct RunGuiCommand {
    config: RenderConfig,
}

impl RunGuiCommand {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        run_gui(&self.config)
    }
}
