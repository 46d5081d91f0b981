//! Application bootstrap: terminal lifecycle around the event loop.

use anyhow::Result;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal::{self, TerminalGuard};

pub struct App {
    config: CliConfig,
}

impl App {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        let mouse_capture = self.config.mouse_capture;

        let mut terminal = terminal::init(mouse_capture)?;
        // Restores the terminal even when the loop unwinds.
        let _guard = TerminalGuard { mouse_capture };

        let result = EventLoop::new(self.config).run(&mut terminal).await;

        if let Err(error) = &result {
            tracing::error!("Event loop exited with error: {error:#}");
        }
        result
    }
}
