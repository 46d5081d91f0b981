//! Event loop orchestrating input, mechanic timers, and rendering.
//!
//! Two wakeup sources drive the loop: a fixed frame tick for polling
//! terminal input, and a one-shot sleep armed at the earliest pending
//! mechanic deadline so timed feedback clears land on time instead of a
//! frame late.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tokio::time;

use crate::config::CliConfig;
use crate::presentation::{self, terminal::Tui};
use crate::state::AppState;

use super::{input, pointer};

pub struct EventLoop {
    config: CliConfig,
    state: AppState,
}

impl EventLoop {
    pub fn new(config: CliConfig) -> Self {
        let state = AppState::new(config.error_clear);
        Self { config, state }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        loop {
            let deadline = self.state.next_deadline();

            tokio::select! {
                _ = time::sleep(self.config.frame_interval) => {
                    let redraw = self.drain_terminal_events()?;
                    let ticked = self.state.tick(Instant::now());
                    if redraw || ticked {
                        self.render(terminal)?;
                    }
                }
                _ = sleep_until(deadline), if deadline.is_some() => {
                    if self.state.tick(Instant::now()) {
                        self.render(terminal)?;
                    }
                }
            }

            if self.state.should_quit {
                tracing::info!("Quit requested");
                break;
            }
        }

        Ok(())
    }

    /// Drains every pending terminal event. Returns true when anything
    /// was consumed and the screen should repaint.
    fn drain_terminal_events(&mut self) -> Result<bool> {
        let mut consumed = false;
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut self.state, key),
                Event::Mouse(mouse) => pointer::handle_mouse(&mut self.state, mouse),
                Event::Resize(_, _) => {}
                _ => continue,
            }
            consumed = true;
        }
        Ok(consumed)
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        terminal.draw(|frame| presentation::ui::render(frame, &mut self.state))?;
        Ok(())
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(time::Instant::from_std(deadline)).await,
        // Guarded out of the select arm; never actually awaited.
        None => std::future::pending().await,
    }
}
