//! Input handling and the main event loop.

mod input;
mod r#loop;
mod pointer;

pub use r#loop::EventLoop;
