//! Terminal rendering: screen layout, theming, and widgets.

pub mod terminal;
pub mod theme;
pub mod ui;
mod widgets;
