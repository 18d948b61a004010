//! Ratatui front-end for the songbook. State lives in `screens`, modal form
//! state in `forms`, drawing and key dispatch in `app`, and the raw-mode
//! event loop in `terminal`.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
