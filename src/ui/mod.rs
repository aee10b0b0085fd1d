//! Terminal UI: draws the board and translates key presses into engine calls.

mod app;
mod game_view;

pub use app::App;
