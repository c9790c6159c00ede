//! Terminal UI: the board, score, highscore table and controls for one
//! human-vs-computer session.

mod app;
mod game_view;

pub use app::App;
