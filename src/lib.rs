//! # Classic Connect Four
//!
//! Connect Four against a pattern-matching computer opponent on a
//! configurable board, with a persisted top-10 highscore list and a
//! terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, line detection, player, session state machine
//! - [`ai`]: Agent trait, tiered heuristic opponent, random fallback
//! - [`highscores`]: Top-10 highscore file
//! - [`ui`]: Terminal UI
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod highscores;
pub mod ui;
