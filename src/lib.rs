//! # Connect Four
//!
//! A two-player Connect Four rules engine with a terminal front end built
//! with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player ids, rules engine state machine
//! - [`ui`] — Terminal UI: board view and key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
