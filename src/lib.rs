//! # Connect Four
//!
//! A two-player Connect Four rules engine with a terminal front end built on
//! Ratatui. The engine is a pure state machine: callers pick a column and get
//! back the next state or a [`error::MoveError`].
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Terminal UI: board view, key handling, themes
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
