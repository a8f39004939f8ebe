//! # Connect Four
//!
//! A two-player Connect Four game for the terminal. The board engine owns all
//! game state; two thin front ends drive it: a line-oriented console game and
//! a full-screen terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, notation, state machine
//! - [`console`] — ASCII board and prompt loop on stdin/stdout
//! - [`ui`] — Terminal UI game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — `env_logger` setup

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
