//! # Connect N
//!
//! Connect Four on a board of any size: players drop pieces into columns and
//! win by lining up `n` of their own horizontally, vertically, or diagonally.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Line-based terminal driver with rematch prompt
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
