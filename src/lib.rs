//! todozone - a terminal to-do board
//!
//! Tasks live in two zones, pending and completed. They move between zones
//! by drag and drop (mouse or keyboard), are edited inline while pending,
//! and can be deleted once completed. Everything is kept in memory.
//!
//! # Modules
//!
//! * [`board`] - The task board and its state transitions
//! * [`cli`] - Command line arguments
//! * [`config`] - Application configuration management
//! * [`entities`] - Task and zone types
//! * [`ui`] - Terminal user interface components

/// Task board: both zones, the draft input and edit mode
pub mod board;

/// Command line parsing
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task and zone data types
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging to file and to the in-app log viewer
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

pub use board::{Board, BoardEvent};
pub use entities::{Task, TaskId, ZoneId};
