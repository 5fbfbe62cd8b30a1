//! Core UI functionality for todozone.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and focus
//! - [`component`] - Base component trait and rendering abstractions
//! - [`dnd`] - Drag source / drop target capabilities and drag tracking
//! - [`event_handler`] - Terminal event polling
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn input into [`Action`]s
//! 2. **Drag sources** and **drop targets** describe what can be dragged and where it can land
//! 3. The app component resolves actions against the task board and redraws

pub mod actions;
pub mod component;
pub mod dnd;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, Focus};
pub use component::Component;
pub use dnd::{DragEnd, DragSource, DragState, DropTarget};
pub use event_handler::{EventHandler, EventType};
