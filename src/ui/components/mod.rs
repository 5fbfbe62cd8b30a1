//! Reusable UI components

pub mod dialog_component;
pub mod input_component;
pub mod status_bar;
pub mod task_item_component;
pub mod zone_component;

// Component exports
pub use dialog_component::{DialogComponent, DialogType};
pub use input_component::InputComponent;
pub use status_bar::{StatusBar, StatusMode};
pub use task_item_component::{ItemHit, TaskItem};
pub use zone_component::ZoneComponent;
