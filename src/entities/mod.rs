pub mod task;
pub mod zone;

pub use task::{Task, TaskId};
pub use zone::{ParseZoneError, ZoneId};
