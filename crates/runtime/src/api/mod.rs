//! Types exchanged between the stage and its driver.
mod errors;
mod events;
mod input;

pub use errors::{CraftError, InventoryError, Result, RuntimeError};
pub use events::{EnemyStatus, FrameReport, StageEvent};
pub use input::FrameInput;
