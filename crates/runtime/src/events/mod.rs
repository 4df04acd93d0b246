//! Event plumbing between the player-side mechanics and the enemies.
mod bus;
mod catches;

pub use bus::SoundBus;
pub use catches::{CatchLog, CatchRecorder};
