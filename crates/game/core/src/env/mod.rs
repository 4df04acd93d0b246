//! Traits describing the collaborators a behavior controller drives or reads.
//!
//! The controller never owns engine objects directly. It talks to a
//! [`PathingProvider`] (the navigation agent it steers) and a
//! [`TargetStatus`] (the read-only view of whoever it hunts). Hosts plug in
//! their own implementations; the runtime crate ships a straight-line agent
//! and the cell-backed [`TargetBeacon`].
mod pathing;
mod target;

pub use pathing::PathingProvider;
pub use target::{TargetBeacon, TargetStatus};
