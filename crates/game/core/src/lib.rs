//! Enemy behavior logic for the Hollows stealth prototype.
//!
//! `hollows-core` holds the engine-independent part of the game: the
//! Patrol / Investigate / Chase state machine that drives each enemy, the
//! perception rules it applies, and the collaborator traits it talks
//! through. Hosts (the runtime stage, tests, an engine binding) advance it
//! with explicit [`BehaviorController::tick`] calls and feed it sounds with
//! [`BehaviorController::on_heard_sound`].
pub mod config;
pub mod controller;
pub mod env;
pub mod error;
pub mod math;
pub mod perception;
pub mod route;
pub mod sound;

pub use config::AlertConfig;
pub use controller::{
    BehaviorController, BehaviorState, CatchEvent, CatchListener, InvestigationPhase,
    InvestigationTarget, TickReport, Transition, TransitionCause,
};
pub use env::{PathingProvider, TargetBeacon, TargetStatus};
pub use error::{ConfigError, ErrorSeverity, HollowsError, RouteError};
pub use math::Vec2;
pub use perception::Perception;
pub use route::PatrolRoute;
pub use sound::{SoundCause, SoundEvent};
