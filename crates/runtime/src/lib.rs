//! Headless runtime for the Hollows stealth simulation.
//!
//! This crate hosts the behavior controllers from `hollows-core` inside a
//! frame-driven [`Stage`] built from `hollows-content` definitions. It owns
//! the player-side mechanics that produce noise and concealment, routes sound
//! events to every enemy, and tracks the session outcome.
//!
//! Modules are organized by responsibility:
//! - [`stage`] hosts the frame loop and its builder
//! - [`api`] exposes the types drivers exchange with the stage
//! - [`events`] batches sounds raised during a frame
//! - [`player`], [`world`] and [`session`] hold the simulated state
//! - [`agent`] provides the straight-line pathing agent enemies drive
//! - [`script`] expands timed input tracks into per-frame input
pub mod agent;
pub mod api;
pub mod enemy;
pub mod events;
pub mod player;
pub mod script;
pub mod session;
pub mod stage;
pub mod world;

pub use agent::KinematicAgent;
pub use api::{
    CraftError, EnemyStatus, FrameInput, FrameReport, InventoryError, Result, RuntimeError,
    StageEvent,
};
pub use enemy::{Enemy, EnemyController};
pub use events::{CatchLog, CatchRecorder, SoundBus};
pub use player::{Flashlight, Player, Toggle};
pub use script::{InputScript, ScriptFrames, ScriptSegment};
pub use session::{Inventory, ItemCatalog, ItemStack, OrderedRecipe, Outcome, RecipeBook, Session};
pub use stage::{RunSummary, Stage, StageBuilder};
pub use world::{BrokenTile, Exit, Pickup, World, Zone};
