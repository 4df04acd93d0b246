//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Enemy alert tuning (TOML)
//! - Player movement and flashlight tuning (TOML)
//! - Level layouts: spawns, patrol routes, hiding spots, broken tiles, pickups, exit (RON)
//! - Item catalog and ordered crafting recipes (RON)
//!
//! Definitions are plain data; the runtime turns them into live simulation objects.

pub mod items;
pub mod level;
pub mod player;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use items::{ItemEffect, ItemSpec, RecipeSpec};
pub use level::{EnemySpec, ExitSpec, LevelSpec, PickupSpec, ZoneSpec};
pub use player::{FlashlightTuning, PlayerTuning};

#[cfg(feature = "loaders")]
pub use loaders::{
    AlertConfigLoader, ContentFactory, ItemLoader, LevelLoader, LoadResult, PlayerTuningLoader,
    RecipeLoader,
};
