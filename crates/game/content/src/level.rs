//! Level layout definitions.
//!
//! A level places the player, the enemies with their patrol routes, and the
//! interactive zones (hiding spots, broken tiles, pickups, exit). Geometry is
//! circles only; the runtime resolves overlap with plain distance checks.

use hollows_core::{PatrolRoute, Vec2};

/// Complete layout of one level.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelSpec {
    pub name: String,
    pub player_spawn: Vec2,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemies: Vec<EnemySpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hiding_spots: Vec<ZoneSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub broken_tiles: Vec<ZoneSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pickups: Vec<PickupSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exit: Option<ExitSpec>,
}

/// One enemy: where it spawns and the loop it patrols.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySpec {
    pub name: String,
    pub spawn: Vec2,
    #[cfg_attr(feature = "serde", serde(default))]
    pub waypoints: Vec<Vec2>,
    /// Tuning file (relative to the data directory) overriding the shared
    /// `alert.toml` for this enemy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tuning: Option<String>,
}

impl EnemySpec {
    /// Builds the patrol route. Empty waypoint lists are kept as empty
    /// routes; the controller idles on them.
    pub fn route(&self) -> PatrolRoute {
        PatrolRoute::new(self.waypoints.clone())
    }
}

/// Circular trigger area.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneSpec {
    pub center: Vec2,
    pub radius: f32,
}

impl ZoneSpec {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An item lying in the level, collected with the interact key.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupSpec {
    pub item: String,
    pub position: Vec2,
    #[cfg_attr(feature = "serde", serde(default = "default_quantity"))]
    pub quantity: u32,
}

#[cfg(feature = "serde")]
fn default_quantity() -> u32 {
    1
}

/// Level exit. Reaching it while holding `required_item` wins the game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExitSpec {
    pub position: Vec2,
    pub radius: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_item: Option<String>,
}
