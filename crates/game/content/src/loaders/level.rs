//! Level layout loader.

use std::collections::HashSet;
use std::path::Path;

use hollows_core::Vec2;

use crate::level::{LevelSpec, ZoneSpec};
use crate::loaders::{LoadResult, read_file};

/// Loader for level layouts from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level from a RON file and check its geometry.
    ///
    /// Enemies without waypoints are accepted; they idle in place and the
    /// controller logs the misconfiguration once.
    pub fn load(path: &Path) -> LoadResult<LevelSpec> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<LevelSpec> {
        let level: LevelSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;
        Self::validate(&level)?;
        Ok(level)
    }

    fn validate(level: &LevelSpec) -> LoadResult<()> {
        ensure_finite("player_spawn", level.player_spawn)?;

        let mut names = HashSet::new();
        for enemy in &level.enemies {
            anyhow::ensure!(
                names.insert(enemy.name.as_str()),
                "duplicate enemy '{}'",
                enemy.name
            );
            ensure_finite(&enemy.name, enemy.spawn)?;
            if enemy.waypoints.is_empty() {
                tracing::warn!("Enemy '{}' has no patrol waypoints", enemy.name);
            } else if let Err(e) = hollows_core::PatrolRoute::try_new(enemy.waypoints.clone()) {
                anyhow::bail!("enemy '{}': {}", enemy.name, e);
            }
        }

        for zone in &level.hiding_spots {
            ensure_zone("hiding spot", zone)?;
        }
        for zone in &level.broken_tiles {
            ensure_zone("broken tile", zone)?;
        }

        for pickup in &level.pickups {
            ensure_finite(&pickup.item, pickup.position)?;
            anyhow::ensure!(
                pickup.quantity > 0,
                "pickup '{}' has zero quantity",
                pickup.item
            );
        }

        if let Some(exit) = &level.exit {
            ensure_zone("exit", &ZoneSpec::new(exit.position, exit.radius))?;
        }

        Ok(())
    }
}

fn ensure_finite(what: &str, point: Vec2) -> LoadResult<()> {
    anyhow::ensure!(point.is_finite(), "{} has a non-finite position", what);
    Ok(())
}

fn ensure_zone(what: &str, zone: &ZoneSpec) -> LoadResult<()> {
    ensure_finite(what, zone.center)?;
    anyhow::ensure!(
        zone.radius.is_finite() && zone.radius > 0.0,
        "{} at {} has invalid radius {}",
        what,
        zone.center,
        zone.radius
    );
    Ok(())
}
