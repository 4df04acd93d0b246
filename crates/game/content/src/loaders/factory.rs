//! Content factory resolving every data file from one directory.

use std::path::{Path, PathBuf};

use hollows_core::AlertConfig;

use crate::items::{ItemSpec, RecipeSpec};
use crate::level::{EnemySpec, LevelSpec};
use crate::loaders::{
    AlertConfigLoader, ItemLoader, LevelLoader, LoadResult, PlayerTuningLoader, RecipeLoader,
};
use crate::player::PlayerTuning;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── alert.toml
/// ├── player.toml
/// ├── items.ron
/// ├── recipes.ron
/// └── levels/
///     └── facility.ron
/// ```
///
/// Enemies may name their own tuning file; it is resolved relative to
/// `data_dir`.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load shared enemy tuning from `alert.toml`.
    pub fn load_alert_config(&self) -> LoadResult<AlertConfig> {
        AlertConfigLoader::load(&self.data_dir.join("alert.toml"))
    }

    /// Load player tuning from `player.toml`.
    pub fn load_player_tuning(&self) -> LoadResult<PlayerTuning> {
        PlayerTuningLoader::load(&self.data_dir.join("player.toml"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemSpec>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load crafting recipes from `recipes.ron`.
    pub fn load_recipes(&self) -> LoadResult<Vec<RecipeSpec>> {
        RecipeLoader::load(&self.data_dir.join("recipes.ron"))
    }

    /// Load a level from `levels/{level_name}.ron`.
    pub fn load_level(&self, level_name: &str) -> LoadResult<LevelSpec> {
        LevelLoader::load(&self.level_path(level_name))
    }

    /// Tuning for one enemy: its own file when named, `shared` otherwise.
    pub fn resolve_enemy_config(
        &self,
        enemy: &EnemySpec,
        shared: &AlertConfig,
    ) -> LoadResult<AlertConfig> {
        match &enemy.tuning {
            Some(file) => {
                tracing::debug!("Enemy '{}' uses tuning override {}", enemy.name, file);
                AlertConfigLoader::load(&self.data_dir.join(file))
            }
            None => Ok(shared.clone()),
        }
    }

    pub fn level_path(&self, level_name: &str) -> PathBuf {
        self.data_dir
            .join("levels")
            .join(format!("{}.ron", level_name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
