//! Content loaders for reading game data from files.
//!
//! Tuning lives in TOML, layouts and catalogs in RON. Every loader reports
//! failures as [`anyhow::Error`] carrying the offending path.

pub mod config;
pub mod factory;
pub mod item;
pub mod level;
pub mod recipe;

pub use config::{AlertConfigLoader, PlayerTuningLoader};
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use level::LevelLoader;
pub use recipe::RecipeLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
