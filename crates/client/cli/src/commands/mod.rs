//! Subcommand implementations.

mod check;
mod run;

pub use check::Check;
pub use run::Run;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hollows_content::ContentFactory;
use hollows_runtime::Stage;

/// Where content comes from. Shared by every subcommand.
#[derive(Args, Debug)]
pub struct ContentArgs {
    /// Content data directory (alert.toml, player.toml, items.ron, recipes.ron, levels/)
    #[arg(
        long,
        env = "HOLLOWS_DATA_DIR",
        default_value = "crates/game/content/data",
        value_name = "DIR"
    )]
    pub data: PathBuf,

    /// Level name, resolved as `levels/<name>.ron` under the data directory
    #[arg(long, default_value = "facility")]
    pub level: String,
}

impl ContentArgs {
    pub fn factory(&self) -> Result<ContentFactory> {
        if !self.data.is_dir() {
            anyhow::bail!(
                "Content data directory not found: {}\nPass --data or set HOLLOWS_DATA_DIR.",
                self.data.display()
            );
        }
        Ok(ContentFactory::new(&self.data))
    }

    pub fn build_stage(&self) -> Result<Stage> {
        build_stage(&self.factory()?, &self.level)
    }
}

/// Loads shared tuning, items, recipes and `level`, then builds a stage.
///
/// Enemies naming a tuning file get their own alert config; the rest share
/// `alert.toml`.
pub fn build_stage(factory: &ContentFactory, level: &str) -> Result<Stage> {
    let shared = factory.load_alert_config()?;
    let level_spec = factory.load_level(level)?;

    let mut builder = Stage::builder()
        .player_tuning(factory.load_player_tuning()?)
        .items(factory.load_items()?)
        .recipes(factory.load_recipes()?);

    for enemy in level_spec.enemies.iter().filter(|e| e.tuning.is_some()) {
        let config = factory.resolve_enemy_config(enemy, &shared)?;
        tracing::debug!("Enemy '{}' uses tuning override", enemy.name);
        builder = builder.enemy_config(enemy.name.clone(), config);
    }

    builder
        .alert_config(shared)
        .level(level_spec)
        .build()
        .with_context(|| format!("Failed to build level '{}'", level))
}
