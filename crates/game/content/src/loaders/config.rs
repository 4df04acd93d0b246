//! Tuning loaders (TOML).

use std::path::Path;

use hollows_core::AlertConfig;

use crate::loaders::{LoadResult, read_file};
use crate::player::PlayerTuning;

/// Loader for enemy alert tuning.
pub struct AlertConfigLoader;

impl AlertConfigLoader {
    /// Load and validate an [`AlertConfig`] from a TOML file.
    ///
    /// Missing keys keep their defaults; non-positive or non-finite values
    /// are rejected.
    pub fn load(path: &Path) -> LoadResult<AlertConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<AlertConfig> {
        let config: AlertConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse alert config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

/// Loader for player movement and flashlight tuning.
pub struct PlayerTuningLoader;

impl PlayerTuningLoader {
    pub fn load(path: &Path) -> LoadResult<PlayerTuning> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<PlayerTuning> {
        let tuning: PlayerTuning = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse player tuning TOML: {}", e))?;

        let fields = [
            ("movement_speed", tuning.movement_speed),
            ("sprint_multiplier", tuning.sprint_multiplier),
            ("exhausted_multiplier", tuning.exhausted_multiplier),
            ("max_energy", tuning.max_energy),
            ("interact_radius", tuning.interact_radius),
            ("flashlight.max_charge", tuning.flashlight.max_charge),
        ];
        for (field, value) in fields {
            anyhow::ensure!(
                value.is_finite() && value > 0.0,
                "{} must be a finite positive number, got {}",
                field,
                value
            );
        }

        let rates = [
            ("energy_drain_rate", tuning.energy_drain_rate),
            ("energy_regen_rate", tuning.energy_regen_rate),
            ("flashlight.drain_rate", tuning.flashlight.drain_rate),
        ];
        for (field, value) in rates {
            anyhow::ensure!(
                value.is_finite() && value >= 0.0,
                "{} must be a finite non-negative number, got {}",
                field,
                value
            );
        }

        Ok(tuning)
    }
}
