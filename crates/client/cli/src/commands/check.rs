//! Validate content without simulating.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use super::{ContentArgs, build_stage};

/// Load and validate content without simulating
#[derive(Args, Debug)]
pub struct Check {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Check every level under `levels/` instead of only `--level`
    #[arg(long)]
    pub all: bool,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let factory = self.content.factory()?;
        let levels = if self.all {
            level_names(&factory.data_dir().join("levels"))?
        } else {
            vec![self.content.level.clone()]
        };

        for level in &levels {
            let stage = build_stage(&factory, level)?;
            let world = stage.world();
            println!(
                "✓ {}: {} enemies, {} hiding spots, {} broken tiles, {} pickups, {}",
                level,
                stage.enemies().len(),
                world.hiding_spots.len(),
                world.broken_tiles.len(),
                world.pickups.len(),
                match &world.exit {
                    Some(exit) => match &exit.required_item {
                        Some(item) => format!("exit needs {item}"),
                        None => "open exit".to_string(),
                    },
                    None => "no exit".to_string(),
                }
            );
        }

        println!(
            "{} items, {} recipes",
            factory.load_items()?.len(),
            factory.load_recipes()?.len()
        );
        Ok(())
    }
}

/// Level names (file stems) of every `.ron` file in `dir`, sorted.
fn level_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read level directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "ron") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
    }
    names.sort();

    if names.is_empty() {
        anyhow::bail!("No levels found in {}", dir.display());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn lists_sample_levels() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../game/content/data/levels");
        assert_eq!(level_names(&dir).unwrap(), vec!["corridor", "facility"]);
    }

    #[test]
    fn empty_level_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(level_names(dir.path()).is_err());
    }
}
