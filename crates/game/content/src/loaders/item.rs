//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::items::ItemSpec;
use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemCatalogRon {
    items: Vec<ItemSpec>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing the catalog
    ///
    /// # Returns
    ///
    /// Returns the item entries in file order. Duplicate names are rejected.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemSpec>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemSpec>> {
        let catalog: ItemCatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for item in &catalog.items {
            anyhow::ensure!(
                seen.insert(item.name.as_str()),
                "duplicate item '{}'",
                item.name
            );
        }

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemEffect;

    #[test]
    fn parses_effects() {
        let items = ItemLoader::parse(
            r#"(
                items: [
                    (name: "Battery", description: "Recharges.", usable: true,
                     effect: Some(RechargeFlashlight(amount: 50.0))),
                    (name: "Wire", description: "Thin wire."),
                ],
            )"#,
        )
        .expect("valid catalog");

        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].effect,
            Some(ItemEffect::RechargeFlashlight { amount: 50.0 })
        );
        assert!(!items[1].usable);
    }

    #[test]
    fn rejects_duplicates() {
        let err = ItemLoader::parse(
            r#"(items: [(name: "Key", description: "a"), (name: "Key", description: "b")])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate item 'Key'"));
    }
}
