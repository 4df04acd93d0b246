//! Ordered crafting recipe loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::items::RecipeSpec;
use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecipeBookRon {
    recipes: Vec<RecipeSpec>,
}

/// Loader for crafting recipes from RON files.
pub struct RecipeLoader;

impl RecipeLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<RecipeSpec>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<RecipeSpec>> {
        let book: RecipeBookRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse recipe RON: {}", e))?;

        for recipe in &book.recipes {
            anyhow::ensure!(
                !recipe.ordered_items.is_empty(),
                "recipe '{}' has no inputs",
                recipe.name
            );
        }

        Ok(book.recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_recipe_rejected() {
        let err = RecipeLoader::parse(
            r#"(recipes: [(name: "Nothing", ordered_items: [], result: "Air")])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Nothing"));
    }
}
