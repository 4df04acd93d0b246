use std::collections::BTreeMap;

use hollows_content::RecipeSpec;

use crate::api::CraftError;
use crate::session::Inventory;

/// Recipes whose inputs must be placed in a fixed order.
pub type OrderedRecipe = RecipeSpec;

/// All recipes known to a level.
#[derive(Clone, Debug, Default)]
pub struct RecipeBook {
    recipes: Vec<OrderedRecipe>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<OrderedRecipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[OrderedRecipe] {
        &self.recipes
    }

    /// Finds the recipe matching `placed` exactly, in order.
    ///
    /// When no recipe matches but one uses the same items in another order,
    /// the error names that recipe so the player knows the order is off.
    pub fn find(&self, placed: &[String]) -> Result<&OrderedRecipe, CraftError> {
        if let Some(recipe) = self.recipes.iter().find(|r| r.matches_order(placed)) {
            return Ok(recipe);
        }

        let placed_counts = tally(placed);
        if let Some(recipe) = self
            .recipes
            .iter()
            .find(|r| tally(&r.ordered_items) == placed_counts)
        {
            return Err(CraftError::WrongOrder {
                recipe: recipe.name.clone(),
                expected: recipe.ordered_items.clone(),
            });
        }

        Err(CraftError::NoRecipe {
            placed: placed.to_vec(),
        })
    }

    /// Consumes the placed inputs from `inventory` and adds the result.
    ///
    /// Returns the crafted item's name. The inventory is untouched on error.
    pub fn craft(&self, inventory: &mut Inventory, placed: &[String]) -> Result<String, CraftError> {
        let recipe = self.find(placed)?;

        for (item, needed) in tally(&recipe.ordered_items) {
            let held = inventory.count(item);
            if held < needed {
                return Err(CraftError::MissingInput {
                    recipe: recipe.name.clone(),
                    item: item.to_string(),
                    needed,
                    held,
                });
            }
        }

        for item in &recipe.ordered_items {
            // Counts were checked above.
            if inventory.remove(item, 1).is_err() {
                tracing::error!("RecipeBook: lost track of '{}' while crafting", item);
            }
        }
        inventory.add(&recipe.result, 1);

        tracing::info!("Crafted '{}' with recipe '{}'", recipe.result, recipe.name);
        Ok(recipe.result.clone())
    }
}

fn tally<S: AsRef<str>>(items: &[S]) -> BTreeMap<&str, u32> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.as_ref()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> RecipeBook {
        RecipeBook::new(vec![OrderedRecipe {
            name: "Lockpick".into(),
            ordered_items: vec![
                "Metal Bed Frame Piece".into(),
                "Wire".into(),
                "Toothbrush Handle".into(),
            ],
            result: "Makeshift Lockpick Set".into(),
            description: String::new(),
        }])
    }

    fn placed(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn stocked() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add("Metal Bed Frame Piece", 1);
        inventory.add("Wire", 2);
        inventory.add("Toothbrush Handle", 1);
        inventory
    }

    #[test]
    fn crafting_consumes_inputs() {
        let mut inventory = stocked();
        let result = book()
            .craft(
                &mut inventory,
                &placed(&["Metal Bed Frame Piece", "Wire", "Toothbrush Handle"]),
            )
            .unwrap();

        assert_eq!(result, "Makeshift Lockpick Set");
        assert_eq!(inventory.count("Makeshift Lockpick Set"), 1);
        assert_eq!(inventory.count("Wire"), 1);
        assert!(!inventory.contains("Metal Bed Frame Piece"));
    }

    #[test]
    fn wrong_order_is_reported() {
        let mut inventory = stocked();
        let err = book()
            .craft(
                &mut inventory,
                &placed(&["Wire", "Metal Bed Frame Piece", "Toothbrush Handle"]),
            )
            .unwrap_err();

        assert!(matches!(err, CraftError::WrongOrder { ref recipe, .. } if recipe == "Lockpick"));
        assert_eq!(inventory, stocked());
    }

    #[test]
    fn missing_input_is_reported() {
        let mut inventory = Inventory::new();
        inventory.add("Metal Bed Frame Piece", 1);
        inventory.add("Wire", 1);

        let err = book()
            .craft(
                &mut inventory,
                &placed(&["Metal Bed Frame Piece", "Wire", "Toothbrush Handle"]),
            )
            .unwrap_err();

        assert_eq!(
            err,
            CraftError::MissingInput {
                recipe: "Lockpick".into(),
                item: "Toothbrush Handle".into(),
                needed: 1,
                held: 0,
            }
        );
        assert_eq!(inventory.count("Wire"), 1);
    }

    #[test]
    fn unknown_combination() {
        let err = book().find(&placed(&["Wire"])).unwrap_err();
        assert_eq!(
            err,
            CraftError::NoRecipe {
                placed: placed(&["Wire"])
            }
        );
    }
}
