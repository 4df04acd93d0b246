//! Item and recipe definitions.

/// Catalog entry for one item name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub usable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<ItemEffect>,
}

impl ItemSpec {
    pub const UNKNOWN_DESCRIPTION: &'static str = "A mysterious item.";

    /// Fallback entry for names missing from the catalog.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Self::UNKNOWN_DESCRIPTION.to_string(),
            usable: false,
            effect: None,
        }
    }
}

/// What using an item does. Items without an effect are only consumed by
/// crafting or checked by the exit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Restores flashlight charge, capped at its maximum.
    RechargeFlashlight { amount: f32 },
}

/// Crafting recipe whose inputs must be placed in exactly this order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecipeSpec {
    pub name: String,
    pub ordered_items: Vec<String>,
    pub result: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl RecipeSpec {
    /// True when `placed` lists exactly the recipe inputs, in order.
    pub fn matches_order<S: AsRef<str>>(&self, placed: &[S]) -> bool {
        placed.len() == self.ordered_items.len()
            && placed
                .iter()
                .zip(&self.ordered_items)
                .all(|(placed, expected)| placed.as_ref() == expected)
    }
}
