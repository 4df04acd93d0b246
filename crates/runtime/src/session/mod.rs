//! Per-run game session: inventory, equipped item and outcome.
//!
//! Owned by the stage and passed by `&mut` to whatever needs it; there is
//! no global inventory.
mod crafting;
mod inventory;
mod items;

pub use crafting::{OrderedRecipe, RecipeBook};
pub use inventory::{Inventory, ItemStack};
pub use items::ItemCatalog;

use crate::api::{InventoryError, Result, RuntimeError};

/// How the run ended, if it did.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Outcome {
    #[default]
    Playing,
    /// Reached the exit with the required item.
    Won,
    /// Caught by an enemy.
    Lost,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::Playing
    }
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    inventory: Inventory,
    equipped: Option<String>,
    outcome: Outcome,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn equipped(&self) -> Option<&str> {
        self.equipped.as_deref()
    }

    /// Equips a held item.
    pub fn equip(&mut self, name: &str) -> Result<()> {
        if !self.inventory.contains(name) {
            return Err(InventoryError::NotHeld {
                item: name.to_string(),
            }
            .into());
        }
        self.equipped = Some(name.to_string());
        Ok(())
    }

    pub fn unequip(&mut self) -> Option<String> {
        self.equipped.take()
    }

    /// Removes one of the equipped item, unequipping it when none are left.
    pub fn consume_equipped(&mut self) -> Result<String> {
        let name = self.equipped.clone().ok_or(RuntimeError::NothingEquipped)?;
        self.inventory.remove(&name, 1)?;
        if !self.inventory.contains(&name) {
            self.equipped = None;
        }
        Ok(name)
    }

    /// Drops the equipped slot if its item is no longer held.
    pub(crate) fn sync_equipped(&mut self) {
        if let Some(name) = &self.equipped
            && !self.inventory.contains(name)
        {
            self.equipped = None;
        }
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Ends the session. The first terminal outcome sticks.
    pub fn finish(&mut self, outcome: Outcome) -> Result<()> {
        if self.outcome.is_over() {
            return Err(RuntimeError::SessionOver {
                outcome: self.outcome,
            });
        }
        self.outcome = outcome;
        if outcome.is_over() {
            tracing::info!("Session finished: {}", outcome);
        }
        Ok(())
    }
}
