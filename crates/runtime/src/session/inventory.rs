use crate::api::InventoryError;

/// One stack of identical items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStack {
    pub name: String,
    pub quantity: u32,
}

/// Named item stacks in pickup order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    stacks: Vec<ItemStack>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of `name`, stacking onto an existing entry.
    pub fn add(&mut self, name: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.stacks.iter_mut().find(|stack| stack.name == name) {
            Some(stack) => stack.quantity += quantity,
            None => self.stacks.push(ItemStack {
                name: name.to_string(),
                quantity,
            }),
        }
    }

    /// Removes `quantity` of `name`. The stack disappears when it reaches
    /// zero. Nothing changes on error.
    pub fn remove(&mut self, name: &str, quantity: u32) -> Result<(), InventoryError> {
        let Some(index) = self.stacks.iter().position(|stack| stack.name == name) else {
            return Err(InventoryError::NotHeld {
                item: name.to_string(),
            });
        };

        let held = self.stacks[index].quantity;
        if held < quantity {
            return Err(InventoryError::Insufficient {
                item: name.to_string(),
                held,
                requested: quantity,
            });
        }

        if held == quantity {
            self.stacks.remove(index);
        } else {
            self.stacks[index].quantity -= quantity;
        }
        Ok(())
    }

    pub fn count(&self, name: &str) -> u32 {
        self.stacks
            .iter()
            .find(|stack| stack.name == name)
            .map_or(0, |stack| stack.quantity)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.count(name) > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.iter()
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_stacks_by_name() {
        let mut inventory = Inventory::new();
        inventory.add("Wire", 1);
        inventory.add("Battery", 2);
        inventory.add("Wire", 3);

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.count("Wire"), 4);
        assert_eq!(
            inventory.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            ["Wire", "Battery"]
        );
    }

    #[test]
    fn remove_to_zero_drops_stack() {
        let mut inventory = Inventory::new();
        inventory.add("Battery", 2);

        inventory.remove("Battery", 1).unwrap();
        assert_eq!(inventory.count("Battery"), 1);

        inventory.remove("Battery", 1).unwrap();
        assert!(!inventory.contains("Battery"));
        assert!(inventory.is_empty());
    }

    #[test]
    fn remove_errors_leave_inventory_untouched() {
        let mut inventory = Inventory::new();
        inventory.add("Key", 1);

        assert_eq!(
            inventory.remove("Key", 2),
            Err(InventoryError::Insufficient {
                item: "Key".into(),
                held: 1,
                requested: 2,
            })
        );
        assert_eq!(
            inventory.remove("Wire", 1),
            Err(InventoryError::NotHeld {
                item: "Wire".into()
            })
        );
        assert_eq!(inventory.count("Key"), 1);
    }
}
