use std::borrow::Cow;
use std::collections::HashMap;

use hollows_content::ItemSpec;

/// Item descriptions keyed by name.
///
/// Names missing from the catalog resolve to a generic, non-usable entry so
/// that pickups of unlisted items still work.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    items: HashMap<String, ItemSpec>,
}

impl ItemCatalog {
    pub fn new(items: impl IntoIterator<Item = ItemSpec>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.name.clone(), item))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ItemSpec> {
        self.items.get(name)
    }

    /// Catalog entry for `name`, or the fallback description.
    pub fn lookup(&self, name: &str) -> Cow<'_, ItemSpec> {
        match self.items.get(name) {
            Some(item) => Cow::Borrowed(item),
            None => Cow::Owned(ItemSpec::unknown(name)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_items_fall_back() {
        let catalog = ItemCatalog::new([ItemSpec {
            name: "Key".into(),
            description: "Opens the exit.".into(),
            usable: true,
            effect: None,
        }]);

        assert!(catalog.lookup("Key").usable);

        let unknown = catalog.lookup("Spoon");
        assert_eq!(unknown.name, "Spoon");
        assert_eq!(unknown.description, "A mysterious item.");
        assert!(!unknown.usable);
        assert!(catalog.get("Spoon").is_none());
    }
}
