use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};

use crate::persistence::{
    self,
    Storage,
    SHOPPING_LIST_KEY,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
}

/// Ingredients to buy. Identity is the case-insensitively folded name,
/// so "Egg" and "egg" are the same entry.
#[derive(Debug, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn load(storage: &dyn Storage) -> Self {
        Self { items: persistence::read_or_default(storage, SHOPPING_LIST_KEY) }
    }

    fn save(&self, storage: &dyn Storage) {
        persistence::write_value(storage, SHOPPING_LIST_KEY, &self.items);
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let folded = name.to_lowercase();
        self.items.iter().position(|item| item.name.to_lowercase() == folded)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Flip membership and persist. Returns whether the ingredient is
    /// on the list afterwards.
    pub fn toggle(&mut self, storage: &dyn Storage, name: &str) -> bool {
        let member_after = match self.position(name) {
            Some(pos) => {
                self.items.remove(pos);
                false
            }
            None => {
                self.items.push(ShoppingItem { name: name.to_string() });
                true
            }
        };
        self.save(storage);
        member_after
    }

    pub fn remove(&mut self, storage: &dyn Storage, name: &str) -> bool {
        match self.position(name) {
            Some(pos) => {
                self.items.remove(pos);
                self.save(storage);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self, storage: &dyn Storage) {
        self.items.clear();
        self.save(storage);
    }

    pub fn name_set(&self) -> HashSet<String> {
        self.items.iter().map(|item| item.name.trim().to_lowercase()).collect()
    }
}
