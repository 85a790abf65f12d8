use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::CatalogIngredient,
    persistence::{
        self,
        Storage,
        PANTRY_KEY,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: String,
    pub name: String,
}

/// The user's locally stored list of owned ingredients. The stored id
/// set is the single source of truth; every mutation persists before
/// the caller re-renders.
#[derive(Debug, Default)]
pub struct Pantry {
    items: Vec<PantryItem>,
}

impl Pantry {
    pub fn load(storage: &dyn Storage) -> Self {
        Self { items: persistence::read_or_default(storage, PANTRY_KEY) }
    }

    fn save(&self, storage: &dyn Storage) {
        persistence::write_value(storage, PANTRY_KEY, &self.items);
    }

    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add an ingredient; no-op when the id is already present.
    pub fn add(&mut self, storage: &dyn Storage, item: PantryItem) -> bool {
        if self.items.iter().any(|existing| existing.id == item.id) {
            return false;
        }
        self.items.push(item);
        self.save(storage);
        true
    }

    pub fn remove(&mut self, storage: &dyn Storage, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let changed = self.items.len() != before;
        if changed {
            self.save(storage);
        }
        changed
    }

    /// Lowercased, trimmed names for case-insensitive ingredient matching.
    pub fn ingredient_names(&self) -> HashSet<String> {
        self.items.iter().map(|item| item.name.trim().to_lowercase()).collect()
    }

    /// Catalog entries not yet in the pantry, optionally narrowed by a
    /// case-insensitive substring search.
    pub fn addable<'a>(
        &self,
        catalog: &'a [CatalogIngredient],
        search: &str,
    ) -> Vec<&'a CatalogIngredient> {
        let owned_ids: HashSet<&str> = self.items.iter().map(|item| item.id.as_str()).collect();
        let term = search.trim().to_lowercase();

        catalog
            .iter()
            .filter(|entry| !owned_ids.contains(entry.id.as_str()))
            .filter(|entry| term.is_empty() || entry.name.to_lowercase().contains(&term))
            .collect()
    }
}
