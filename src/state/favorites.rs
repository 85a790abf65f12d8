use crate::persistence::{
    self,
    Storage,
    FAVORITES_KEY,
};

/// Ordered list of saved recipe ids. Contains no duplicates by
/// construction of `toggle`.
#[derive(Debug, Default)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn load(storage: &dyn Storage) -> Self {
        Self { ids: persistence::read_or_default(storage, FAVORITES_KEY) }
    }

    fn save(&self, storage: &dyn Storage) {
        persistence::write_value(storage, FAVORITES_KEY, &self.ids);
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Flip membership and persist. Returns whether the id is a
    /// favorite afterwards.
    pub fn toggle(&mut self, storage: &dyn Storage, id: &str) -> bool {
        let member_after = match self.ids.iter().position(|fav| fav == id) {
            Some(pos) => {
                self.ids.remove(pos);
                false
            }
            None => {
                self.ids.push(id.to_string());
                true
            }
        };
        self.save(storage);
        member_after
    }
}
