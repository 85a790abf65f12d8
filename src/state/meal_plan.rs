use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::persistence::{
    self,
    Storage,
    MEAL_PLAN_KEY,
};

/// Recipe ids planned per date. Dates with no remaining meals are
/// pruned so the stored map never carries empty lists.
#[derive(Debug, Default)]
pub struct MealPlan {
    days: BTreeMap<NaiveDate, Vec<String>>,
}

impl MealPlan {
    pub fn load(storage: &dyn Storage) -> Self {
        Self { days: persistence::read_or_default(storage, MEAL_PLAN_KEY) }
    }

    fn save(&self, storage: &dyn Storage) {
        persistence::write_value(storage, MEAL_PLAN_KEY, &self.days);
    }

    pub fn meals_for(&self, date: NaiveDate) -> &[String] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Plan a recipe for a date; duplicates per date are rejected.
    pub fn add(&mut self, storage: &dyn Storage, date: NaiveDate, recipe_id: &str) -> bool {
        let meals = self.days.entry(date).or_default();
        if meals.iter().any(|id| id == recipe_id) {
            return false;
        }
        meals.push(recipe_id.to_string());
        self.save(storage);
        true
    }

    pub fn remove(&mut self, storage: &dyn Storage, date: NaiveDate, recipe_id: &str) -> bool {
        let Some(meals) = self.days.get_mut(&date) else {
            return false;
        };

        let before = meals.len();
        meals.retain(|id| id != recipe_id);
        let changed = meals.len() != before;

        if meals.is_empty() {
            self.days.remove(&date);
        }
        if changed {
            self.save(storage);
        }
        changed
    }
}
