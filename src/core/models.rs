use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize,
};

/// TheMealDB exposes at most 20 positional ingredient slots per meal.
pub const INGREDIENT_SLOTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

/// A full recipe record as fetched from the remote lookup endpoint.
/// Never cached: every render re-fetches.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub thumbnail: Option<String>,
    pub youtube: Option<String>,
    pub source: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Count how many ingredients are covered by the given pantry name
    /// set (lowercased, trimmed names). Computed fresh on every render.
    pub fn pantry_match(&self, pantry_names: &HashSet<String>) -> PantryMatch {
        let total = self.ingredients.len();
        let matched = self
            .ingredients
            .iter()
            .filter(|ing| pantry_names.contains(&ing.name.trim().to_lowercase()))
            .count();

        PantryMatch { matched, total }
    }
}

/// Slim record returned by the filter endpoints (no ingredient data).
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
}

/// An entry of the remote ingredient catalog users add to their pantry from.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogIngredient {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PantryMatch {
    pub matched: usize,
    pub total: usize,
}

impl PantryMatch {
    /// Display form for recipe cards, e.g. "2/3". "N/A" when the
    /// record carried no ingredient data at all.
    pub fn label(&self) -> String {
        if self.total > 0 {
            format!("{}/{}", self.matched, self.total)
        } else {
            "N/A".to_string()
        }
    }
}

/// A recipe plus the derived display fields. Never persisted.
#[derive(Debug, Clone)]
pub struct AnnotatedRecipe {
    pub recipe: Recipe,
    pub pantry: PantryMatch,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub longer_description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub read_time: Option<String>,
}

impl Article {
    /// Publish dates arrive as strings; accept plain dates and full
    /// RFC 3339 timestamps. Unparseable dates sort as oldest.
    pub fn published(&self) -> Option<NaiveDate> {
        let raw = self.publish_date.as_deref()?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| chrono::DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with(names: &[&str]) -> Recipe {
        Recipe {
            id: "1".to_string(),
            name: "Test".to_string(),
            category: None,
            area: None,
            instructions: None,
            thumbnail: None,
            youtube: None,
            source: None,
            ingredients: names
                .iter()
                .map(|n| Ingredient { name: n.to_string(), measure: None })
                .collect(),
        }
    }

    #[test]
    fn test_pantry_match_is_case_insensitive() {
        let recipe = recipe_with(&["Egg", "Flour", "Milk"]);
        let pantry: HashSet<String> =
            ["egg", "milk"].iter().map(|s| s.to_string()).collect();

        let result = recipe.pantry_match(&pantry);
        assert_eq!(result.matched, 2);
        assert_eq!(result.total, 3);
        assert_eq!(result.label(), "2/3");
    }

    #[test]
    fn test_pantry_match_without_ingredients() {
        let recipe = recipe_with(&[]);
        let result = recipe.pantry_match(&HashSet::new());
        assert_eq!(result.total, 0);
        assert_eq!(result.label(), "N/A");
    }

    #[test]
    fn test_article_published_formats() {
        let mut article = Article {
            id: "a1".to_string(),
            title: "Meal prep basics".to_string(),
            description: String::new(),
            longer_description: None,
            image_url: None,
            author: None,
            publish_date: Some("2024-05-01".to_string()),
            category: None,
            read_time: None,
        };
        assert_eq!(article.published(), NaiveDate::from_ymd_opt(2024, 5, 1));

        article.publish_date = Some("2024-05-01T10:30:00Z".to_string());
        assert_eq!(article.published(), NaiveDate::from_ymd_opt(2024, 5, 1));

        article.publish_date = Some("next tuesday".to_string());
        assert_eq!(article.published(), None);
    }
}
