use std::collections::HashMap;

use serde::Deserialize;

use crate::core::models::{
    Article,
    CatalogIngredient,
    Ingredient,
    Recipe,
    RecipeSummary,
    INGREDIENT_SLOTS,
};

/// Every TheMealDB endpoint wraps its payload as `{"meals": [...]}`,
/// with `null` instead of an empty list when nothing matched.
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// Full meal record. The 20 positional `strIngredientN`/`strMeasureN`
/// slots land in `slots` and are folded into an ordered ingredient
/// list; the domain model never does stringly-typed field access.
#[derive(Debug, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    #[serde(rename = "strSource")]
    pub source: Option<String>,
    #[serde(flatten)]
    pub slots: HashMap<String, Option<String>>,
}

impl MealRecord {
    pub fn into_recipe(mut self) -> Recipe {
        let mut ingredients = Vec::new();
        for i in 1..=INGREDIENT_SLOTS {
            let name = self.slots.remove(&format!("strIngredient{}", i)).flatten();
            let measure = self.slots.remove(&format!("strMeasure{}", i)).flatten();

            let Some(name) = name else { continue };
            let name = name.trim().to_string();
            if name.is_empty() {
                continue;
            }

            let measure = measure.map(|m| m.trim().to_string()).filter(|m| !m.is_empty());
            ingredients.push(Ingredient { name, measure });
        }

        Recipe {
            id: self.id,
            name: self.name,
            category: self.category,
            area: self.area,
            instructions: self.instructions,
            thumbnail: self.thumbnail,
            youtube: self.youtube,
            source: self.source,
            ingredients,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SummaryRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
}

impl SummaryRecord {
    pub fn into_summary(self) -> RecipeSummary {
        RecipeSummary { id: self.id, name: self.name, thumbnail: self.thumbnail }
    }
}

#[derive(Debug, Deserialize)]
pub struct IngredientRecord {
    #[serde(rename = "idIngredient")]
    pub id: String,
    #[serde(rename = "strIngredient")]
    pub name: String,
    #[serde(rename = "strDescription")]
    pub description: Option<String>,
}

impl IngredientRecord {
    pub fn into_catalog(self) -> CatalogIngredient {
        CatalogIngredient { id: self.id, name: self.name, description: self.description }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "strCategory")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AreaRecord {
    #[serde(rename = "strArea")]
    pub name: String,
}

/// The articles backend serves either a bare array or `{"articles": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ArticlesPayload {
    List(Vec<Article>),
    Wrapped { articles: Vec<Article> },
}

impl ArticlesPayload {
    pub fn into_vec(self) -> Vec<Article> {
        match self {
            ArticlesPayload::List(articles) => articles,
            ArticlesPayload::Wrapped { articles } => articles,
        }
    }
}
