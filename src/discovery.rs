use std::collections::HashSet;

use chrono::NaiveDate;
use futures::future::join_all;

use crate::{
    api::MealDbClient,
    core::{
        AnnotatedRecipe,
        DishmateError,
        Ingredient,
        PantryMatch,
        Recipe,
        RecipeSummary,
    },
    reconcile::reconcile,
    state::{
        Favorites,
        MealPlan,
        Pantry,
        ShoppingList,
    },
};

/// Derive the display annotations for freshly fetched recipes.
pub fn annotate(
    recipes: Vec<Recipe>,
    pantry_names: &HashSet<String>,
    favorites: &Favorites,
) -> Vec<AnnotatedRecipe> {
    recipes
        .into_iter()
        .map(|recipe| {
            let pantry = recipe.pantry_match(pantry_names);
            let is_favorite = favorites.contains(&recipe.id);
            AnnotatedRecipe { recipe, pantry, is_favorite }
        })
        .collect()
}

/// Stable sort by pantry coverage, best match first. Ties keep their
/// resolution order.
pub fn rank_by_pantry_match(annotated: &mut [AnnotatedRecipe]) {
    annotated.sort_by(|a, b| b.pantry.matched.cmp(&a.pantry.matched));
}

/// Pantry-driven recipe discovery: fan out one filter call per pantry
/// ingredient, merge the candidate ids (deduped, first seen wins),
/// resolve full records, annotate and rank. Per-ingredient failures
/// degrade to fewer candidates; a total outage produces an empty list
/// the caller renders as an explicit "nothing found" state.
pub async fn discover_by_pantry(
    client: &MealDbClient,
    pantry: &Pantry,
    favorites: &Favorites,
) -> Vec<AnnotatedRecipe> {
    if pantry.is_empty() {
        return Vec::new();
    }

    let names: Vec<&str> = pantry.items().iter().map(|item| item.name.as_str()).collect();
    let filter_results = join_all(names.iter().map(|name| client.filter_by_ingredient(name))).await;

    let mut seen = HashSet::new();
    let mut candidate_ids = Vec::new();
    for (name, result) in names.iter().zip(filter_results) {
        match result {
            Ok(summaries) => {
                for summary in summaries {
                    if seen.insert(summary.id.clone()) {
                        candidate_ids.push(summary.id);
                    }
                }
            }
            Err(e) => eprintln!("Could not fetch recipes for \"{}\": {}", name, e),
        }
    }

    let recipes =
        reconcile(&candidate_ids, |id| async move { client.lookup_recipe(&id).await }).await;

    let mut annotated = annotate(recipes, &pantry.ingredient_names(), favorites);
    rank_by_pantry_match(&mut annotated);
    annotated
}

/// Free-text search listing. Unlike discovery this surfaces a failed
/// request to the caller, which renders an error state instead of an
/// empty one. Results keep the API's order.
pub async fn browse_recipes(
    client: &MealDbClient,
    term: &str,
    pantry: &Pantry,
    favorites: &Favorites,
) -> Result<Vec<AnnotatedRecipe>, DishmateError> {
    let recipes = client.search_recipes(term).await?;

    let mut seen = HashSet::new();
    let unique: Vec<Recipe> =
        recipes.into_iter().filter(|recipe| seen.insert(recipe.id.clone())).collect();

    Ok(annotate(unique, &pantry.ingredient_names(), favorites))
}

/// Category/area filter listings only carry summaries; ingredient
/// annotations render as "N/A" for these.
pub async fn browse_by_category(
    client: &MealDbClient,
    category: &str,
) -> Result<Vec<RecipeSummary>, DishmateError> {
    Ok(dedup_summaries(client.filter_by_category(category).await?))
}

pub async fn browse_by_area(
    client: &MealDbClient,
    area: &str,
) -> Result<Vec<RecipeSummary>, DishmateError> {
    Ok(dedup_summaries(client.filter_by_area(area).await?))
}

fn dedup_summaries(summaries: Vec<RecipeSummary>) -> Vec<RecipeSummary> {
    let mut seen = HashSet::new();
    summaries.into_iter().filter(|summary| seen.insert(summary.id.clone())).collect()
}

/// Resolve the user's saved recipes, in saved order. Unresolvable ids
/// are dropped by the reconciliation pass.
pub async fn saved_recipes(
    client: &MealDbClient,
    favorites: &Favorites,
    pantry: &Pantry,
) -> Vec<AnnotatedRecipe> {
    let recipes =
        reconcile(favorites.ids(), |id| async move { client.lookup_recipe(&id).await }).await;
    annotate(recipes, &pantry.ingredient_names(), favorites)
}

/// Resolve the full records for a date's planned meals.
pub async fn planned_meals(
    client: &MealDbClient,
    plan: &MealPlan,
    date: NaiveDate,
) -> Vec<Recipe> {
    reconcile(plan.meals_for(date), |id| async move { client.lookup_recipe(&id).await }).await
}

/// One ingredient row of the detail view.
#[derive(Debug, Clone)]
pub struct IngredientStatus {
    pub ingredient: Ingredient,
    pub in_pantry: bool,
    pub on_shopping_list: bool,
}

#[derive(Debug, Clone)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub pantry: PantryMatch,
    pub ingredients: Vec<IngredientStatus>,
}

/// Single-recipe detail lookup with per-ingredient pantry and
/// shopping-list membership. `Ok(None)` means an unknown id, rendered
/// as a "recipe not found" state.
pub async fn recipe_detail(
    client: &MealDbClient,
    id: &str,
    pantry: &Pantry,
    shopping_list: &ShoppingList,
) -> Result<Option<RecipeDetail>, DishmateError> {
    let Some(recipe) = client.lookup_recipe(id).await? else {
        return Ok(None);
    };

    let pantry_names = pantry.ingredient_names();
    let shopping_names = shopping_list.name_set();

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| {
            let folded = ingredient.name.trim().to_lowercase();
            IngredientStatus {
                ingredient: ingredient.clone(),
                in_pantry: pantry_names.contains(&folded),
                on_shopping_list: shopping_names.contains(&folded),
            }
        })
        .collect();

    let pantry_match = recipe.pantry_match(&pantry_names);
    Ok(Some(RecipeDetail { recipe, pantry: pantry_match, ingredients }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    fn recipe(id: &str, names: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Recipe {}", id),
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
    fn test_annotate_marks_favorites() {
        let storage = MemoryStorage::new();
        let mut favorites = Favorites::load(&storage);
        favorites.toggle(&storage, "B");

        let pantry_names: HashSet<String> = ["egg".to_string()].into();
        let annotated = annotate(
            vec![recipe("A", &["Egg"]), recipe("B", &["Flour"])],
            &pantry_names,
            &favorites,
        );

        assert!(!annotated[0].is_favorite);
        assert_eq!(annotated[0].pantry.matched, 1);
        assert!(annotated[1].is_favorite);
        assert_eq!(annotated[1].pantry.matched, 0);
    }

    #[test]
    fn test_rank_is_descending_and_stable() {
        let storage = MemoryStorage::new();
        let favorites = Favorites::load(&storage);
        let pantry_names: HashSet<String> =
            ["egg".to_string(), "milk".to_string()].into();

        let mut annotated = annotate(
            vec![
                recipe("A", &["Flour"]),
                recipe("B", &["Egg", "Milk"]),
                recipe("C", &["Egg"]),
                recipe("D", &["Milk"]),
            ],
            &pantry_names,
            &favorites,
        );
        rank_by_pantry_match(&mut annotated);

        let order: Vec<&str> = annotated.iter().map(|a| a.recipe.id.as_str()).collect();
        // C and D tie on one match and keep their resolution order.
        assert_eq!(order, vec!["B", "C", "D", "A"]);
    }

    #[test]
    fn test_dedup_summaries_keeps_first_occurrence() {
        let summary = |id: &str| RecipeSummary {
            id: id.to_string(),
            name: id.to_string(),
            thumbnail: None,
        };
        let deduped = dedup_summaries(vec![summary("1"), summary("2"), summary("1")]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].id, "1");
        assert_eq!(deduped[1].id, "2");
    }
}
