use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::types::{
    AreaRecord,
    ArticlesPayload,
    CategoryRecord,
    IngredientRecord,
    MealRecord,
    MealsEnvelope,
    SummaryRecord,
};
use crate::core::{
    Article,
    CatalogIngredient,
    Config,
    DishmateError,
    Recipe,
    RecipeSummary,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for TheMealDB and the articles backend.
pub struct MealDbClient {
    http: Client,
    config: Config,
}

impl MealDbClient {
    pub fn new(config: Config) -> Result<Self, DishmateError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DishmateError::Custom(format!("HTTP client build failed: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DishmateError> {
        let response = self.http.get(url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(DishmateError::HttpStatus {
                status: response.status().as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    async fn get_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, DishmateError> {
        let url = self.config.mealdb_endpoint(endpoint);
        let envelope: MealsEnvelope<T> = self.get_json(&url, query).await?;
        Ok(envelope.into_vec())
    }

    pub async fn lookup_recipe(&self, id: &str) -> Result<Option<Recipe>, DishmateError> {
        let records: Vec<MealRecord> = self.get_meals("lookup.php", &[("i", id)]).await?;
        Ok(records.into_iter().next().map(MealRecord::into_recipe))
    }

    /// An empty term lists the API's default selection, matching the
    /// browse page's initial load.
    pub async fn search_recipes(&self, term: &str) -> Result<Vec<Recipe>, DishmateError> {
        let records: Vec<MealRecord> = self.get_meals("search.php", &[("s", term)]).await?;
        Ok(records.into_iter().map(MealRecord::into_recipe).collect())
    }

    pub async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<RecipeSummary>, DishmateError> {
        let records: Vec<SummaryRecord> =
            self.get_meals("filter.php", &[("i", ingredient)]).await?;
        Ok(records.into_iter().map(SummaryRecord::into_summary).collect())
    }

    pub async fn filter_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<RecipeSummary>, DishmateError> {
        let records: Vec<SummaryRecord> = self.get_meals("filter.php", &[("c", category)]).await?;
        Ok(records.into_iter().map(SummaryRecord::into_summary).collect())
    }

    pub async fn filter_by_area(&self, area: &str) -> Result<Vec<RecipeSummary>, DishmateError> {
        let records: Vec<SummaryRecord> = self.get_meals("filter.php", &[("a", area)]).await?;
        Ok(records.into_iter().map(SummaryRecord::into_summary).collect())
    }

    pub async fn list_ingredients(&self) -> Result<Vec<CatalogIngredient>, DishmateError> {
        let records: Vec<IngredientRecord> = self.get_meals("list.php", &[("i", "list")]).await?;
        Ok(records.into_iter().map(IngredientRecord::into_catalog).collect())
    }

    pub async fn list_categories(&self) -> Result<Vec<String>, DishmateError> {
        let records: Vec<CategoryRecord> = self.get_meals("list.php", &[("c", "list")]).await?;
        Ok(records.into_iter().map(|r| r.name).collect())
    }

    pub async fn list_areas(&self) -> Result<Vec<String>, DishmateError> {
        let records: Vec<AreaRecord> = self.get_meals("list.php", &[("a", "list")]).await?;
        Ok(records.into_iter().map(|r| r.name).collect())
    }

    pub async fn fetch_articles(&self) -> Result<Vec<Article>, DishmateError> {
        let payload: ArticlesPayload = self.get_json(&self.config.articles_url, &[]).await?;
        Ok(payload.into_vec())
    }
}
