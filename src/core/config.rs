use serde::{
    Deserialize,
    Serialize,
};

const DEFAULT_MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
const DEFAULT_ARTICLES_URL: &str = "http://localhost:3000/articles";

/// Remote endpoint configuration. Serializable so a deployment can
/// persist overrides through the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub mealdb_base_url: String,
    pub articles_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mealdb_base_url: DEFAULT_MEALDB_BASE_URL.to_string(),
            articles_url: DEFAULT_ARTICLES_URL.to_string(),
        }
    }
}

impl Config {
    pub fn mealdb_endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.mealdb_base_url.trim_end_matches('/'), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let mut config = Config::default();
        config.mealdb_base_url = "https://example.com/api/".to_string();
        assert_eq!(config.mealdb_endpoint("lookup.php"), "https://example.com/api/lookup.php");
    }
}
