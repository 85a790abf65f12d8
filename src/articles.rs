use chrono::NaiveDate;

use crate::{
    api::MealDbClient,
    core::{
        Article,
        DishmateError,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSort {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
}

/// The article catalog is fetched once per page view and then
/// filtered and sorted in memory.
#[derive(Debug, Default)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    pub async fn load(client: &MealDbClient) -> Result<Self, DishmateError> {
        Ok(Self { articles: client.fetch_articles().await? })
    }

    pub fn from_articles(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// Distinct categories in first-seen order, for the filter dropdown.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.articles
            .iter()
            .filter_map(|article| article.category.clone())
            .filter(|category| seen.insert(category.to_lowercase()))
            .collect()
    }

    /// The newest `n` articles, for the home page teaser row.
    pub fn latest(&self, n: usize) -> Vec<&Article> {
        let mut sorted = self.query("", None, ArticleSort::DateDesc);
        sorted.truncate(n);
        sorted
    }

    /// Search term matches title or description, case-insensitively;
    /// the category filter compares ignoring case.
    pub fn query(
        &self,
        search: &str,
        category: Option<&str>,
        sort: ArticleSort,
    ) -> Vec<&Article> {
        let term = search.trim().to_lowercase();

        let mut matches: Vec<&Article> = self
            .articles
            .iter()
            .filter(|article| {
                term.is_empty()
                    || article.title.to_lowercase().contains(&term)
                    || article.description.to_lowercase().contains(&term)
            })
            .filter(|article| match category {
                Some(wanted) => article
                    .category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(wanted)),
                None => true,
            })
            .collect();

        match sort {
            ArticleSort::DateDesc => {
                matches.sort_by(|a, b| date_key(b).cmp(&date_key(a)));
            }
            ArticleSort::DateAsc => {
                matches.sort_by(|a, b| date_key(a).cmp(&date_key(b)));
            }
            ArticleSort::TitleAsc => {
                matches.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
            }
            ArticleSort::TitleDesc => {
                matches.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()));
            }
        }

        matches
    }
}

fn date_key(article: &Article) -> NaiveDate {
    article.published().unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, title: &str, date: &str, category: Option<&str>) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("About {}", title),
            longer_description: None,
            image_url: None,
            author: None,
            publish_date: Some(date.to_string()),
            category: category.map(|c| c.to_string()),
            read_time: None,
        }
    }

    fn catalog() -> ArticleCatalog {
        ArticleCatalog::from_articles(vec![
            article("1", "Meal prep for beginners", "2024-03-10", Some("Planning")),
            article("2", "Knife skills", "2024-05-01", Some("Technique")),
            article("3", "Batch cooking grains", "2024-01-20", Some("Planning")),
        ])
    }

    #[test]
    fn test_query_searches_title_and_description() {
        let catalog = catalog();
        let hits = catalog.query("MEAL PREP", None, ArticleSort::DateDesc);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        let hits = catalog.query("about knife", None, ArticleSort::DateDesc);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn test_query_filters_category_ignoring_case() {
        let catalog = catalog();
        let hits = catalog.query("", Some("planning"), ArticleSort::DateAsc);
        let ids: Vec<&str> = hits.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_sort_orders() {
        let catalog = catalog();

        let newest: Vec<&str> = catalog
            .query("", None, ArticleSort::DateDesc)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(newest, vec!["2", "1", "3"]);

        let by_title: Vec<&str> = catalog
            .query("", None, ArticleSort::TitleAsc)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(by_title, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_latest_truncates() {
        let catalog = catalog();
        let latest = catalog.latest(2);
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].id, "2");
    }

    #[test]
    fn test_categories_are_distinct() {
        let catalog = catalog();
        assert_eq!(catalog.categories(), vec!["Planning".to_string(), "Technique".to_string()]);
    }
}
