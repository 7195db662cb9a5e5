use std::time::Duration;

use log::{debug, info};

use crate::client::{QueryClient, SearchOutcome};
use crate::config::SearchConfig;
use crate::model::RecipeRecord;
use crate::projector::{project, DisplayRecipe};
use crate::{SearchError, SearchQuery};

/// Represents the desired output format
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputMode {
    /// Project every record for display (default)
    #[default]
    Display,
    /// Return upstream records untouched
    Records,
}

/// Result of a recipe search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// Projected recipes, upstream order
    Recipes(Vec<DisplayRecipe>),
    /// Raw records, upstream order
    Records(Vec<RecipeRecord>),
    /// The request succeeded and nothing matched
    NoResults,
}

impl SearchResult {
    /// Display recipes in upstream order, projecting raw records if needed.
    /// Empty for `NoResults`.
    pub fn into_recipes(self) -> Vec<DisplayRecipe> {
        match self {
            SearchResult::Recipes(recipes) => recipes,
            SearchResult::Records(records) => records.into_iter().map(project).collect(),
            SearchResult::NoResults => Vec::new(),
        }
    }
}

/// Builder for configuring and running a recipe search
#[derive(Debug, Default)]
pub struct RecipeSearchBuilder {
    query: Option<String>,
    mode: OutputMode,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RecipeSearchBuilder {
    /// Set the recipe name to search for
    ///
    /// # Example
    /// ```
    /// use mealdb_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder().query("arrabiata");
    /// ```
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Return records without deriving display fields
    pub fn records_only(mut self) -> Self {
        self.mode = OutputMode::Records;
        self
    }

    /// Point the search at another API root (a mirror or a local stub)
    ///
    /// # Example
    /// ```
    /// use mealdb_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .query("pasta")
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout for the HTTP request
    ///
    /// # Example
    /// ```
    /// use mealdb_search::RecipeSearch;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .query("pasta")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Override the user agent sent with the request
    ///
    /// # Example
    /// ```
    /// use mealdb_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .query("pasta")
    ///     .user_agent("recipe-box/2.1");
    /// ```
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Run the search
    ///
    /// # Errors
    /// Returns `SearchError` if:
    /// - The query is missing, empty or whitespace only (no request is made)
    /// - The configuration cannot be loaded
    /// - Upstream answers with a non-success status
    /// - The request fails or the body cannot be parsed
    ///
    /// # Example
    /// ```no_run
    /// # use mealdb_search::{RecipeSearch, SearchResult};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecipeSearch::builder().query("pasta").build().await?;
    /// if let SearchResult::Recipes(recipes) = result {
    ///     println!("{} recipes", recipes.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<SearchResult, SearchError> {
        let query = SearchQuery::new(self.query.unwrap_or_default())?;

        let mut config = SearchConfig::load()?;
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }

        debug!("Searching {} for {:?}", config.base_url, query.as_str());
        let timeout = self
            .timeout
            .or_else(|| config.timeout.map(Duration::from_secs));
        let client = QueryClient::with_timeout(&config, timeout)?;
        let outcome = client.search(&query).await?;
        info!("Search for {:?} returned {} recipes", query.as_str(), outcome.len());

        Ok(match (outcome, self.mode) {
            (SearchOutcome::NoResults, _) => SearchResult::NoResults,
            (SearchOutcome::Found(records), OutputMode::Records) => SearchResult::Records(records),
            (SearchOutcome::Found(records), OutputMode::Display) => {
                SearchResult::Recipes(records.into_iter().map(project).collect())
            }
        })
    }
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for searching recipes
    ///
    /// # Example
    /// ```
    /// use mealdb_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}
