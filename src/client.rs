use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::SearchConfig;
use crate::model::{MealsResponse, RecipeRecord};
use crate::{SearchError, SearchQuery};

/// What a successful search produced.
///
/// `NoResults` is not an error: the request went through and nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Recipes in the order upstream returned them
    Found(Vec<RecipeRecord>),
    NoResults,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::NoResults)
    }

    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Found(records) => records.len(),
            SearchOutcome::NoResults => 0,
        }
    }

    pub fn into_records(self) -> Vec<RecipeRecord> {
        match self {
            SearchOutcome::Found(records) => records,
            SearchOutcome::NoResults => Vec::new(),
        }
    }
}

impl From<MealsResponse> for SearchOutcome {
    fn from(response: MealsResponse) -> Self {
        match response.meals {
            Some(meals) if !meals.is_empty() => SearchOutcome::Found(meals),
            _ => SearchOutcome::NoResults,
        }
    }
}

/// Anything that can answer a recipe name search
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError>;
}

/// Client for the upstream `search.php` endpoint.
///
/// Every call to [`QueryClient::search`] issues exactly one GET request and is
/// independent of any other call; there is no retry and no caching.
#[derive(Debug, Clone)]
pub struct QueryClient {
    client: Client,
    base_url: String,
}

impl QueryClient {
    /// Client for the public endpoint with transport defaults
    pub fn new() -> Result<Self, SearchError> {
        Self::from_config(&SearchConfig::default())
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        Self::with_timeout(config, config.timeout.map(Duration::from_secs))
    }

    /// Like [`QueryClient::from_config`], with an exact timeout in place of the configured seconds
    pub fn with_timeout(
        config: &SearchConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, SearchError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(QueryClient {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SearchError> {
        Self::from_config(&SearchConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/search.php", self.base_url)
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("s", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: MealsResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }
}

#[async_trait]
impl RecipeSource for QueryClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
        QueryClient::search(self, query).await
    }
}
