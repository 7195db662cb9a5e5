pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod projector;
pub mod query;
pub mod render;
pub mod session;
pub mod uniffi_bindings;

pub use builder::{OutputMode, RecipeSearch, RecipeSearchBuilder, SearchResult};
pub use client::{QueryClient, RecipeSource, SearchOutcome};
pub use config::SearchConfig;
pub use error::SearchError;
pub use model::{IngredientSlot, RecipeRecord};
pub use projector::{project, DisplayRecipe, Ingredient};
pub use query::SearchQuery;
pub use session::SearchSession;

/// Search the public endpoint and return raw records.
///
/// Blank input fails with [`SearchError::EmptyQuery`] before any request is made.
pub async fn search_recipes(query: &str) -> Result<SearchOutcome, SearchError> {
    let query = SearchQuery::new(query)?;
    let config = SearchConfig::load()?;
    QueryClient::from_config(&config)?.search(&query).await
}

/// Search the public endpoint and project every match for display.
pub async fn find_recipes(query: &str) -> Result<SearchResult, SearchError> {
    RecipeSearch::builder().query(query).build().await
}
