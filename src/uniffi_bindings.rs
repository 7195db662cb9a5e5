//! UniFFI bindings for mealdb-search
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.
//! Callers on a UI thread are expected to invoke them from a background thread.

use std::fmt;
use std::time::Duration;

use crate::projector::{project, DisplayRecipe, Ingredient};
use crate::{RecipeRecord, SearchError, SearchResult};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible ingredient line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub name: String,
    pub measure: String,
}

impl From<Ingredient> for FfiIngredient {
    fn from(ingredient: Ingredient) -> Self {
        FfiIngredient {
            name: ingredient.name,
            measure: ingredient.measure,
        }
    }
}

/// FFI-compatible projected recipe
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    /// Full instructions, for the detail view
    pub instructions: String,
    /// At most 200 characters plus "..."
    pub truncated_instructions: String,
    /// Empty string if upstream had no thumbnail
    pub thumbnail_url: String,
    /// Empty string if upstream had no video
    pub youtube_url: String,
    pub ingredients: Vec<FfiIngredient>,
}

impl From<DisplayRecipe> for FfiRecipe {
    fn from(recipe: DisplayRecipe) -> Self {
        let record = recipe.record;
        FfiRecipe {
            id: record.id,
            name: record.name,
            category: record.category,
            area: record.area,
            instructions: record.instructions,
            truncated_instructions: recipe.truncated_instructions,
            thumbnail_url: record.thumbnail_url.unwrap_or_default(),
            youtube_url: record.youtube_url.unwrap_or_default(),
            ingredients: recipe
                .pruned_ingredients
                .into_iter()
                .map(FfiIngredient::from)
                .collect(),
        }
    }
}

impl From<RecipeRecord> for FfiRecipe {
    fn from(record: RecipeRecord) -> Self {
        project(record).into()
    }
}

/// FFI-compatible search result
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiSearchResult {
    Found { recipes: Vec<FfiRecipe> },
    NoResults,
}

/// FFI-compatible error type
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiSearchError {
    /// Search term was blank
    EmptyQuery,
    /// Upstream answered with a non-success status
    RequestFailed { status: u16 },
    /// Transport or parse failure
    NetworkError { message: String },
    /// Replaced by a newer search
    Superseded,
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiSearchError::EmptyQuery => write!(f, "Search query cannot be empty"),
            FfiSearchError::RequestFailed { status } => {
                write!(f, "Request failed with status {}", status)
            }
            FfiSearchError::NetworkError { message } => write!(f, "Network error: {}", message),
            FfiSearchError::Superseded => write!(f, "Search was superseded"),
            FfiSearchError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiSearchError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiSearchError {}

impl From<SearchError> for FfiSearchError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::EmptyQuery => FfiSearchError::EmptyQuery,
            SearchError::RequestFailed { status } => FfiSearchError::RequestFailed { status },
            SearchError::NetworkError { cause } => FfiSearchError::NetworkError { message: cause },
            SearchError::Superseded => FfiSearchError::Superseded,
            SearchError::ConfigError(e) => FfiSearchError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// Configuration for a search
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSearchConfig {
    /// Optional API root (uses the public endpoint if not specified)
    pub base_url: Option<String>,
    /// Optional timeout in seconds (transport default if not specified)
    pub timeout_seconds: Option<u64>,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiSearchError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiSearchError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Search recipes by name
///
/// # Arguments
/// * `query` - The recipe name; blank input fails with `EmptyQuery` before any request
/// * `config` - Optional endpoint and timeout overrides
///
/// # Returns
/// `Found` with projected recipes in upstream order, or `NoResults`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_recipes(
    query: String,
    config: Option<FfiSearchConfig>,
) -> Result<FfiSearchResult, FfiSearchError> {
    let rt = create_runtime()?;
    rt.block_on(async { search_recipes_async(&query, config).await })
}

async fn search_recipes_async(
    query: &str,
    config: Option<FfiSearchConfig>,
) -> Result<FfiSearchResult, FfiSearchError> {
    let config = config.unwrap_or_default();

    let mut builder = crate::RecipeSearch::builder().query(query);

    if let Some(base_url) = config.base_url {
        builder = builder.base_url(base_url);
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    Ok(match builder.build().await? {
        SearchResult::Recipes(recipes) => FfiSearchResult::Found {
            recipes: recipes.into_iter().map(FfiRecipe::from).collect(),
        },
        SearchResult::Records(records) => FfiSearchResult::Found {
            recipes: records.into_iter().map(FfiRecipe::from).collect(),
        },
        SearchResult::NoResults => FfiSearchResult::NoResults,
    })
}

/// Shorten instructions the same way search results are shortened
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn truncate_instructions(instructions: String) -> String {
    crate::projector::truncate_instructions(&instructions)
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
