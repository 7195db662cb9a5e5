//! Plain-text views of search results, as printed by the command line tool.

use std::fmt::Write;

use crate::model::RecipeRecord;
use crate::projector::DisplayRecipe;
use crate::SearchError;

pub const NO_RESULTS_MESSAGE: &str = "No recipes found. Try a different search term.";

/// Summary card for a result list
pub fn render_summary(recipe: &DisplayRecipe) -> String {
    let record = &recipe.record;
    let mut out = String::new();

    let _ = writeln!(out, "{}", record.name);
    if let Some(thumbnail) = &record.thumbnail_url {
        let _ = writeln!(out, "{}", thumbnail);
    }
    let _ = writeln!(out, "Category: {}", record.category);
    let _ = writeln!(out, "Cuisine: {}", record.area);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", recipe.truncated_instructions);

    if !recipe.pruned_ingredients.is_empty() {
        let _ = writeln!(out);
        for ingredient in &recipe.pruned_ingredients {
            let _ = writeln!(out, "• {} {}", ingredient.measure, ingredient.name);
        }
    }

    out
}

/// Full view of one recipe, instructions uncut
pub fn render_detail(record: &RecipeRecord) -> String {
    let mut out = format!(
        "{}\n\nCategory: {}\n\nArea: {}\n\nInstructions:\n{}\n",
        record.name, record.category, record.area, record.instructions
    );
    if let Some(video) = &record.youtube_url {
        let _ = writeln!(out, "\nVideo: {}", video);
    }
    out
}

/// Message shown to the user for a failed search
pub fn error_message(err: &SearchError) -> String {
    match err {
        SearchError::EmptyQuery => "Please enter a recipe name".to_string(),
        SearchError::RequestFailed { .. } => "Failed to fetch recipes".to_string(),
        SearchError::NetworkError { cause } => format!("Network error: {}", cause),
        other => other.to_string(),
    }
}
