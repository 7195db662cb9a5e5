use std::env;
use std::process::ExitCode;

use log::{debug, error};
use mealdb_search::render::{error_message, render_detail, render_summary, NO_RESULTS_MESSAGE};
use mealdb_search::RecipeSearch;

const USAGE: &str = "Usage: mealdb-search <recipe name> [--details] [--json]";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let mut details = false;
    let mut json = false;
    let mut words = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--details" => details = true,
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return ExitCode::SUCCESS;
            }
            _ => words.push(arg),
        }
    }

    let query = words.join(" ");
    debug!("query={:?} details={} json={}", query, details, json);

    let result = match RecipeSearch::builder().query(query).build().await {
        Ok(result) => result,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", error_message(&e));
            return ExitCode::FAILURE;
        }
    };

    let recipes = result.into_recipes();
    if recipes.is_empty() {
        if json {
            println!("[]");
        } else {
            println!("{}", NO_RESULTS_MESSAGE);
        }
        return ExitCode::SUCCESS;
    }

    if json {
        match serde_json::to_string_pretty(&recipes) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Failed to serialize recipes: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    for (i, recipe) in recipes.iter().enumerate() {
        if i > 0 {
            println!("----------------------------------------");
        }
        if details {
            print!("{}", render_detail(&recipe.record));
        } else {
            print!("{}", render_summary(recipe));
        }
    }

    ExitCode::SUCCESS
}
