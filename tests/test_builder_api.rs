use std::net::TcpListener;
use std::time::{Duration, Instant};

use mealdb_search::{find_recipes, RecipeSearch, SearchError, SearchResult};
use mockito::{Matcher, Server};

const ONE_MEAL: &str = r#"{
    "meals": [{
        "idMeal": "52844",
        "strMeal": "Lasagne",
        "strCategory": "Pasta",
        "strArea": "Italian",
        "strInstructions": "Heat the oil in a large saucepan. Use kitchen scissors to snip the bacon into small pieces, or use a sharp knife to chop it on a chopping board. Add the bacon to the pan and cook for just a few mins until starting to turn golden.",
        "strMealThumb": "https://www.themealdb.com/images/media/meals/wtsvxx1511296896.jpg",
        "strIngredient1": "Olive Oil",
        "strMeasure1": "1 tblsp",
        "strIngredient2": "Bacon",
        "strMeasure2": "2",
        "strIngredient3": "Onion",
        "strMeasure3": ""
    }]
}"#;

#[tokio::test]
async fn test_builder_projects_by_default() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "lasagne".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ONE_MEAL)
        .create_async()
        .await;

    let result = RecipeSearch::builder()
        .query("lasagne")
        .base_url(server.url())
        .build()
        .await
        .unwrap();

    match result {
        SearchResult::Recipes(recipes) => {
            assert_eq!(recipes.len(), 1);
            let recipe = &recipes[0];
            assert_eq!(recipe.record.name, "Lasagne");
            assert!(recipe.record.instructions.chars().count() > 200);
            assert_eq!(recipe.truncated_instructions.chars().count(), 203);
            assert!(recipe.truncated_instructions.ends_with("..."));
            let names: Vec<_> = recipe
                .pruned_ingredients
                .iter()
                .map(|i| i.name.as_str())
                .collect();
            assert_eq!(names, vec!["Olive Oil", "Bacon"]);
        }
        other => panic!("Expected Recipes result, got {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_builder_records_only() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(ONE_MEAL)
        .create_async()
        .await;

    let result = RecipeSearch::builder()
        .query("lasagne")
        .base_url(server.url())
        .records_only()
        .build()
        .await
        .unwrap();

    match result {
        SearchResult::Records(records) => {
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].ingredients.len(), 3);
        }
        other => panic!("Expected Records result, got {:?}", other),
    }
}

#[tokio::test]
async fn test_records_convert_to_display_recipes() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(ONE_MEAL)
        .expect(2)
        .create_async()
        .await;

    let records = RecipeSearch::builder()
        .query("lasagne")
        .base_url(server.url())
        .records_only()
        .build()
        .await
        .unwrap();
    let projected = RecipeSearch::builder()
        .query("lasagne")
        .base_url(server.url())
        .build()
        .await
        .unwrap();

    let from_records = records.into_recipes();
    assert_eq!(from_records.len(), 1);
    assert_eq!(from_records, projected.into_recipes());
    assert!(SearchResult::NoResults.into_recipes().is_empty());
}

#[tokio::test]
async fn test_builder_no_results() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let result = RecipeSearch::builder()
        .query("nothing like this")
        .base_url(server.url())
        .build()
        .await
        .unwrap();

    assert_eq!(result, SearchResult::NoResults);
}

#[tokio::test]
async fn test_blank_query_never_reaches_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    for query in ["", "   ", "\n\t"] {
        let result = RecipeSearch::builder()
            .query(query)
            .base_url(server.url())
            .build()
            .await;
        assert!(matches!(result, Err(SearchError::EmptyQuery)));
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_query_is_empty_query() {
    let result = RecipeSearch::builder().build().await;
    assert!(matches!(result, Err(SearchError::EmptyQuery)));
}

#[tokio::test]
async fn test_sub_second_timeout_is_honoured() {
    // Accepts connections at the socket level but never answers
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let started = Instant::now();
    let result = RecipeSearch::builder()
        .query("pasta")
        .base_url(format!("http://{}", addr))
        .timeout(Duration::from_millis(200))
        .build()
        .await;
    let elapsed = started.elapsed();

    assert!(matches!(result, Err(SearchError::NetworkError { .. })));
    assert!(
        elapsed < Duration::from_millis(800),
        "200ms timeout took {:?}",
        elapsed
    );
    drop(listener);
}

/// This test is ignored by default since it requires network access
#[tokio::test]
#[ignore]
async fn test_live_search() {
    let result = find_recipes("Arrabiata").await.unwrap();
    match result {
        SearchResult::Recipes(recipes) => assert!(!recipes.is_empty()),
        other => panic!("Expected Recipes result, got {:?}", other),
    }
}
