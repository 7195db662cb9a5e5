use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of positional ingredient/measure pairs in the upstream schema
pub const INGREDIENT_SLOTS: usize = 20;

/// Body of `search.php`; `meals` is `null` when nothing matched.
#[derive(Debug, Deserialize)]
pub struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<RecipeRecord>>,
}

/// One positional ingredient slot as sent by upstream.
///
/// `position` is 1-based and matches the `strIngredientN`/`strMeasureN` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientSlot {
    pub position: u8,
    pub name: Option<String>,
    pub measure: Option<String>,
}

/// A recipe as returned by the upstream API
///
/// The JSON shape is one-way: deserializing reads upstream's `idMeal`/`strMeal`/
/// `strIngredientN` keys, serializing writes camelCase field names (`id`, `name`,
/// `thumbnailUrl`, `ingredients`). Serialized output cannot be read back as a
/// `RecipeRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMeal", rename_all = "camelCase")]
pub struct RecipeRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub thumbnail_url: Option<String>,
    pub youtube_url: Option<String>,
    /// Slots in ascending position; slots where both fields are null are left out
    pub ingredients: Vec<IngredientSlot>,
}

#[derive(Deserialize)]
struct RawMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

fn string_field(fields: &HashMap<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<RawMeal> for RecipeRecord {
    fn from(raw: RawMeal) -> Self {
        let ingredients = (1..=INGREDIENT_SLOTS)
            .filter_map(|position| {
                let name = string_field(&raw.rest, &format!("strIngredient{}", position));
                let measure = string_field(&raw.rest, &format!("strMeasure{}", position));
                if name.is_none() && measure.is_none() {
                    return None;
                }
                Some(IngredientSlot {
                    position: position as u8,
                    name,
                    measure,
                })
            })
            .collect();

        RecipeRecord {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            category: raw.category.unwrap_or_default(),
            area: raw.area.unwrap_or_default(),
            instructions: raw.instructions.unwrap_or_default(),
            thumbnail_url: non_empty(raw.thumbnail),
            youtube_url: non_empty(raw.youtube),
            ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_slots_become_sequence() {
        let json = r#"{
            "idMeal": "52771",
            "strMeal": "Spicy Arrabiata Penne",
            "strCategory": "Vegetarian",
            "strArea": "Italian",
            "strInstructions": "Bring a large pot of water to a boil.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
            "strYoutube": "https://www.youtube.com/watch?v=1IszT_guI08",
            "strIngredient1": "penne rigate",
            "strIngredient2": "olive oil",
            "strIngredient3": "",
            "strIngredient4": null,
            "strMeasure1": "1 pound",
            "strMeasure2": "1/4 cup",
            "strMeasure3": "",
            "strMeasure4": null
        }"#;

        let record: RecipeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "52771");
        assert_eq!(record.area, "Italian");
        assert_eq!(
            record.youtube_url.as_deref(),
            Some("https://www.youtube.com/watch?v=1IszT_guI08")
        );
        assert_eq!(record.ingredients.len(), 3);
        assert_eq!(record.ingredients[0].position, 1);
        assert_eq!(record.ingredients[0].name.as_deref(), Some("penne rigate"));
        assert_eq!(record.ingredients[1].measure.as_deref(), Some("1/4 cup"));
        assert_eq!(record.ingredients[2].position, 3);
        assert_eq!(record.ingredients[2].name.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_descriptive_fields_default_to_empty() {
        let record: RecipeRecord = serde_json::from_str(r#"{"idMeal": "1"}"#).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.instructions, "");
        assert!(record.thumbnail_url.is_none());
        assert!(record.ingredients.is_empty());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result = serde_json::from_str::<RecipeRecord>(r#"{"strMeal": "Nameless"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_slots_past_twenty_ignored() {
        let record: RecipeRecord = serde_json::from_str(
            r#"{"idMeal": "1", "strIngredient21": "salt", "strMeasure21": "pinch"}"#,
        )
        .unwrap();
        assert!(record.ingredients.is_empty());
    }

    #[test]
    fn test_serialized_shape_differs_from_upstream() {
        let record: RecipeRecord = serde_json::from_str(
            r#"{"idMeal": "7", "strMeal": "Tart", "strMealThumb": "https://example.com/t.jpg"}"#,
        )
        .unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "7");
        assert_eq!(value["name"], "Tart");
        assert_eq!(value["thumbnailUrl"], "https://example.com/t.jpg");
        assert!(value.get("idMeal").is_none());

        assert!(serde_json::from_value::<RecipeRecord>(value).is_err());
    }

    #[test]
    fn test_null_meals() {
        let response: MealsResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(response.meals.is_none());

        let response: MealsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.meals.is_none());
    }
}
