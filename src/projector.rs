use serde::Serialize;

use crate::model::{IngredientSlot, RecipeRecord};

/// Instructions longer than this many characters get cut
pub const INSTRUCTIONS_PREVIEW_CHARS: usize = 200;

/// Appended to cut instructions
pub const ELLIPSIS: &str = "...";

/// An ingredient with both a name and a measure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// A recipe together with the fields a list view shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecipe {
    #[serde(flatten)]
    pub record: RecipeRecord,
    pub truncated_instructions: String,
    pub pruned_ingredients: Vec<Ingredient>,
}

/// Derive the display fields for a single record.
pub fn project(record: RecipeRecord) -> DisplayRecipe {
    let truncated_instructions = truncate_instructions(&record.instructions);
    let pruned_ingredients = prune_ingredients(&record.ingredients);

    DisplayRecipe {
        record,
        truncated_instructions,
        pruned_ingredients,
    }
}

/// Keep the first 200 characters and append `...` when the text is longer.
///
/// Counts `char`s, not bytes or words, so a word may be cut in half.
pub fn truncate_instructions(instructions: &str) -> String {
    match instructions.char_indices().nth(INSTRUCTIONS_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &instructions[..cut], ELLIPSIS),
        None => instructions.to_string(),
    }
}

/// Slots where the name or the measure is missing or empty are dropped.
pub fn prune_ingredients(slots: &[IngredientSlot]) -> Vec<Ingredient> {
    let mut ordered: Vec<&IngredientSlot> = slots.iter().collect();
    ordered.sort_by_key(|slot| slot.position);

    ordered
        .into_iter()
        .filter_map(|slot| match (slot.name.as_deref(), slot.measure.as_deref()) {
            (Some(name), Some(measure)) if !name.is_empty() && !measure.is_empty() => {
                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
            }
            _ => None,
        })
        .collect()
}
