//! Wire types for themealdb.com query results.
//!
//! The API flattens a meal's ingredients into numbered fields
//! (`strIngredient1`..`strIngredient20` paired with `strMeasure1`..`strMeasure20`).
//! These are folded into an ordered list of [`IngredientSlot`]s while decoding so
//! the rest of the crate never touches the numbered fields.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Number of (ingredient, measure) field pairs in a meal record.
pub const INGREDIENT_SLOTS: usize = 20;

/// A single query result containing zero or more meals.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonResult {
    #[serde(default)]
    pub meals: Option<Vec<JsonMeal>>,
}

/// One numbered ingredient position of a raw meal record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub name: Option<String>,
    pub measure: Option<String>,
}

/// A meal record as returned by the API, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "FlatMeal")]
pub struct JsonMeal {
    pub id: Option<String>,
    pub name: Option<String>,
    pub thumbnail: Option<String>,
    pub instructions: Option<String>,
    /// Ingredient slots in declared order, always `INGREDIENT_SLOTS` long when decoded.
    pub ingredients: Vec<IngredientSlot>,
}

#[derive(Deserialize)]
struct FlatMeal {
    #[serde(rename = "idMeal")]
    id: Option<String>,
    #[serde(rename = "strMeal")]
    name: Option<String>,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl From<FlatMeal> for JsonMeal {
    fn from(mut flat: FlatMeal) -> Self {
        let ingredients = (1..=INGREDIENT_SLOTS)
            .map(|n| IngredientSlot {
                name: take_string(&mut flat.rest, &format!("strIngredient{n}")),
                measure: take_string(&mut flat.rest, &format!("strMeasure{n}")),
            })
            .collect();

        JsonMeal {
            id: flat.id,
            name: flat.name,
            thumbnail: flat.thumbnail,
            instructions: flat.instructions,
            ingredients,
        }
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}
