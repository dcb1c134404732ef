use std::collections::HashSet;

use reqwest::Url;

use crate::json::JsonMeal;
use crate::model::{Ingredient, Meal};

/// Converts a raw API record into a `Meal`.
///
/// Returns `None` unless the record has a non-empty ID and name. Ingredients keep
/// the record's slot order, and a slot is only used when both its name and measure
/// are non-empty.
pub fn map_record(json_meal: &JsonMeal) -> Option<Meal> {
    let id = non_empty(&json_meal.id)?;
    let name = non_empty(&json_meal.name)?;

    let ingredients = json_meal
        .ingredients
        .iter()
        .filter_map(|slot| {
            let ingredient_name = non_empty(&slot.name)?;
            let amount = non_empty(&slot.measure)?;
            Some(Ingredient::new(ingredient_name, amount))
        })
        .collect();

    Some(Meal {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: non_empty(&json_meal.thumbnail).and_then(|url| Url::parse(url).ok()),
        instructions: non_empty(&json_meal.instructions).map(str::to_string),
        ingredients,
    })
}

/// Maps a category listing into meals with unique IDs, sorted by name.
///
/// Invalid records are dropped, as is any record whose ID was already seen. The
/// sort ignores case and is stable, so meals with the same lowercased name keep
/// their listing order.
pub fn normalize(json_meals: &[JsonMeal]) -> Vec<Meal> {
    let mut meal_ids = HashSet::with_capacity(json_meals.len());
    let mut meals: Vec<Meal> = json_meals
        .iter()
        .filter_map(map_record)
        .filter(|meal| meal_ids.insert(meal.id.clone()))
        .collect();

    meals.sort_by_cached_key(|meal| meal.name.to_lowercase());
    meals
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
