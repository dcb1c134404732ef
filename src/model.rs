use reqwest::Url;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// A single ingredient of a meal.
///
/// Each ingredient gets a fresh identity when constructed, so two ingredients
/// with the same name and amount are still distinct entries.
#[derive(Debug, Clone, Serialize)]
pub struct Ingredient {
    id: Uuid,
    pub name: String,
    pub amount: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount: amount.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ingredient {}

/// A single meal returned by the `MealLoader`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_url")]
    pub thumbnail: Option<Url>,
    pub instructions: Option<String>,
    /// Ingredients in display order.
    pub ingredients: Vec<Ingredient>,
}

fn serialize_url<S: Serializer>(url: &Option<Url>, serializer: S) -> Result<S::Ok, S::Error> {
    url.as_ref().map(Url::as_str).serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_identity() {
        let a = Ingredient::new("Salmon", "2 fillets");
        let b = Ingredient::new("Salmon", "2 fillets");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_ingredient_edit_keeps_identity() {
        let original = Ingredient::new("Salt", "pinch");
        let mut edited = original.clone();
        edited.amount = "1 tsp".to_string();
        assert_eq!(original, edited);
        assert_eq!(original.id(), edited.id());
    }
}
