use thiserror::Error;

/// Errors that can occur while loading meals from the remote API
#[derive(Error, Debug)]
pub enum LoadError {
    /// The category query URL could not be built
    #[error("Invalid category URL: base {base_url:?}, category {category:?}")]
    InvalidCategoryUrl { base_url: String, category: String },

    /// The meal lookup URL could not be built
    #[error("Invalid meal URL: base {base_url:?}, meal ID {meal_id:?}")]
    InvalidMealUrl { base_url: String, meal_id: String },

    /// The lookup returned no usable meal for this ID
    #[error("Cannot find meal with ID {0:?}")]
    MealNotFound(String),

    /// Transport failure, passed through from reqwest
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Response body was not a valid query result
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl LoadError {
    /// Whether this is one of the client's own failures rather than a
    /// transport, decode or configuration error bubbling up from below.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            LoadError::InvalidCategoryUrl { .. }
                | LoadError::InvalidMealUrl { .. }
                | LoadError::MealNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_not_found_is_domain() {
        let err = LoadError::MealNotFound("999999".to_string());
        assert!(err.is_domain());
        assert_eq!(err.to_string(), "Cannot find meal with ID \"999999\"");
    }

    #[test]
    fn test_decode_error_is_transparent() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = json_err.to_string();
        let err = LoadError::from(json_err);
        assert!(!err.is_domain());
        assert_eq!(err.to_string(), expected);
    }
}
