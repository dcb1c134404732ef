use std::time::Duration;

use log::debug;
use reqwest::{Client, Url};

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::LoadError;
use crate::json::JsonResult;
use crate::mapper::{map_record, normalize};
use crate::model::Meal;

/// Loads meal data from the themealdb.com API.
///
/// Cloning is cheap and clones share one connection pool, so a single loader can
/// back any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct MealLoader {
    client: Client,
    base_url: String,
}

impl Default for MealLoader {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl MealLoader {
    /// Create a loader from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("mealdb-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: trim_base_url(&config.base_url),
        })
    }

    /// Create a loader from `mealdb.toml` and `MEALDB__*` environment variables
    pub fn from_env() -> Result<Self, LoadError> {
        let config = ClientConfig::load()?;
        Self::from_config(&config)
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: trim_base_url(&base_url),
        }
    }

    /// Loads all meals in a category.
    ///
    /// The meals are sorted alphabetically by name (ignoring case) and are
    /// guaranteed to have unique IDs. A category with no meals is not an error.
    ///
    /// # Errors
    /// `LoadError::InvalidCategoryUrl` if the query URL cannot be built, otherwise
    /// whatever the transport or JSON decoding reports.
    pub async fn load_category(&self, name: &str) -> Result<Vec<Meal>, LoadError> {
        let url = self.category_url(name)?;
        let json_meals = self.fetch(url).await?.meals.unwrap_or_default();
        let meals = normalize(&json_meals);
        debug!(
            "Category {:?}: {} of {} records usable",
            name,
            meals.len(),
            json_meals.len()
        );
        Ok(meals)
    }

    /// Loads a single meal with its instructions and ingredients.
    ///
    /// # Errors
    /// `LoadError::InvalidMealUrl` if the lookup URL cannot be built and
    /// `LoadError::MealNotFound` if the response holds no valid meal. Transport and
    /// decoding failures are passed through.
    pub async fn load_meal(&self, id: &str) -> Result<Meal, LoadError> {
        let url = self.meal_url(id)?;
        self.fetch(url)
            .await?
            .meals
            .and_then(|meals| meals.first().and_then(map_record))
            .ok_or_else(|| LoadError::MealNotFound(id.to_string()))
    }

    async fn fetch(&self, url: Url) -> Result<JsonResult, LoadError> {
        debug!("GET {}", url);
        let data = self.client.get(url).send().await?.bytes().await?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn category_url(&self, name: &str) -> Result<Url, LoadError> {
        let base_url = format!("{}/filter.php", self.base_url);
        Url::parse_with_params(&base_url, [("c", name)]).map_err(|_| {
            LoadError::InvalidCategoryUrl {
                base_url,
                category: name.to_string(),
            }
        })
    }

    fn meal_url(&self, id: &str) -> Result<Url, LoadError> {
        let base_url = format!("{}/lookup.php", self.base_url);
        Url::parse_with_params(&base_url, [("i", id)]).map_err(|_| LoadError::InvalidMealUrl {
            base_url,
            meal_id: id.to_string(),
        })
    }
}

fn trim_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
