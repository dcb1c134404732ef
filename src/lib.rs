//! Client for the themealdb.com recipe API.
//!
//! [`MealLoader`] queries the API and turns its flat JSON records into [`Meal`]s,
//! while [`AsyncResult`] coordinates loading a value for a presentation layer:
//!
//! ```no_run
//! use mealdb_client::{AsyncResult, LoadState, Meal, MealLoader};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let loader = MealLoader::default();
//! let category: AsyncResult<Vec<Meal>> = AsyncResult::new();
//!
//! category.load_if_needed(|| loader.load_category("Seafood")).await;
//! if category.state() == LoadState::Success {
//!     for meal in category.value().unwrap_or_default() {
//!         println!("{} ({})", meal.name, meal.id);
//!     }
//! }
//! # }
//! ```

pub mod async_result;
pub mod config;
pub mod error;
pub mod json;
pub mod loader;
pub mod mapper;
pub mod model;

pub use async_result::{AsyncResult, LoadObserver, LoadState, LogObserver};
pub use config::ClientConfig;
pub use error::LoadError;
pub use loader::MealLoader;
pub use model::{Ingredient, Meal};
