use std::env;
use std::process::ExitCode;

use log::error;
use mealdb_client::{AsyncResult, LoadState, MealLoader};
use serde::Serialize;

const USAGE: &str = "Usage: mealdb-client <category> | mealdb-client --meal <id>";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let loader = match MealLoader::from_env() {
        Ok(loader) => loader,
        Err(e) => {
            error!("Failed to create meal loader: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match args.as_slice() {
        [flag, id] if flag == "--meal" => {
            let meal = AsyncResult::new();
            meal.load_if_needed(|| loader.load_meal(id)).await;
            print_result(&meal)
        }
        [category] if !category.starts_with('-') => {
            let meals = AsyncResult::new();
            meals.load_if_needed(|| loader.load_category(category)).await;
            print_result(&meals)
        }
        _ => {
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn print_result<T: Serialize>(result: &AsyncResult<T>) -> ExitCode {
    if result.state() != LoadState::Success {
        eprintln!("An error occurred while loading (run with RUST_LOG=debug for details)");
        return ExitCode::FAILURE;
    }

    let json = result.with_value(|value| serde_json::to_string_pretty(&value));
    match json {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize result: {}", e);
            ExitCode::FAILURE
        }
    }
}
