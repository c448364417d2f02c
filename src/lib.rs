pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod planner;

pub use catalog::FoodCatalog;
pub use error::{PlannerError, Result};
pub use models::{Food, MealPlan, NutritionTarget, UserProfile};
