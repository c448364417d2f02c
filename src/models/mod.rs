pub mod food;
pub mod plan;
pub mod profile;

pub use food::{Category, Food, NutritionPer100g, Region};
pub use plan::{
    round1, MealPlan, MealSlot, NutrientTotals, NutritionTarget, PlanVariation, SelectedFood,
    SlotName,
};
pub use profile::{ActivityLevel, DietPreference, Gender, Goal, RegionPreference, UserProfile};
