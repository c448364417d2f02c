pub mod allocation;
pub mod analysis;
pub mod calculations;
pub mod constants;
pub mod filter;
pub mod generator;

pub use allocation::{allocate_slot, portion, select_foods, serving_size, slot_candidates};
pub use analysis::{
    compare_to_target, fiber_in_range, macro_distribution, MacroDistribution, NutrientComparison,
};
pub use calculations::{
    bmi, bmr, daily_calories, macros, nutrition_target, summarize, tdee, BmiCategory,
    NutritionSummary,
};
pub use constants::*;
pub use filter::{filter_foods, matches_diet, matches_region};
pub use generator::{
    generate_meal_plan, generate_variations, slot_calories, variation_rng, variation_seed,
};
