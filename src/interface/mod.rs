pub mod prompts;
pub mod render;

pub use prompts::{prompt_preferences, prompt_profile};
pub use render::{
    display_comparison, display_food_list, display_meal_plan, display_summary,
    display_variations,
};
