use crate::models::{ActivityLevel, Category, Goal, SlotName};

/// Mifflin-St Jeor sex constants.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Macro split of daily calories.
pub const PROTEIN_SHARE: f64 = 0.25;
pub const CARBS_SHARE: f64 = 0.45;
pub const FAT_SHARE: f64 = 0.30;

/// Calories per gram of each macro.
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const CARBS_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Upper (exclusive) BMI bounds for Underweight, Normal and Overweight.
pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
pub const BMI_NORMAL_BELOW: f64 = 25.0;
pub const BMI_OVERWEIGHT_BELOW: f64 = 30.0;

/// Serving bounds in grams.
pub const MIN_SERVING_G: f64 = 25.0;
pub const MAX_SERVING_G: f64 = 200.0;

/// Serving used when a food has zero calories per 100g.
pub const ZERO_CALORIE_SERVING_G: f64 = 100.0;

/// Seed = variation number * this.
pub const VARIATION_SEED_MULTIPLIER: u64 = 42;

/// Variation used when the caller does not ask for one.
pub const DEFAULT_VARIATION: u32 = 1;

/// Variations generated when the caller does not ask for a count.
pub const DEFAULT_VARIATION_COUNT: u32 = 3;

/// Recommended daily fiber range in grams.
pub const RECOMMENDED_FIBER_G: (f64, f64) = (25.0, 35.0);

/// TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
    }
}

/// Fractional calorie adjustment for a goal.
pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => -0.20,
        Goal::Maintenance => 0.0,
        Goal::MuscleGain => 0.15,
    }
}

/// Fixed configuration of one meal slot.
#[derive(Debug, Clone, Copy)]
pub struct SlotConfig {
    pub name: SlotName,
    pub calorie_share: f64,
    pub food_count: usize,
    pub categories: &'static [Category],
}

impl SlotConfig {
    pub fn allows(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }
}

/// The day's slot table. Shares must sum to 1.0.
pub static SLOT_TABLE: [SlotConfig; 5] = [
    SlotConfig {
        name: SlotName::Breakfast,
        calorie_share: 0.25,
        food_count: 2,
        categories: &[
            Category::Grains,
            Category::SouthIndian,
            Category::Dairy,
            Category::Fruits,
            Category::Beverages,
        ],
    },
    SlotConfig {
        name: SlotName::MorningSnack,
        calorie_share: 0.10,
        food_count: 1,
        categories: &[
            Category::Fruits,
            Category::Nuts,
            Category::Snacks,
            Category::Beverages,
        ],
    },
    SlotConfig {
        name: SlotName::Lunch,
        calorie_share: 0.35,
        food_count: 3,
        categories: &[
            Category::Grains,
            Category::Lentils,
            Category::Vegetables,
            Category::Dairy,
            Category::NonVeg,
        ],
    },
    SlotConfig {
        name: SlotName::EveningSnack,
        calorie_share: 0.10,
        food_count: 1,
        categories: &[
            Category::Snacks,
            Category::Fruits,
            Category::Nuts,
            Category::Beverages,
        ],
    },
    SlotConfig {
        name: SlotName::Dinner,
        calorie_share: 0.20,
        food_count: 2,
        categories: &[
            Category::Grains,
            Category::Lentils,
            Category::Vegetables,
            Category::SouthIndian,
            Category::NonVeg,
        ],
    },
];

/// Look up the configuration for a slot.
pub fn slot_config(name: SlotName) -> &'static SlotConfig {
    let index = match name {
        SlotName::Breakfast => 0,
        SlotName::MorningSnack => 1,
        SlotName::Lunch => 2,
        SlotName::EveningSnack => 3,
        SlotName::Dinner => 4,
    };
    &SLOT_TABLE[index]
}
