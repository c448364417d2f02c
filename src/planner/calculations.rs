use std::fmt;

use serde::Serialize;

use crate::models::{round1, ActivityLevel, Gender, NutritionTarget, UserProfile};
use crate::planner::constants::*;

/// BMI band, lower bound inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// Everything derived from a profile, for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionSummary {
    pub bmr: f64,
    pub tdee: f64,
    pub target: NutritionTarget,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
}

/// Basal metabolic rate (Mifflin-St Jeor).
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64 + offset
}

/// Total daily energy expenditure.
pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity_level)
}

/// Goal-adjusted daily calories, truncated toward zero.
pub fn daily_calories(profile: &UserProfile) -> u32 {
    let bmr = bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );
    let tdee = tdee(bmr, profile.activity_level);
    let adjusted = tdee * (1.0 + goal_adjustment(profile.goal));
    adjusted as u32
}

/// Split calories 25/45/30 into protein/carbs/fat grams, truncated.
pub fn macros(daily_calories: u32) -> NutritionTarget {
    let calories = daily_calories as f64;
    NutritionTarget {
        calories: daily_calories,
        protein_g: (calories * PROTEIN_SHARE / PROTEIN_KCAL_PER_G) as u32,
        carbs_g: (calories * CARBS_SHARE / CARBS_KCAL_PER_G) as u32,
        fat_g: (calories * FAT_SHARE / FAT_KCAL_PER_G) as u32,
    }
}

/// Calorie and macro target for a profile.
pub fn nutrition_target(profile: &UserProfile) -> NutritionTarget {
    macros(daily_calories(profile))
}

/// BMI rounded to one decimal, with its band.
///
/// The band is chosen from the unrounded value.
pub fn bmi(weight_kg: f64, height_cm: f64) -> (f64, BmiCategory) {
    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);

    let category = if value < BMI_UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if value < BMI_NORMAL_BELOW {
        BmiCategory::Normal
    } else if value < BMI_OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    (round1(value), category)
}

/// BMR, TDEE, target and BMI in one pass.
pub fn summarize(profile: &UserProfile) -> NutritionSummary {
    let bmr_value = bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );
    let tdee_value = tdee(bmr_value, profile.activity_level);
    let (bmi_value, bmi_category) = bmi(profile.weight_kg, profile.height_cm);

    NutritionSummary {
        bmr: bmr_value,
        tdee: tdee_value,
        target: nutrition_target(profile),
        bmi: bmi_value,
        bmi_category,
    }
}
