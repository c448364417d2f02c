use serde::Serialize;

use crate::models::{round1, MealPlan};
use crate::planner::constants::{
    CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G, RECOMMENDED_FIBER_G,
};

/// Target vs actual for one nutrient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientComparison {
    pub nutrient: &'static str,
    pub target: f64,
    pub actual: f64,
    /// actual - target
    pub difference: f64,
}

/// Share of macro calories, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroDistribution {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

/// Calories, protein, carbs and fat of the plan against its target.
pub fn compare_to_target(plan: &MealPlan) -> Vec<NutrientComparison> {
    let target = &plan.target;
    let actual = &plan.daily_totals;

    [
        ("Calories", target.calories, actual.calories),
        ("Protein (g)", target.protein_g, actual.protein_g),
        ("Carbs (g)", target.carbs_g, actual.carbs_g),
        ("Fat (g)", target.fat_g, actual.fat_g),
    ]
    .into_iter()
    .map(|(nutrient, target, actual)| NutrientComparison {
        nutrient,
        target: target as f64,
        actual,
        difference: round1(actual - target as f64),
    })
    .collect()
}

/// Protein/carbs/fat split of the plan's macro calories.
///
/// `None` when the plan carries no macro calories at all.
pub fn macro_distribution(plan: &MealPlan) -> Option<MacroDistribution> {
    let totals = &plan.daily_totals;
    let protein = totals.protein_g * PROTEIN_KCAL_PER_G;
    let carbs = totals.carbs_g * CARBS_KCAL_PER_G;
    let fat = totals.fat_g * FAT_KCAL_PER_G;
    let total = protein + carbs + fat;

    if total <= 0.0 {
        return None;
    }

    Some(MacroDistribution {
        protein_pct: protein / total * 100.0,
        carbs_pct: carbs / total * 100.0,
        fat_pct: fat / total * 100.0,
    })
}

/// Whether daily fiber falls inside the recommended range.
pub fn fiber_in_range(plan: &MealPlan) -> bool {
    let (low, high) = RECOMMENDED_FIBER_G;
    (low..=high).contains(&plan.daily_totals.fiber_g)
}
