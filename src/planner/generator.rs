use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::{
    DietPreference, MealPlan, MealSlot, NutritionTarget, PlanVariation, RegionPreference,
};
use crate::planner::allocation::allocate_slot;
use crate::planner::constants::{SLOT_TABLE, VARIATION_SEED_MULTIPLIER};
use crate::planner::filter::filter_foods;

/// Seed for a variation number.
pub fn variation_seed(variation: u32) -> u64 {
    variation as u64 * VARIATION_SEED_MULTIPLIER
}

/// The random stream for a variation: ChaCha8 seeded through
/// `SeedableRng::seed_from_u64`, so a variation number always replays the
/// same draws regardless of platform or call order.
pub fn variation_rng(variation: u32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(variation_seed(variation))
}

/// Calorie budget of a slot: `floor(daily * share)`.
pub fn slot_calories(daily_calories: u32, share: f64) -> u32 {
    (daily_calories as f64 * share) as u32
}

/// Generate one day's plan for `target`.
///
/// The catalog is filtered once; every slot then draws from its own copy of
/// the eligible foods, so a food may repeat across slots but never within
/// one. All slots share a single random stream in slot-table order.
/// The only failure is `NoFoodsAvailable` from the filter.
pub fn generate_meal_plan(
    catalog: &FoodCatalog,
    target: &NutritionTarget,
    diet: DietPreference,
    region: RegionPreference,
    variation: u32,
) -> Result<MealPlan> {
    let eligible = filter_foods(catalog, diet, region)?;
    let mut rng = variation_rng(variation);

    let slots: Vec<MealSlot> = SLOT_TABLE
        .iter()
        .map(|config| {
            let budget = slot_calories(target.calories, config.calorie_share);
            let foods = allocate_slot(&eligible, config, budget, &mut rng);
            MealSlot::new(config.name, budget, foods)
        })
        .collect();

    let plan = MealPlan::new(variation, slots, *target);
    tracing::info!(
        variation,
        foods = plan.food_count(),
        calories = plan.daily_totals.calories,
        target = target.calories,
        "meal plan generated"
    );
    Ok(plan)
}

/// Generate variations `1..=count`, each from its own seed.
///
/// A variation that fails is logged and skipped, so the result may hold fewer
/// than `count` plans.
pub fn generate_variations(
    catalog: &FoodCatalog,
    target: &NutritionTarget,
    diet: DietPreference,
    region: RegionPreference,
    count: u32,
) -> Vec<PlanVariation> {
    (1..=count)
        .filter_map(
            |variation| match generate_meal_plan(catalog, target, diet, region, variation) {
                Ok(meal_plan) => Some(PlanVariation {
                    variation_number: variation,
                    meal_plan,
                }),
                Err(e) => {
                    tracing::warn!(variation, error = %e, "skipping variation");
                    None
                }
            },
        )
        .collect()
}
