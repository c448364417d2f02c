use rand::Rng;

use crate::models::{round1, Food, NutrientTotals, SelectedFood};
use crate::planner::constants::{
    SlotConfig, MAX_SERVING_G, MIN_SERVING_G, ZERO_CALORIE_SERVING_G,
};

/// Grams of `calories_per_100g` food needed to hit `target_calories`,
/// clamped to the serving bounds. Zero-calorie foods get a fixed serving.
pub fn serving_size(target_calories: f64, calories_per_100g: f64) -> f64 {
    if calories_per_100g == 0.0 {
        return ZERO_CALORIE_SERVING_G;
    }
    (target_calories / calories_per_100g * 100.0).clamp(MIN_SERVING_G, MAX_SERVING_G)
}

/// Nutrition of `serving_g` grams of `food`.
///
/// Nutrients are scaled from the unrounded serving, then rounded to one
/// decimal; the reported serving is rounded to whole grams.
pub fn portion(food: &Food, serving_g: f64, target_calories: f64) -> SelectedFood {
    let scaled = food.nutrition.scaled(serving_g);
    SelectedFood {
        name: food.name.clone(),
        category: food.category.clone(),
        serving_g: serving_g.round(),
        target_calories: round1(target_calories),
        nutrients: NutrientTotals {
            calories: scaled.calories,
            protein_g: scaled.protein_g,
            carbs_g: scaled.carbs_g,
            fat_g: scaled.fat_g,
            fiber_g: scaled.fiber_g,
        }
        .rounded(),
    }
}

/// Foods from `eligible` whose category the slot allows, or all of
/// `eligible` when none do.
pub fn slot_candidates<'a>(eligible: &[&'a Food], config: &SlotConfig) -> Vec<&'a Food> {
    let narrowed: Vec<&Food> = eligible
        .iter()
        .copied()
        .filter(|f| config.allows(&f.category))
        .collect();

    if narrowed.is_empty() {
        tracing::warn!(
            slot = config.name.key(),
            "no eligible food in the slot's categories, using every eligible food"
        );
        return eligible.to_vec();
    }
    narrowed
}

/// Greedy fill of one slot.
///
/// Each position draws a food uniformly from the remaining candidates
/// (without replacement) and sizes it against an equal share of the calories
/// still left. The rounded calories actually served are subtracted before the
/// next position, so clamping error carries forward into later picks.
/// Returns fewer than `count` foods only when the candidates run out.
pub fn select_foods<R: Rng>(
    mut candidates: Vec<&Food>,
    calorie_budget: f64,
    count: usize,
    rng: &mut R,
) -> Vec<SelectedFood> {
    let mut selected = Vec::with_capacity(count);
    let mut remaining = calorie_budget;

    for i in 0..count {
        if candidates.is_empty() {
            break;
        }

        let idx = rng.gen_range(0..candidates.len());
        let food = candidates.remove(idx);

        let target = remaining / (count - i) as f64;
        let serving = serving_size(target, food.nutrition.calories);
        let pick = portion(food, serving, target);

        tracing::debug!(
            food = %food.name,
            target = pick.target_calories,
            serving_g = pick.serving_g,
            calories = pick.nutrients.calories,
            "food selected"
        );

        remaining -= pick.nutrients.calories;
        selected.push(pick);
    }

    selected
}

/// Fill a slot from the request's eligible foods.
pub fn allocate_slot<R: Rng>(
    eligible: &[&Food],
    config: &SlotConfig,
    calorie_budget: u32,
    rng: &mut R,
) -> Vec<SelectedFood> {
    let candidates = slot_candidates(eligible, config);
    let selected = select_foods(candidates, calorie_budget as f64, config.food_count, rng);

    if selected.len() < config.food_count {
        tracing::warn!(
            slot = config.name.key(),
            wanted = config.food_count,
            got = selected.len(),
            "slot ran out of candidate foods"
        );
    }
    selected
}
