use crate::models::{Food, MealPlan, PlanVariation, UserProfile};
use crate::planner::constants::RECOMMENDED_FIBER_G;
use crate::planner::{compare_to_target, fiber_in_range, macro_distribution, NutritionSummary};

/// Display the derived nutrition numbers for a profile.
pub fn display_summary(profile: &UserProfile, summary: &NutritionSummary) {
    println!();
    println!("=== Nutrition Summary ===");
    println!();
    println!(
        "Profile: {} y, {}, {:.1} kg, {:.1} cm, {}, goal: {}",
        profile.age,
        profile.gender,
        profile.weight_kg,
        profile.height_cm,
        profile.activity_level,
        profile.goal
    );
    println!("BMI: {:.1} ({})", summary.bmi, summary.bmi_category);
    println!("BMR: {:.0} kcal", summary.bmr);
    println!("TDEE: {:.0} kcal", summary.tdee);
    println!();

    let target = &summary.target;
    println!("Daily calories: {}", target.calories);
    println!("Protein: {} g (25%)", target.protein_g);
    println!("Carbs:   {} g (45%)", target.carbs_g);
    println!("Fat:     {} g (30%)", target.fat_g);
    println!();
}

/// Display a meal plan slot by slot, followed by the target comparison.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.food_count() == 0 {
        println!("No meal plan generated (no eligible foods).");
        return;
    }

    println!();
    println!("=== Meal Plan (variation {}) ===", plan.variation);

    let max_name_len = plan
        .slots()
        .flat_map(|s| s.foods.iter())
        .map(|f| f.name.len())
        .max()
        .unwrap_or(10);

    for slot in plan.slots() {
        println!();
        println!("--- {} (budget {} kcal) ---", slot.name, slot.calorie_budget);

        for food in &slot.foods {
            println!(
                "  {:<width$}  {:>4.0} g  {:>6.1} kcal | P {:>5.1} g  C {:>5.1} g  F {:>5.1} g",
                food.name,
                food.serving_g,
                food.nutrients.calories,
                food.nutrients.protein_g,
                food.nutrients.carbs_g,
                food.nutrients.fat_g,
                width = max_name_len
            );
        }

        let totals = &slot.totals;
        println!(
            "  Meal total: {:.0} kcal | {:.1} g protein | {:.1} g carbs | {:.1} g fat",
            totals.calories, totals.protein_g, totals.carbs_g, totals.fat_g
        );
    }

    display_comparison(plan);
}

/// Display target vs actual, macro split and fiber.
pub fn display_comparison(plan: &MealPlan) {
    println!();
    println!("--- Target vs Actual ---");
    println!("{:<12} {:>8} {:>8} {:>8}", "Nutrient", "Target", "Actual", "Diff");
    for row in compare_to_target(plan) {
        let sign = if row.difference >= 0.0 { "+" } else { "" };
        println!(
            "{:<12} {:>8.0} {:>8.1} {:>7}{:.1}",
            row.nutrient, row.target, row.actual, sign, row.difference
        );
    }

    if let Some(dist) = macro_distribution(plan) {
        println!();
        println!(
            "Macro split: protein {:.1}% | carbs {:.1}% | fat {:.1}%",
            dist.protein_pct, dist.carbs_pct, dist.fat_pct
        );
    }

    let (low, high) = RECOMMENDED_FIBER_G;
    let note = if fiber_in_range(plan) { "" } else { " - outside range" };
    println!(
        "Daily fiber: {:.1} g (recommended {:.0}-{:.0} g){}",
        plan.daily_totals.fiber_g, low, high, note
    );
    println!();
}

/// Display variations side by side.
pub fn display_variations(variations: &[PlanVariation], requested: u32) {
    if variations.is_empty() {
        println!("No variations could be generated.");
        return;
    }

    println!();
    println!(
        "=== {} of {} variations generated ===",
        variations.len(),
        requested
    );
    println!();

    for variation in variations {
        let totals = &variation.meal_plan.daily_totals;
        println!(
            "Variation {}: {:.0} kcal | {:.1} g protein | {:.1} g carbs | {:.1} g fat | {:.1} g fiber",
            variation.variation_number,
            totals.calories,
            totals.protein_g,
            totals.carbs_g,
            totals.fat_g,
            totals.fiber_g
        );

        for slot in variation.meal_plan.slots() {
            let names: Vec<&str> = slot.foods.iter().map(|f| f.name.as_str()).collect();
            println!("    {:<14} {}", slot.name.to_string(), names.join(", "));
        }
        println!();
    }
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&Food], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        let tag = if food.is_vegan {
            "vegan"
        } else if food.is_vegetarian {
            "veg"
        } else {
            "non-veg"
        };
        println!(
            "  {} [{} / {} / {}] - {} kcal, P:{} C:{} F:{} Fi:{} per 100g",
            food.name,
            food.category,
            food.region,
            tag,
            food.nutrition.calories,
            food.nutrition.protein_g,
            food.nutrition.carbs_g,
            food.nutrition.fat_g,
            food.nutrition.fiber_g
        );
    }

    println!();
}
