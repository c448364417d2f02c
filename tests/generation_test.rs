use std::collections::HashSet;

use assert_float_eq::assert_float_absolute_eq;

use thali_planner::catalog::{builtin_catalog, parse_catalog};
use thali_planner::error::PlannerError;
use thali_planner::models::{
    ActivityLevel, DietPreference, Gender, Goal, NutrientTotals, NutritionTarget, Region,
    RegionPreference, SlotName, UserProfile,
};
use thali_planner::planner::{
    compare_to_target, filter_foods, generate_meal_plan, generate_variations, macro_distribution,
    nutrition_target, slot_config, MAX_SERVING_G, MIN_SERVING_G,
};

fn reference_target() -> NutritionTarget {
    let profile = UserProfile::new(
        30,
        Gender::Male,
        70.0,
        170.0,
        ActivityLevel::ModeratelyActive,
        Goal::Maintenance,
    )
    .unwrap();
    nutrition_target(&profile)
}

#[test]
fn test_same_variation_is_byte_identical() {
    let catalog = builtin_catalog().unwrap();
    let target = reference_target();

    for variation in 1..=5 {
        let first = generate_meal_plan(
            &catalog,
            &target,
            DietPreference::Vegetarian,
            RegionPreference::AllRegions,
            variation,
        )
        .unwrap();
        let second = generate_meal_plan(
            &catalog,
            &target,
            DietPreference::Vegetarian,
            RegionPreference::AllRegions,
            variation,
        )
        .unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn test_totals_are_consistent() {
    let catalog = builtin_catalog().unwrap();
    let target = reference_target();

    for diet in DietPreference::ALL {
        for region in RegionPreference::ALL {
            let plan = generate_meal_plan(&catalog, &target, diet, region, 2).unwrap();
            assert_eq!(plan.meals.len(), SlotName::ALL.len());

            let mut slot_sum = NutrientTotals::default();
            for slot in plan.slots() {
                let food_calories: f64 = slot.foods.iter().map(|f| f.nutrients.calories).sum();
                assert_float_absolute_eq!(food_calories, slot.totals.calories, 0.1);
                slot_sum = slot_sum + slot.totals;
            }

            let daily = &plan.daily_totals;
            assert_float_absolute_eq!(slot_sum.calories, daily.calories, 0.5);
            assert_float_absolute_eq!(slot_sum.protein_g, daily.protein_g, 0.5);
            assert_float_absolute_eq!(slot_sum.carbs_g, daily.carbs_g, 0.5);
            assert_float_absolute_eq!(slot_sum.fat_g, daily.fat_g, 0.5);
            assert_float_absolute_eq!(slot_sum.fiber_g, daily.fiber_g, 0.5);
        }
    }
}

#[test]
fn test_slot_shape_and_servings() {
    let catalog = builtin_catalog().unwrap();
    let target = reference_target();
    let plan = generate_meal_plan(
        &catalog,
        &target,
        DietPreference::NonVegetarian,
        RegionPreference::AllRegions,
        1,
    )
    .unwrap();

    for slot in plan.slots() {
        let config = slot_config(slot.name);
        assert!(!slot.foods.is_empty());
        assert!(slot.foods.len() <= config.food_count);
        assert_eq!(
            slot.calorie_budget,
            (target.calories as f64 * config.calorie_share).floor() as u32
        );

        let names: HashSet<&str> = slot.foods.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names.len(), slot.foods.len(), "duplicate food in {}", slot.name);

        for food in &slot.foods {
            assert!(food.serving_g >= MIN_SERVING_G && food.serving_g <= MAX_SERVING_G);
        }
    }
    assert_eq!(plan.target, target);
}

#[test]
fn test_vegan_filter_on_builtin_catalog() {
    let catalog = builtin_catalog().unwrap();
    for region in RegionPreference::ALL {
        let foods = filter_foods(&catalog, DietPreference::Vegan, region).unwrap();
        assert!(!foods.is_empty());
        assert!(foods.iter().all(|f| f.is_vegan));
    }
}

#[test]
fn test_north_indian_filter_excludes_south() {
    let catalog = builtin_catalog().unwrap();
    for diet in DietPreference::ALL {
        let foods = filter_foods(&catalog, diet, RegionPreference::NorthIndian).unwrap();
        assert!(foods.iter().all(|f| f.region != Region::South));
        assert!(foods.iter().any(|f| f.region == Region::All));
    }
}

#[test]
fn test_vegan_without_vegan_foods_fails() {
    let csv = "\
name,category,region,vegetarian,vegan,calories_per_100g,protein_g,carbs_g,fat_g,fiber_g
Paneer,Dairy,All,true,false,265,18.3,1.2,20.8,0
Chicken Curry,Non-Veg,North,false,false,165,18.0,4.5,8.2,0.9
";
    let catalog = parse_catalog(csv.as_bytes()).unwrap();

    let result = generate_meal_plan(
        &catalog,
        &reference_target(),
        DietPreference::Vegan,
        RegionPreference::AllRegions,
        1,
    );
    assert!(matches!(
        result,
        Err(PlannerError::NoFoodsAvailable {
            diet: DietPreference::Vegan,
            region: RegionPreference::AllRegions,
        })
    ));

    let variations = generate_variations(
        &catalog,
        &reference_target(),
        DietPreference::Vegan,
        RegionPreference::AllRegions,
        3,
    );
    assert!(variations.is_empty());
}

#[test]
fn test_variations_are_reproducible() {
    let catalog = builtin_catalog().unwrap();
    let target = reference_target();

    let variations = generate_variations(
        &catalog,
        &target,
        DietPreference::Vegetarian,
        RegionPreference::AllRegions,
        3,
    );
    let numbers: Vec<u32> = variations.iter().map(|v| v.variation_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    for variation in &variations {
        let single = generate_meal_plan(
            &catalog,
            &target,
            DietPreference::Vegetarian,
            RegionPreference::AllRegions,
            variation.variation_number,
        )
        .unwrap();
        assert_eq!(variation.meal_plan, single);
    }

    let distinct: HashSet<String> = variations
        .iter()
        .map(|v| serde_json::to_string(&v.meal_plan.meals).unwrap())
        .collect();
    assert!(distinct.len() > 1);
}

#[test]
fn test_analysis_matches_totals() {
    let catalog = builtin_catalog().unwrap();
    let target = reference_target();
    let plan = generate_meal_plan(
        &catalog,
        &target,
        DietPreference::Vegetarian,
        RegionPreference::SouthIndian,
        1,
    )
    .unwrap();

    let comparison = compare_to_target(&plan);
    assert_eq!(comparison.len(), 4);
    assert_float_absolute_eq!(comparison[0].target, target.calories as f64, 1e-9);
    assert_float_absolute_eq!(comparison[0].actual, plan.daily_totals.calories, 1e-9);

    let split = macro_distribution(&plan).unwrap();
    assert_float_absolute_eq!(split.protein_pct + split.carbs_pct + split.fat_pct, 100.0, 0.5);
}

#[test]
fn test_every_slot_draws_from_its_own_copy() {
    let csv = "\
name,category,region,vegetarian,vegan,calories_per_100g,protein_g,carbs_g,fat_g,fiber_g
Rice,Grains,All,true,true,345,7.1,78.2,0.6,1.3
";
    let catalog = parse_catalog(csv.as_bytes()).unwrap();
    let target = NutritionTarget {
        calories: 2000,
        protein_g: 125,
        carbs_g: 225,
        fat_g: 66,
    };

    let plan = generate_meal_plan(
        &catalog,
        &target,
        DietPreference::Vegan,
        RegionPreference::AllRegions,
        1,
    )
    .unwrap();

    // Budgets 500/200/700/200/400; a slot stops after one pick once Rice is used.
    let expected = [
        (SlotName::Breakfast, 72.0, 250.0),
        (SlotName::MorningSnack, 58.0, 200.0),
        (SlotName::Lunch, 68.0, 233.3),
        (SlotName::EveningSnack, 58.0, 200.0),
        (SlotName::Dinner, 58.0, 200.0),
    ];
    for (name, serving_g, calories) in expected {
        let slot = plan.slot(name).unwrap();
        assert_eq!(slot.foods.len(), 1, "{}", name);
        assert_eq!(slot.foods[0].name, "Rice");
        assert_float_absolute_eq!(slot.foods[0].serving_g, serving_g, 1e-9);
        assert_float_absolute_eq!(slot.foods[0].nutrients.calories, calories, 1e-9);
    }
}

#[test]
fn test_seeded_plan_is_pinned() {
    let catalog = builtin_catalog().unwrap();
    let plan = generate_meal_plan(
        &catalog,
        &reference_target(),
        DietPreference::Vegetarian,
        RegionPreference::AllRegions,
        1,
    )
    .unwrap();

    let names = |slot: SlotName| -> Vec<String> {
        plan.slot(slot)
            .unwrap()
            .foods
            .iter()
            .map(|f| f.name.clone())
            .collect()
    };
    let serving = |slot: SlotName, index: usize| plan.slot(slot).unwrap().foods[index].serving_g;

    assert_eq!(names(SlotName::Breakfast), vec!["Raita", "Lassi"]);
    assert_float_absolute_eq!(serving(SlotName::Breakfast, 0), 200.0, 1e-9);
    assert_float_absolute_eq!(serving(SlotName::Breakfast, 1), 200.0, 1e-9);

    assert_eq!(names(SlotName::MorningSnack), vec!["Peanuts"]);
    assert_float_absolute_eq!(serving(SlotName::MorningSnack, 0), 44.0, 1e-9);

    assert_eq!(
        names(SlotName::Lunch),
        vec!["Oats Porridge", "Dal Tadka", "Paneer"]
    );
    assert_float_absolute_eq!(serving(SlotName::Lunch, 2), 175.0, 1e-9);

    assert_eq!(names(SlotName::Dinner), vec!["Oats Porridge", "Sambar"]);
    assert_eq!(names(SlotName::EveningSnack).len(), 1);

    assert_float_absolute_eq!(plan.daily_totals.calories, 1895.0, 1e-9);
}
