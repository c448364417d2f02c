use std::collections::BTreeMap;
use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::models::food::Category;

/// Round to one decimal place (half away from zero).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Daily calorie and macro targets derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTarget {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

impl NutritionTarget {
    /// Calories implied by the macro grams (4/4/9 kcal per gram).
    pub fn macro_calories(&self) -> u32 {
        self.protein_g * 4 + self.carbs_g * 4 + self.fat_g * 9
    }
}

/// Aggregate of the five tracked nutrients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
}

impl NutrientTotals {
    pub fn rounded(&self) -> NutrientTotals {
        NutrientTotals {
            calories: round1(self.calories),
            protein_g: round1(self.protein_g),
            carbs_g: round1(self.carbs_g),
            fat_g: round1(self.fat_g),
            fiber_g: round1(self.fiber_g),
        }
    }

    /// Element-wise sum, rounded to one decimal.
    pub fn sum<'a, I>(items: I) -> NutrientTotals
    where
        I: IntoIterator<Item = &'a NutrientTotals>,
    {
        items
            .into_iter()
            .fold(NutrientTotals::default(), |acc, t| acc + *t)
            .rounded()
    }
}

impl Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, other: NutrientTotals) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories + other.calories,
            protein_g: self.protein_g + other.protein_g,
            carbs_g: self.carbs_g + other.carbs_g,
            fat_g: self.fat_g + other.fat_g,
            fiber_g: self.fiber_g + other.fiber_g,
        }
    }
}

/// One food placed in a slot with its serving and resulting nutrition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedFood {
    pub name: String,
    pub category: Category,
    /// Serving in whole grams, within [25, 200].
    pub serving_g: f64,
    /// Calories this pick was sized against.
    pub target_calories: f64,
    #[serde(flatten)]
    pub nutrients: NutrientTotals,
}

/// The five meal periods, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotName {
    Breakfast,
    MorningSnack,
    Lunch,
    EveningSnack,
    Dinner,
}

impl SlotName {
    pub const ALL: [SlotName; 5] = [
        SlotName::Breakfast,
        SlotName::MorningSnack,
        SlotName::Lunch,
        SlotName::EveningSnack,
        SlotName::Dinner,
    ];

    /// Machine key ("morning_snack").
    pub fn key(&self) -> &'static str {
        match self {
            SlotName::Breakfast => "breakfast",
            SlotName::MorningSnack => "morning_snack",
            SlotName::Lunch => "lunch",
            SlotName::EveningSnack => "evening_snack",
            SlotName::Dinner => "dinner",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SlotName::Breakfast => "Breakfast",
            SlotName::MorningSnack => "Morning Snack",
            SlotName::Lunch => "Lunch",
            SlotName::EveningSnack => "Evening Snack",
            SlotName::Dinner => "Dinner",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSlot {
    pub name: SlotName,
    pub calorie_budget: u32,
    pub foods: Vec<SelectedFood>,
    pub totals: NutrientTotals,
}

impl MealSlot {
    pub fn new(name: SlotName, calorie_budget: u32, foods: Vec<SelectedFood>) -> Self {
        let totals = NutrientTotals::sum(foods.iter().map(|f| &f.nutrients));
        Self {
            name,
            calorie_budget,
            foods,
            totals,
        }
    }
}

/// A full day: five slots, their combined totals and the target they aimed at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub variation: u32,
    pub meals: BTreeMap<SlotName, MealSlot>,
    pub daily_totals: NutrientTotals,
    pub target: NutritionTarget,
}

impl MealPlan {
    pub fn new(variation: u32, slots: Vec<MealSlot>, target: NutritionTarget) -> Self {
        let daily_totals = NutrientTotals::sum(slots.iter().map(|s| &s.totals));
        let meals = slots.into_iter().map(|s| (s.name, s)).collect();
        Self {
            variation,
            meals,
            daily_totals,
            target,
        }
    }

    pub fn slot(&self, name: SlotName) -> Option<&MealSlot> {
        self.meals.get(&name)
    }

    /// Slots in serving order.
    pub fn slots(&self) -> impl Iterator<Item = &MealSlot> {
        self.meals.values()
    }

    pub fn food_count(&self) -> usize {
        self.meals.values().map(|s| s.foods.len()).sum()
    }
}

/// One entry of a variation set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanVariation {
    pub variation_number: u32,
    pub meal_plan: MealPlan,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(calories: f64, protein: f64) -> NutrientTotals {
        NutrientTotals {
            calories,
            protein_g: protein,
            carbs_g: 1.0,
            fat_g: 0.5,
            fiber_g: 0.2,
        }
    }

    fn food(name: &str, calories: f64) -> SelectedFood {
        SelectedFood {
            name: name.to_string(),
            category: Category::Grains,
            serving_g: 100.0,
            target_calories: calories,
            nutrients: totals(calories, 3.3),
        }
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(12.36), 12.4);
        assert_eq!(round1(0.04), 0.0);
    }

    #[test]
    fn test_slot_totals_sum_foods() {
        let slot = MealSlot::new(
            SlotName::Lunch,
            500,
            vec![food("Rice", 210.4), food("Dal", 140.3)],
        );
        assert!((slot.totals.calories - 350.7).abs() < 1e-9);
        assert!((slot.totals.protein_g - 6.6).abs() < 1e-9);
        assert!((slot.totals.fiber_g - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_plan_daily_totals_and_order() {
        let target = NutritionTarget {
            calories: 2000,
            protein_g: 125,
            carbs_g: 225,
            fat_g: 66,
        };
        let plan = MealPlan::new(
            1,
            vec![
                MealSlot::new(SlotName::Dinner, 400, vec![food("Roti", 300.0)]),
                MealSlot::new(SlotName::Breakfast, 500, vec![food("Idli", 250.5)]),
            ],
            target,
        );

        assert!((plan.daily_totals.calories - 550.5).abs() < 1e-9);
        let order: Vec<SlotName> = plan.slots().map(|s| s.name).collect();
        assert_eq!(order, vec![SlotName::Breakfast, SlotName::Dinner]);
        assert_eq!(plan.food_count(), 2);
    }

    #[test]
    fn test_macro_calories() {
        let target = NutritionTarget {
            calories: 2507,
            protein_g: 156,
            carbs_g: 282,
            fat_g: 83,
        };
        assert_eq!(target.macro_calories(), 156 * 4 + 282 * 4 + 83 * 9);
    }
}
