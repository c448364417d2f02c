use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{MealPlan, PlanVariation};
use crate::planner::{compare_to_target, macro_distribution};

/// Plan plus its target comparison, as written to JSON.
fn plan_report(plan: &MealPlan) -> Result<serde_json::Value> {
    Ok(serde_json::json!({
        "plan": serde_json::to_value(plan)?,
        "comparison": serde_json::to_value(compare_to_target(plan))?,
        "macro_distribution": serde_json::to_value(macro_distribution(plan))?,
    }))
}

/// Write a plan and its analysis to a JSON file.
pub fn write_plan_json(plan: &MealPlan, path: &Path) -> Result<()> {
    let json = plan_report(plan)?;
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Write a variation set to a JSON file.
pub fn write_variations_json(variations: &[PlanVariation], path: &Path) -> Result<()> {
    let entries = variations
        .iter()
        .map(|v| {
            Ok(serde_json::json!({
                "variation_number": v.variation_number,
                "report": plan_report(&v.meal_plan)?,
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&entries)?.as_bytes())?;
    Ok(())
}

/// Write one row per selected food to a CSV file.
pub fn write_plan_csv(plan: &MealPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "slot",
        "food",
        "category",
        "serving_g",
        "calories",
        "protein_g",
        "carbs_g",
        "fat_g",
        "fiber_g",
    ])?;

    for slot in plan.slots() {
        for food in &slot.foods {
            wtr.write_record([
                slot.name.key().to_string(),
                food.name.clone(),
                food.category.to_string(),
                format!("{:.0}", food.serving_g),
                format!("{:.1}", food.nutrients.calories),
                format!("{:.1}", food.nutrients.protein_g),
                format!("{:.1}", food.nutrients.carbs_g),
                format!("{:.1}", food.nutrients.fat_g),
                format!("{:.1}", food.nutrients.fiber_g),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Category, MealSlot, NutrientTotals, NutritionTarget, SelectedFood, SlotName,
    };
    use tempfile::NamedTempFile;

    fn sample_plan() -> MealPlan {
        let food = SelectedFood {
            name: "Idli".to_string(),
            category: Category::SouthIndian,
            serving_g: 150.0,
            target_calories: 200.0,
            nutrients: NutrientTotals {
                calories: 198.0,
                protein_g: 6.6,
                carbs_g: 40.7,
                fat_g: 0.6,
                fiber_g: 2.3,
            },
        };
        MealPlan::new(
            2,
            vec![MealSlot::new(SlotName::Breakfast, 200, vec![food])],
            NutritionTarget {
                calories: 800,
                protein_g: 50,
                carbs_g: 90,
                fat_g: 26,
            },
        )
    }

    #[test]
    fn test_plan_json_contains_plan_and_comparison() {
        let file = NamedTempFile::new().unwrap();
        write_plan_json(&sample_plan(), file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["plan"]["variation"], 2);
        assert_eq!(
            value["plan"]["meals"]["breakfast"]["foods"][0]["name"],
            "Idli"
        );
        assert_eq!(value["comparison"][0]["nutrient"], "Calories");

        let plan: MealPlan = serde_json::from_value(value["plan"].clone()).unwrap();
        assert_eq!(plan, sample_plan());
    }

    #[test]
    fn test_variations_json() {
        let file = NamedTempFile::new().unwrap();
        let variations = vec![PlanVariation {
            variation_number: 2,
            meal_plan: sample_plan(),
        }];
        write_variations_json(&variations, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value[0]["variation_number"], 2);
    }

    #[test]
    fn test_plan_csv_rows() {
        let file = NamedTempFile::new().unwrap();
        write_plan_csv(&sample_plan(), file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "breakfast");
        assert_eq!(&rows[0][1], "Idli");
        assert_eq!(&rows[0][2], "South Indian");
        assert_eq!(&rows[0][3], "150");
    }
}
