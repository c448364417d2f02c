use crate::catalog::FoodCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{DietPreference, Food, Region, RegionPreference};

/// Whether a food fits the dietary preference.
///
/// Non-vegetarian diets also eat vegetarian foods, so they keep everything.
pub fn matches_diet(food: &Food, diet: DietPreference) -> bool {
    match diet {
        DietPreference::Vegetarian => food.is_vegetarian,
        DietPreference::Vegan => food.is_vegan,
        DietPreference::NonVegetarian => true,
    }
}

/// Whether a food fits the regional preference. Region-agnostic (`All`)
/// foods always fit.
pub fn matches_region(food: &Food, region: RegionPreference) -> bool {
    match region {
        RegionPreference::AllRegions => true,
        RegionPreference::NorthIndian => matches!(food.region, Region::North | Region::All),
        RegionPreference::SouthIndian => matches!(food.region, Region::South | Region::All),
    }
}

/// Eligible subset of the catalog, in catalog order.
///
/// Fails with `NoFoodsAvailable` when nothing survives the filters.
pub fn filter_foods(
    catalog: &FoodCatalog,
    diet: DietPreference,
    region: RegionPreference,
) -> Result<Vec<&Food>> {
    let eligible: Vec<&Food> = catalog
        .iter()
        .filter(|f| matches_diet(f, diet))
        .filter(|f| matches_region(f, region))
        .collect();

    if eligible.is_empty() {
        tracing::warn!(%diet, %region, "no foods match the preferences");
        return Err(PlannerError::NoFoodsAvailable { diet, region });
    }

    tracing::debug!(%diet, %region, eligible = eligible.len(), "catalog filtered");
    Ok(eligible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NutritionPer100g};

    fn food(name: &str, region: Region, veg: bool, vegan: bool) -> Food {
        Food {
            name: name.to_string(),
            category: Category::Grains,
            region,
            is_vegetarian: veg,
            is_vegan: vegan,
            nutrition: NutritionPer100g {
                calories: 100.0,
                ..Default::default()
            },
        }
    }

    fn catalog() -> FoodCatalog {
        FoodCatalog::new(vec![
            food("Roti", Region::North, true, true),
            food("Paneer", Region::North, true, false),
            food("Idli", Region::South, true, true),
            food("Fish Curry", Region::South, false, false),
            food("Rice", Region::All, true, true),
            food("Egg", Region::All, false, false),
        ])
        .unwrap()
    }

    fn names(foods: &[&Food]) -> Vec<String> {
        foods.iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_non_vegetarian_keeps_everything() {
        let catalog = catalog();
        let foods =
            filter_foods(&catalog, DietPreference::NonVegetarian, RegionPreference::AllRegions)
                .unwrap();
        assert_eq!(foods.len(), 6);
    }

    #[test]
    fn test_vegan_filter() {
        let catalog = catalog();
        let foods =
            filter_foods(&catalog, DietPreference::Vegan, RegionPreference::AllRegions).unwrap();
        assert!(foods.iter().all(|f| f.is_vegan));
        assert_eq!(names(&foods), vec!["Roti", "Idli", "Rice"]);
    }

    #[test]
    fn test_vegetarian_filter() {
        let catalog = catalog();
        let foods = filter_foods(
            &catalog,
            DietPreference::Vegetarian,
            RegionPreference::AllRegions,
        )
        .unwrap();
        assert!(foods.iter().all(|f| f.is_vegetarian));
        assert_eq!(foods.len(), 4);
    }

    #[test]
    fn test_north_region_keeps_all_tagged() {
        let catalog = catalog();
        let foods = filter_foods(
            &catalog,
            DietPreference::NonVegetarian,
            RegionPreference::NorthIndian,
        )
        .unwrap();
        assert!(foods.iter().all(|f| f.region != Region::South));
        assert_eq!(names(&foods), vec!["Roti", "Paneer", "Rice", "Egg"]);
    }

    #[test]
    fn test_combined_filters() {
        let catalog = catalog();
        let foods = filter_foods(
            &catalog,
            DietPreference::Vegan,
            RegionPreference::SouthIndian,
        )
        .unwrap();
        assert_eq!(names(&foods), vec!["Idli", "Rice"]);
    }

    #[test]
    fn test_empty_result_is_error() {
        let catalog = FoodCatalog::new(vec![food("Fish Curry", Region::South, false, false)])
            .unwrap();
        let result = filter_foods(&catalog, DietPreference::Vegan, RegionPreference::AllRegions);
        assert!(matches!(
            result,
            Err(PlannerError::NoFoodsAvailable {
                diet: DietPreference::Vegan,
                ..
            })
        ));
    }
}
