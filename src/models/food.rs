use std::fmt;

use serde::{Deserialize, Serialize};

/// Food category as it appears in the catalog.
///
/// The known categories drive the per-slot allow-lists; any other label is
/// kept verbatim in `Other` so a catalog can carry extra groupings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Grains,
    Lentils,
    Vegetables,
    Dairy,
    NonVeg,
    SouthIndian,
    Fruits,
    Nuts,
    Snacks,
    Beverages,
    Other(String),
}

impl Category {
    pub fn label(&self) -> &str {
        match self {
            Category::Grains => "Grains",
            Category::Lentils => "Lentils",
            Category::Vegetables => "Vegetables",
            Category::Dairy => "Dairy",
            Category::NonVeg => "Non-Veg",
            Category::SouthIndian => "South Indian",
            Category::Fruits => "Fruits",
            Category::Nuts => "Nuts",
            Category::Snacks => "Snacks",
            Category::Beverages => "Beverages",
            Category::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.trim() {
            "Grains" => Category::Grains,
            "Lentils" => Category::Lentils,
            "Vegetables" => Category::Vegetables,
            "Dairy" => Category::Dairy,
            "Non-Veg" => Category::NonVeg,
            "South Indian" => Category::SouthIndian,
            "Fruits" => Category::Fruits,
            "Nuts" => Category::Nuts,
            "Snacks" => Category::Snacks,
            "Beverages" => Category::Beverages,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Regional cuisine tag. `All` marks region-agnostic foods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    All,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Region::North => "North",
            Region::South => "South",
            Region::All => "All",
        };
        f.write_str(label)
    }
}

/// Nutrition per 100g of a food.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionPer100g {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
}

impl NutritionPer100g {
    /// Linear scaling of every nutrient to a serving of `grams`.
    pub fn scaled(&self, grams: f64) -> NutritionPer100g {
        let factor = grams / 100.0;
        NutritionPer100g {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
            fiber_g: self.fiber_g * factor,
        }
    }

    pub fn is_non_negative(&self) -> bool {
        [
            self.calories,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.fiber_g,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// A catalog food. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    pub category: Category,
    pub region: Region,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    #[serde(flatten)]
    pub nutrition: NutritionPer100g,
}

impl Food {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
