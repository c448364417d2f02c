use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::catalog::store::FoodCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{Category, Food, NutritionPer100g, Region};

/// Columns every catalog source must carry.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "name",
    "category",
    "region",
    "vegetarian",
    "vegan",
    "calories_per_100g",
    "protein_g",
    "carbs_g",
    "fat_g",
    "fiber_g",
];

const BUILTIN_CATALOG: &str = include_str!("../../data/foods.csv");

/// One catalog row as stored on disk.
#[derive(Debug, Deserialize)]
struct FoodRow {
    name: String,
    category: String,
    region: String,
    #[serde(deserialize_with = "deserialize_flag")]
    vegetarian: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    vegan: bool,
    calories_per_100g: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    fiber_g: f64,
}

impl FoodRow {
    fn into_food(self) -> Result<Food> {
        let region = parse_region(&self.region).ok_or_else(|| {
            PlannerError::CatalogLoad(format!(
                "'{}' has unknown region '{}' (expected North, South or All)",
                self.name, self.region
            ))
        })?;

        Ok(Food {
            name: self.name.trim().to_string(),
            category: Category::from(self.category),
            region,
            is_vegetarian: self.vegetarian,
            is_vegan: self.vegan,
            nutrition: NutritionPer100g {
                calories: self.calories_per_100g,
                protein_g: self.protein_g,
                carbs_g: self.carbs_g,
                fat_g: self.fat_g,
                fiber_g: self.fiber_g,
            },
        })
    }
}

fn parse_region(raw: &str) -> Option<Region> {
    match raw.trim().to_lowercase().as_str() {
        "north" => Some(Region::North),
        "south" => Some(Region::South),
        "all" => Some(Region::All),
        _ => None,
    }
}

/// Accepts the spellings spreadsheet exports use for booleans.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean flag, found '{}'",
            other
        ))),
    }
}

/// Parse a catalog from CSV. Any schema violation fails the whole load.
pub fn parse_catalog<R: Read>(reader: R) -> Result<FoodCatalog> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(PlannerError::CatalogLoad(format!(
            "missing column(s): {}",
            missing.join(", ")
        )));
    }

    let mut foods = Vec::new();
    for row in rdr.deserialize::<FoodRow>() {
        let row = row.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            PlannerError::CatalogLoad(format!("line {}: {}", line, e))
        })?;
        foods.push(row.into_food()?);
    }

    FoodCatalog::new(foods)
}

/// Load a catalog from a CSV file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        PlannerError::CatalogLoad(format!("cannot open {}: {}", path.display(), e))
    })?;
    let catalog = parse_catalog(file)?;
    tracing::debug!(path = %path.display(), foods = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// The catalog bundled with the crate.
pub fn builtin_catalog() -> Result<FoodCatalog> {
    parse_catalog(BUILTIN_CATALOG.as_bytes())
}
