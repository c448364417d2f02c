use std::collections::HashSet;
use std::sync::OnceLock;

use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{Category, Food};

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// How many near matches to offer when a lookup misses.
pub const FUZZY_SUGGESTION_LIMIT: usize = 5;

static GLOBAL_CATALOG: OnceLock<FoodCatalog> = OnceLock::new();

/// Read-only table of foods, kept in source row order.
///
/// Row order is part of the contract: candidate lists built from the catalog
/// inherit it, which keeps seeded selection reproducible.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    foods: Vec<Food>,
}

impl FoodCatalog {
    /// Build a catalog, rejecting empty tables, duplicate names and negative
    /// nutrition values.
    pub fn new(foods: Vec<Food>) -> Result<Self> {
        if foods.is_empty() {
            return Err(PlannerError::CatalogLoad(
                "catalog contains no foods".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for food in &foods {
            if food.name.trim().is_empty() {
                return Err(PlannerError::CatalogLoad(
                    "food with an empty name".to_string(),
                ));
            }
            if !seen.insert(food.key()) {
                return Err(PlannerError::CatalogLoad(format!(
                    "duplicate food name '{}'",
                    food.name
                )));
            }
            if !food.nutrition.is_non_negative() {
                return Err(PlannerError::CatalogLoad(format!(
                    "'{}' has a negative or non-finite nutrition value",
                    food.name
                )));
            }
        }

        Ok(Self { foods })
    }

    /// Install this catalog as the process-wide instance. Only the first call
    /// succeeds; the catalog is never replaced or mutated afterwards.
    pub fn install_global(self) -> Result<&'static FoodCatalog> {
        let count = self.len();
        GLOBAL_CATALOG.set(self).map_err(|_| {
            PlannerError::CatalogLoad("global catalog is already installed".to_string())
        })?;
        tracing::info!(foods = count, "food catalog installed");
        GLOBAL_CATALOG
            .get()
            .ok_or_else(|| PlannerError::CatalogLoad("global catalog missing".to_string()))
    }

    /// The process-wide catalog, if one has been installed.
    pub fn global() -> Option<&'static FoodCatalog> {
        GLOBAL_CATALOG.get()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Food> {
        self.foods.iter()
    }

    /// Get a food by name (case-insensitive).
    pub fn get_food(&self, name: &str) -> Option<&Food> {
        let key = name.trim().to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    /// Foods whose names resemble `query`, best match first.
    pub fn search(&self, query: &str) -> Vec<(&Food, f64)> {
        let query = query.trim().to_lowercase();
        let mut candidates: Vec<(&Food, f64)> = self
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &query)))
            .filter(|(f, score)| *score > FUZZY_MATCH_THRESHOLD || f.key().contains(&query))
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen: Vec<&Category> = Vec::new();
        for food in &self.foods {
            if !seen.contains(&&food.category) {
                seen.push(&food.category);
            }
        }
        seen
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
