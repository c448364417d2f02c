use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Accepted biometric bounds.
pub const AGE_RANGE: RangeInclusive<u32> = 15..=100;
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=200.0;
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 120.0..=220.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Case-insensitive; anything other than "male" falls back to `Female`,
    /// matching the female branch of the BMR formula.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            tracing::debug!(label, "gender label is not 'male', using female BMR constant");
            Gender::Female
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

/// The five ordinal activity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Long form shown in prompts.
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "Lightly active (light exercise 1-3 days/week)",
            ActivityLevel::ModeratelyActive => {
                "Moderately active (moderate exercise 3-5 days/week)"
            }
            ActivityLevel::VeryActive => "Very active (hard exercise 6-7 days a week)",
            ActivityLevel::ExtraActive => "Extra active (very hard exercise & physical job)",
        }
    }

    /// Lenient parse: accepts short names ("moderately-active",
    /// "ModeratelyActive", "moderate") and the long descriptions. Unrecognized
    /// text degrades to `Sedentary`, the lowest multiplier.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();

        let level = if normalized.starts_with("sedentary") {
            Some(ActivityLevel::Sedentary)
        } else if normalized.starts_with("light") {
            Some(ActivityLevel::LightlyActive)
        } else if normalized.starts_with("moderate") {
            Some(ActivityLevel::ModeratelyActive)
        } else if normalized.starts_with("very") {
            Some(ActivityLevel::VeryActive)
        } else if normalized.starts_with("extra") {
            Some(ActivityLevel::ExtraActive)
        } else {
            None
        };

        level.unwrap_or_else(|| {
            tracing::debug!(label, "unrecognized activity level, using Sedentary");
            ActivityLevel::Sedentary
        })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::Maintenance, Goal::MuscleGain];

    /// Lenient parse; unrecognized text degrades to `Maintenance` (no adjustment).
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();

        match normalized.as_str() {
            "weightloss" | "loss" | "cut" => Goal::WeightLoss,
            "maintenance" | "maintain" => Goal::Maintenance,
            "musclegain" | "gain" | "bulk" => Goal::MuscleGain,
            _ => {
                tracing::debug!(label, "unrecognized goal, using Maintenance");
                Goal::Maintenance
            }
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::Maintenance => "Maintenance",
            Goal::MuscleGain => "Muscle Gain",
        };
        f.write_str(label)
    }
}

/// Biometric profile. Built through [`UserProfile::new`], which rejects
/// out-of-range values before they reach the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl UserProfile {
    pub fn new(
        age: u32,
        gender: Gender,
        weight_kg: f64,
        height_cm: f64,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Result<Self> {
        let profile = Self {
            age,
            gender,
            weight_kg,
            height_cm,
            activity_level,
            goal,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Range check on age, weight and height.
    pub fn validate(&self) -> Result<()> {
        if !AGE_RANGE.contains(&self.age) {
            return Err(PlannerError::InvalidProfile(format!(
                "age {} is outside {}-{} years",
                self.age,
                AGE_RANGE.start(),
                AGE_RANGE.end()
            )));
        }
        if !WEIGHT_RANGE_KG.contains(&self.weight_kg) {
            return Err(PlannerError::InvalidProfile(format!(
                "weight {} kg is outside {}-{} kg",
                self.weight_kg,
                WEIGHT_RANGE_KG.start(),
                WEIGHT_RANGE_KG.end()
            )));
        }
        if !HEIGHT_RANGE_CM.contains(&self.height_cm) {
            return Err(PlannerError::InvalidProfile(format!(
                "height {} cm is outside {}-{} cm",
                self.height_cm,
                HEIGHT_RANGE_CM.start(),
                HEIGHT_RANGE_CM.end()
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietPreference {
    Vegetarian,
    NonVegetarian,
    Vegan,
}

impl DietPreference {
    pub const ALL: [DietPreference; 3] = [
        DietPreference::Vegetarian,
        DietPreference::NonVegetarian,
        DietPreference::Vegan,
    ];
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::NonVegetarian => "Non-Vegetarian",
            DietPreference::Vegan => "Vegan",
        };
        f.write_str(label)
    }
}

impl FromStr for DietPreference {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();

        match normalized.as_str() {
            "vegetarian" | "veg" => Ok(DietPreference::Vegetarian),
            "nonvegetarian" | "nonveg" => Ok(DietPreference::NonVegetarian),
            "vegan" => Ok(DietPreference::Vegan),
            _ => Err(PlannerError::InvalidInput(format!(
                "unknown dietary preference '{}' (expected vegetarian, non-vegetarian or vegan)",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionPreference {
    AllRegions,
    NorthIndian,
    SouthIndian,
}

impl RegionPreference {
    pub const ALL: [RegionPreference; 3] = [
        RegionPreference::AllRegions,
        RegionPreference::NorthIndian,
        RegionPreference::SouthIndian,
    ];
}

impl fmt::Display for RegionPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RegionPreference::AllRegions => "All Regions",
            RegionPreference::NorthIndian => "North Indian",
            RegionPreference::SouthIndian => "South Indian",
        };
        f.write_str(label)
    }
}

impl FromStr for RegionPreference {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();

        match normalized.as_str() {
            "all" | "allregions" => Ok(RegionPreference::AllRegions),
            "north" | "northindian" => Ok(RegionPreference::NorthIndian),
            "south" | "southindian" => Ok(RegionPreference::SouthIndian),
            _ => Err(PlannerError::InvalidInput(format!(
                "unknown region preference '{}' (expected all, north-indian or south-indian)",
                s
            ))),
        }
    }
}
