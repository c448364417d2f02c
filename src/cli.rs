use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, DietPreference, Gender, Goal, RegionPreference, UserProfile};
use crate::planner::{DEFAULT_VARIATION, DEFAULT_VARIATION_COUNT};

/// Thali planner: daily Indian meal plans sized to a personal calorie target.
#[derive(Parser, Debug)]
#[command(name = "thali")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a food catalog CSV. Defaults to the built-in catalog.
    #[arg(long, global = true, env = "THALI_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show BMI, BMR, TDEE and the daily nutrition target.
    Target {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Generate one day's meal plan.
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        preferences: PreferenceArgs,

        /// Variation number; each number gives a different reproducible plan.
        #[arg(long, default_value_t = DEFAULT_VARIATION, value_parser = clap::value_parser!(u32).range(1..))]
        variation: u32,

        /// Write the plan and its analysis to a JSON file.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write one row per selected food to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Generate several plan variations and compare them.
    Variations {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        preferences: PreferenceArgs,

        /// Number of variations to generate.
        #[arg(long, default_value_t = DEFAULT_VARIATION_COUNT, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Write the variations to a JSON file.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// List eligible foods, or look one up by name.
    Foods {
        #[command(flatten)]
        preferences: PreferenceArgs,

        /// Look up a food by name, with suggestions for near matches.
        #[arg(long)]
        search: Option<String>,
    },
}

/// Biometric profile flags. Either all of them or `--interactive`.
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Collect the profile with interactive prompts.
    #[arg(short, long)]
    pub interactive: bool,

    /// Age in years (15-100).
    #[arg(long, required_unless_present = "interactive")]
    pub age: Option<u32>,

    /// Gender (male/female).
    #[arg(long, required_unless_present = "interactive")]
    pub gender: Option<String>,

    /// Weight in kilograms (30-200).
    #[arg(long, required_unless_present = "interactive")]
    pub weight: Option<f64>,

    /// Height in centimetres (120-220).
    #[arg(long, required_unless_present = "interactive")]
    pub height: Option<f64>,

    /// Activity level: sedentary, light, moderate, very, extra.
    #[arg(long, default_value = "moderate")]
    pub activity: String,

    /// Goal: weight-loss, maintenance, muscle-gain.
    #[arg(long, default_value = "maintenance")]
    pub goal: String,
}

impl ProfileArgs {
    /// Build a validated profile from the flags.
    pub fn to_profile(&self) -> Result<UserProfile> {
        let missing = |flag: &str| PlannerError::InvalidInput(format!("--{} is required", flag));

        UserProfile::new(
            self.age.ok_or_else(|| missing("age"))?,
            Gender::from_label(self.gender.as_deref().ok_or_else(|| missing("gender"))?),
            self.weight.ok_or_else(|| missing("weight"))?,
            self.height.ok_or_else(|| missing("height"))?,
            ActivityLevel::from_label(&self.activity),
            Goal::from_label(&self.goal),
        )
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PreferenceArgs {
    /// Dietary preference: vegetarian, non-vegetarian, vegan.
    #[arg(long, default_value = "vegetarian")]
    pub diet: DietPreference,

    /// Regional preference: all, north, south.
    #[arg(long, default_value = "all")]
    pub region: RegionPreference,
}
