use dialoguer::{Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::profile::{AGE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::models::{
    ActivityLevel, DietPreference, Gender, Goal, RegionPreference, UserProfile,
};

/// Prompt for a number, re-prompting until it parses and lies in range.
fn prompt_number<T>(prompt: &str, default: T, range: (T, T)) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + Copy + std::fmt::Display,
{
    loop {
        let input: String = Input::new()
            .with_prompt(format!("{} ({}-{})", prompt, range.0, range.1))
            .default(default.to_string())
            .interact_text()?;

        match input.trim().parse::<T>() {
            Ok(value) if value >= range.0 && value <= range.1 => return Ok(value),
            Ok(_) => println!("Please enter a value between {} and {}.", range.0, range.1),
            Err(_) => println!("'{}' is not a number.", input.trim()),
        }
    }
}

/// Map a `Select` index back onto the option list it was built from.
fn selected<T: Copy>(options: &[T], index: usize, what: &str) -> Result<T> {
    options
        .get(index)
        .copied()
        .ok_or_else(|| PlannerError::InvalidInput(format!("invalid {} selection", what)))
}

/// Collect a biometric profile interactively.
pub fn prompt_profile() -> Result<UserProfile> {
    let age = prompt_number("Age (years)", 30u32, (*AGE_RANGE.start(), *AGE_RANGE.end()))?;

    let gender_idx = Select::new()
        .with_prompt("Gender")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;
    let gender = if gender_idx == 0 {
        Gender::Male
    } else {
        Gender::Female
    };

    let weight = prompt_number(
        "Weight (kg)",
        70.0f64,
        (*WEIGHT_RANGE_KG.start(), *WEIGHT_RANGE_KG.end()),
    )?;
    let height = prompt_number(
        "Height (cm)",
        170.0f64,
        (*HEIGHT_RANGE_CM.start(), *HEIGHT_RANGE_CM.end()),
    )?;

    let activity_labels: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.description()).collect();
    let activity_idx = Select::new()
        .with_prompt("Activity level")
        .items(&activity_labels)
        .default(2)
        .interact()?;

    let goal_labels: Vec<String> = Goal::ALL.iter().map(|g| g.to_string()).collect();
    let goal_idx = Select::new()
        .with_prompt("Goal")
        .items(&goal_labels)
        .default(1)
        .interact()?;

    UserProfile::new(
        age,
        gender,
        weight,
        height,
        selected(&ActivityLevel::ALL, activity_idx, "activity level")?,
        selected(&Goal::ALL, goal_idx, "goal")?,
    )
}

/// Prompt for dietary and regional preferences.
pub fn prompt_preferences() -> Result<(DietPreference, RegionPreference)> {
    let diet_labels: Vec<String> = DietPreference::ALL.iter().map(|d| d.to_string()).collect();
    let diet_idx = Select::new()
        .with_prompt("Dietary preference")
        .items(&diet_labels)
        .default(0)
        .interact()?;

    let region_labels: Vec<String> = RegionPreference::ALL.iter().map(|r| r.to_string()).collect();
    let region_idx = Select::new()
        .with_prompt("Regional preference")
        .items(&region_labels)
        .default(0)
        .interact()?;

    Ok((
        selected(&DietPreference::ALL, diet_idx, "diet")?,
        selected(&RegionPreference::ALL, region_idx, "region")?,
    ))
}
