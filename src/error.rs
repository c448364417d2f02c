use thiserror::Error;

use crate::models::{DietPreference, RegionPreference};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error(
        "No foods available for {diet} / {region}. Try relaxing the dietary or regional preference."
    )]
    NoFoodsAvailable {
        diet: DietPreference,
        region: RegionPreference,
    },

    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
