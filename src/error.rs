use thiserror::Error;

use crate::models::LineItemId;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid quantity: {0} (must be a finite number greater than zero)")]
    InvalidQuantity(f64),

    #[error("Invalid reference food '{id}': {reason}")]
    InvalidReferenceFood { id: String, reason: String },

    #[error("Unknown line item: {0}")]
    UnknownLineItem(LineItemId),

    #[error("Unknown meal: {0}")]
    UnknownMeal(String),

    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Inconsistent plan: {0}")]
    Inconsistent(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
