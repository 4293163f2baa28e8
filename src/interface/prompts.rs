use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::ReferenceFood;

/// Names scoring above this are offered as "did you mean" hints.
const SUGGESTION_THRESHOLD: f64 = 0.8;
const MAX_SUGGESTIONS: usize = 5;

/// Parse a quantity typed by the user.
pub fn parse_quantity(input: &str) -> Result<f64> {
    input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a number", input.trim())))
}

/// Prompt for how many reference portions of `food` to add.
pub fn prompt_quantity(food: &ReferenceFood) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "How many portions of '{}' ({})?",
            food.name, food.reference_portion_label
        ))
        .default("1".to_string())
        .interact_text()?;

    parse_quantity(&input)
}

/// Let the user pick one of several matching foods.
pub fn prompt_select_food(matches: &[ReferenceFood]) -> Result<Option<ReferenceFood>> {
    let mut options: Vec<String> = matches.iter().map(ReferenceFood::summary).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which food?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(matches.get(selection).cloned())
}

/// Close names for a query that matched nothing.
pub fn suggest_names<'a>(foods: impl Iterator<Item = &'a ReferenceFood>, query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    let mut scored: Vec<(String, f64)> = foods
        .map(|f| (f.name.clone(), jaro_winkler(&f.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(name, _)| name)
        .collect()
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
