pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use catalog::{CachedCatalog, FoodCatalog, InMemoryCatalog};
pub use error::{PlanError, Result};
pub use models::{FoodId, LineItem, LineItemId, Macros, Meal, MealPlan, ReferenceFood, Totals};
