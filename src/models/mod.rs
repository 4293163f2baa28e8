mod food;
mod ids;
mod line_item;
mod plan;
mod totals;

pub use food::{FoodId, Macros, Nutrients, ReferenceFood};
pub use ids::{LineItemId, MealId, PlanId};
pub use line_item::LineItem;
pub use plan::{Meal, MealPlan};
pub use totals::Totals;
