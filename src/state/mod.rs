mod persistence;
mod stored;

pub use persistence::{load_plan, new_plan_file, restore_line_item, restore_plan, save_plan};
pub use stored::{StoredLineItem, StoredMeal, StoredPlan};
