pub mod prompts;
pub mod render;

pub use prompts::{parse_quantity, prompt_quantity, prompt_select_food, prompt_yes_no, suggest_names};
pub use render::{display_food_list, display_meal_plan, format_totals};
