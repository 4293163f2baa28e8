pub mod aggregation;
pub mod calculations;
pub mod constants;
pub mod editing;
pub mod invariants;

pub use aggregation::{recompute_meal_totals, recompute_plan_totals, sum_line_items, sum_meals};
pub use calculations::{
    check_quantity, create_line_item, rescale_line_item, round_to, scale_nutrients,
};
pub use constants::*;
pub use editing::{
    add_item_to_plan, add_line_item, add_meal, remove_item_from_plan, remove_line_item,
    reorder_items_in_plan, reorder_line_items, rescale_item_in_meal, rescale_item_in_plan,
};
pub use invariants::{check_line_item, check_meal, check_plan};
