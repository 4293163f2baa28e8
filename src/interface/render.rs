use crate::models::{Meal, MealPlan, ReferenceFood, Totals};

/// One-line macro summary used by meal and plan footers.
pub fn format_totals(totals: &Totals) -> String {
    let mut line = format!(
        "{:.0} g | {:.0} kcal | P {:.1} g | C {:.1} g | F {:.1} g",
        totals.weight_grams,
        totals.energy_kcal,
        totals.protein_grams,
        totals.carb_grams,
        totals.fat_grams
    );
    if totals.fiber_grams > 0.0 {
        line.push_str(&format!(" | Fiber {:.1} g", totals.fiber_grams));
    }
    if totals.sodium_milligrams > 0.0 {
        line.push_str(&format!(" | Na {:.0} mg", totals.sodium_milligrams));
    }
    line
}

fn display_meal(meal: &Meal) {
    println!("--- {} ---", meal.name());

    if meal.is_empty() {
        println!("  (no items)");
        println!();
        return;
    }

    let width = meal
        .line_items()
        .iter()
        .map(|i| i.food_name().len())
        .max()
        .unwrap_or(10);

    for (i, item) in meal.line_items().iter().enumerate() {
        let c = item.consumed();
        println!(
            "{:>3}. {:<width$}  x{:<5} {:>5.0} g {:>5.0} kcal  P {:>5.1}  C {:>5.1}  F {:>5.1}",
            i + 1,
            item.food_name(),
            item.quantity(),
            c.weight_grams,
            c.macros.energy_kcal,
            c.macros.protein_grams,
            c.macros.carb_grams,
            c.macros.fat_grams,
            width = width
        );
    }
    println!("     Total: {}", format_totals(meal.totals()));
    println!();
}

/// Display a plan meal by meal, then the plan totals.
pub fn display_meal_plan(plan: &MealPlan) {
    println!();
    println!("=== {} ===", plan.label());
    println!();

    if plan.meals().is_empty() {
        println!("No meals yet. Use 'add-meal' to create one.");
        return;
    }

    for meal in plan.meals() {
        display_meal(meal);
    }

    println!("--- Summary ---");
    println!("Meals: {}", plan.meals().len());
    println!(
        "Items: {}",
        plan.meals().iter().map(Meal::len).sum::<usize>()
    );
    println!("Day total: {}", format_totals(plan.totals()));
    println!();
}

/// Display catalog entries with their ids.
pub fn display_food_list(foods: &[ReferenceFood], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!("  [{}] {}", food.id, food.summary());
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_totals_hides_empty_secondary() {
        let totals = Totals {
            weight_grams: 240.0,
            energy_kcal: 289.0,
            protein_grams: 31.6,
            carb_grams: 30.0,
            fat_grams: 4.0,
            ..Default::default()
        };
        assert_eq!(
            format_totals(&totals),
            "240 g | 289 kcal | P 31.6 g | C 30.0 g | F 4.0 g"
        );

        let salty = Totals {
            sodium_milligrams: 410.0,
            ..totals
        };
        assert!(format_totals(&salty).ends_with("| Na 410 mg"));
    }
}
