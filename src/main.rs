use std::path::Path;
use std::time::Duration;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use nutri_plan_rs::catalog::{load_catalog, CachedCatalog, FoodCatalog, InMemoryCatalog};
use nutri_plan_rs::cli::{Cli, Command};
use nutri_plan_rs::error::{PlanError, Result};
use nutri_plan_rs::interface::{
    display_food_list, display_meal_plan, format_totals, prompt_quantity, prompt_select_food,
    prompt_yes_no, suggest_names,
};
use nutri_plan_rs::models::{FoodId, LineItemId, Meal, MealId, MealPlan, ReferenceFood};
use nutri_plan_rs::planner::{
    add_item_to_plan, add_meal, check_plan, create_line_item, remove_item_from_plan,
    reorder_items_in_plan, rescale_item_in_plan,
};
use nutri_plan_rs::state::{load_plan, new_plan_file, save_plan};

type Catalog = CachedCatalog<InMemoryCatalog>;

fn main() {
    // Logs go to stderr so tables on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nutri_plan_rs=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let plan_path = Path::new(&cli.plan);

    if let Command::Init {
        label,
        meals,
        force,
    } = &command
    {
        return cmd_init(plan_path, label, meals, *force);
    }

    let catalog = open_catalog(&cli.catalog, Duration::from_secs(cli.cache_ttl))?;

    if let Command::Foods { query } = &command {
        return cmd_foods(&catalog, query);
    }

    if !plan_path.exists() {
        eprintln!("Meal plan file not found: {}", cli.plan);
        eprintln!("Run 'init' to create one.");
        return Ok(());
    }
    let plan = load_plan(plan_path, &catalog)?;

    match command {
        Command::AddMeal { name } => {
            let plan = add_meal(&plan, Meal::new(name.trim()));
            save_plan(plan_path, &plan)?;
            println!("Added meal '{}'.", name.trim());
            Ok(())
        }
        Command::Add {
            meal,
            food,
            quantity,
        } => cmd_add(plan_path, &plan, &catalog, &meal, &food, quantity),
        Command::Rescale {
            meal,
            item,
            quantity,
        } => {
            let meal_id = resolve_meal(&plan, &meal)?;
            let item_id = resolve_item(&plan, meal_id, &item)?;
            let plan = rescale_item_in_plan(&plan, meal_id, item_id, quantity)?;
            save_and_report(plan_path, &plan, meal_id)
        }
        Command::Remove { meal, item } => {
            let meal_id = resolve_meal(&plan, &meal)?;
            let item_id = resolve_item(&plan, meal_id, &item)?;
            let plan = remove_item_from_plan(&plan, meal_id, item_id)?;
            save_and_report(plan_path, &plan, meal_id)
        }
        Command::Move { meal, from, to } => {
            let meal_id = resolve_meal(&plan, &meal)?;
            let (from, to) = (to_index(from)?, to_index(to)?);
            let plan = reorder_items_in_plan(&plan, meal_id, from, to)?;
            save_plan(plan_path, &plan)?;
            println!("Moved item {} to position {}.", from + 1, to + 1);
            Ok(())
        }
        Command::Show => {
            display_meal_plan(&plan);
            Ok(())
        }
        Command::Check => {
            check_plan(&plan)?;
            println!(
                "Plan '{}' is consistent ({} meals).",
                plan.label(),
                plan.meals().len()
            );
            Ok(())
        }
        Command::Init { .. } | Command::Foods { .. } => Ok(()),
    }
}

/// Load the catalog, falling back to an empty one when the file is missing.
fn open_catalog(path: &str, ttl: Duration) -> Result<Catalog> {
    let inner = if Path::new(path).exists() {
        load_catalog(path)?
    } else {
        warn!(path, "food catalog not found, continuing with an empty catalog");
        InMemoryCatalog::default()
    };
    Ok(CachedCatalog::new(inner, ttl))
}

fn cmd_init(path: &Path, label: &str, meals: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        eprintln!("Meal plan file already exists: {}", path.display());
        eprintln!("Use --force to overwrite it.");
        return Ok(());
    }

    let names: Vec<String> = meals
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let plan = new_plan_file(path, label, &names)?;
    println!(
        "Created plan '{}' with {} meals at {}.",
        plan.label(),
        plan.meals().len(),
        path.display()
    );
    Ok(())
}

fn cmd_foods(catalog: &Catalog, query: &str) -> Result<()> {
    let foods: Vec<ReferenceFood> = catalog.find_by_query(query).collect();
    display_food_list(&foods, "Catalog matches");
    Ok(())
}

fn cmd_add(
    path: &Path,
    plan: &MealPlan,
    catalog: &Catalog,
    meal: &str,
    query: &str,
    quantity: Option<f64>,
) -> Result<()> {
    let meal_id = resolve_meal(plan, meal)?;

    let Some(food) = pick_food(catalog, query)? else {
        return Ok(());
    };

    let quantity = match quantity {
        Some(q) => q,
        None => prompt_quantity(&food)?,
    };

    let item = create_line_item(&food, quantity)?;
    let plan = add_item_to_plan(plan, meal_id, item)?;
    save_and_report(path, &plan, meal_id)
}

/// Resolve a food by exact id, then by name query.
fn pick_food(catalog: &Catalog, query: &str) -> Result<Option<ReferenceFood>> {
    if let Ok(food) = catalog.get_by_id(&FoodId::new(query)) {
        return Ok(Some(food));
    }

    let matches: Vec<ReferenceFood> = catalog.find_by_query(query).collect();
    match matches.len() {
        0 => {
            println!("No food matches '{}'.", query);
            let hints = suggest_names(catalog.inner().all().iter(), query);
            if !hints.is_empty() {
                println!("Did you mean: {}", hints.join(", "));
            }
            Ok(None)
        }
        1 => {
            let food = matches.into_iter().next();
            if let Some(f) = &food {
                if !prompt_yes_no(&format!("Add '{}'?", f.name), true)? {
                    return Ok(None);
                }
            }
            Ok(food)
        }
        _ => prompt_select_food(&matches),
    }
}

fn resolve_meal(plan: &MealPlan, selector: &str) -> Result<MealId> {
    plan.find_meal(selector)
        .map(Meal::id)
        .ok_or_else(|| PlanError::UnknownMeal(selector.to_string()))
}

/// Accept a 1-based position or a full line item id.
fn resolve_item(plan: &MealPlan, meal_id: MealId, selector: &str) -> Result<LineItemId> {
    let meal = plan
        .meal(meal_id)
        .ok_or_else(|| PlanError::UnknownMeal(meal_id.to_string()))?;

    if let Ok(position) = selector.trim().parse::<usize>() {
        let index = to_index(position)?;
        return meal
            .line_items()
            .get(index)
            .map(|item| item.id())
            .ok_or(PlanError::IndexOutOfRange {
                index: position,
                len: meal.len(),
            });
    }

    let id: LineItemId = selector
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a position or item id", selector)))?;
    meal.line_item(id)
        .map(|item| item.id())
        .ok_or(PlanError::UnknownLineItem(id))
}

fn to_index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| PlanError::InvalidInput("positions start at 1".to_string()))
}

fn save_and_report(path: &Path, plan: &MealPlan, meal_id: MealId) -> Result<()> {
    save_plan(path, plan)?;
    if let Some(meal) = plan.meal(meal_id) {
        println!("{}: {}", meal.name(), format_totals(meal.totals()));
    }
    println!("Day total: {}", format_totals(plan.totals()));
    Ok(())
}
