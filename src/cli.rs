use clap::{Parser, Subcommand};

/// nutri_plan: assemble meal plans from a reference food catalog.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal plan JSON file.
    #[arg(short, long, env = "NUTRI_PLAN_FILE", default_value = "meal_plan.json")]
    pub plan: String,

    /// Path to the food catalog (JSON array or CSV).
    #[arg(short, long, env = "NUTRI_CATALOG_FILE", default_value = "foods.json")]
    pub catalog: String,

    /// Seconds a catalog lookup stays cached.
    #[arg(long, default_value = "300")]
    pub cache_ttl: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new plan file with empty meals.
    Init {
        /// Plan label, e.g. patient and date.
        #[arg(long, default_value = "Meal plan")]
        label: String,

        /// Comma-separated meal names.
        #[arg(long, default_value = "Breakfast,Lunch,Snack,Dinner")]
        meals: String,

        /// Overwrite an existing plan file.
        #[arg(long)]
        force: bool,
    },

    /// Append an empty meal to the plan.
    AddMeal {
        name: String,
    },

    /// List catalog foods matching a query.
    Foods {
        #[arg(default_value = "")]
        query: String,
    },

    /// Add a food to a meal.
    Add {
        /// Meal name or id.
        #[arg(short, long)]
        meal: String,

        /// Food name query or exact catalog id.
        food: String,

        /// Number of reference portions (prompted when omitted).
        #[arg(short, long, allow_hyphen_values = true)]
        quantity: Option<f64>,
    },

    /// Change the quantity of a line item.
    Rescale {
        #[arg(short, long)]
        meal: String,

        /// 1-based position in the meal, or line item id.
        #[arg(short, long)]
        item: String,

        /// New number of reference portions.
        #[arg(allow_hyphen_values = true)]
        quantity: f64,
    },

    /// Remove a line item from a meal.
    Remove {
        #[arg(short, long)]
        meal: String,

        #[arg(short, long)]
        item: String,
    },

    /// Move a line item to another position (1-based).
    Move {
        #[arg(short, long)]
        meal: String,

        #[arg(long)]
        from: usize,

        #[arg(long)]
        to: usize,
    },

    /// Show the plan with meal and day totals.
    Show,

    /// Verify every stored value re-derives from its source.
    Check,
}

impl Default for Command {
    fn default() -> Self {
        Command::Show
    }
}
