use clap::{Parser, ValueEnum};
use craftplan::prelude::*;
use serde::Deserialize;
use std::fs;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

// --- JSON Deserialization Structs (List-Form Catalog) ---
// Game data exports list recipes as an array; these structs only exist for conversion.

#[derive(Deserialize)]
struct RawRecipe {
    #[serde(alias = "id")]
    name: String,
    #[serde(default, alias = "xpReward")]
    xp: f64,
    #[serde(default, alias = "baseCost")]
    cost: f64,
    #[serde(default)]
    ingredients: Vec<RawIngredient>,
}

#[derive(Deserialize)]
struct RawIngredient {
    #[serde(alias = "id")]
    name: String,
    #[serde(alias = "quantity")]
    count: f64,
}

struct RawCatalog(Vec<RawRecipe>);

impl IntoCatalog for RawCatalog {
    fn into_catalog(self) -> std::result::Result<Catalog, CatalogError> {
        self.0
            .into_iter()
            .map(|raw| {
                let recipe = raw
                    .ingredients
                    .into_iter()
                    .fold(Recipe::new(raw.xp, raw.cost), |recipe, ingredient| {
                        recipe.with_ingredient(&ingredient.name, ingredient.count)
                    });
                (raw.name, recipe)
            })
            .collect::<Vec<_>>()
            .into_catalog()
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Plans artifact crafts for maximum XP and reports their discounted costs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the recipe catalog JSON file
    catalog_path: String,
    /// Path to the player state JSON file (inventory and craft counts)
    state_path: Option<String>,

    /// Read the catalog as a list of `{ name, xp, cost, ingredients: [{ name, count }] }`
    #[arg(long)]
    raw_catalog: bool,

    /// External solver program: reads LP text on stdin, writes JSON columns on stdout
    #[arg(long, conflicts_with = "columns")]
    solver: Option<String>,

    /// Extra argument passed to the solver program (repeatable)
    #[arg(long = "solver-arg", requires = "solver")]
    solver_args: Vec<String>,

    /// Previously solved JSON columns to report on instead of invoking a solver
    #[arg(long)]
    columns: Option<String>,

    /// Print the LP problem and exit without solving
    #[arg(long)]
    problem_only: bool,

    /// Output format for the solution
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Maximum crafts per mode-comparison simulation
    #[arg(long, default_value_t = craftplan::simulator::DEFAULT_MAX_CRAFTS)]
    max_crafts: u64,

    /// Skip the direct versus auto-craft comparison
    #[arg(long)]
    no_compare: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli);
}

fn run(cli: Cli) {
    let total_start = Instant::now();

    // --- 1. Loading ---
    let load_start = Instant::now();
    let catalog = load_catalog(&cli.catalog_path, cli.raw_catalog);
    let state = match &cli.state_path {
        Some(path) => PlayerState::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load player state: {}", e))
        }),
        None => {
            info!("no player state provided, planning from an empty inventory");
            PlayerState::default()
        }
    };
    let load_duration = load_start.elapsed();
    info!(
        recipes = catalog.len(),
        inventory = state.inventory().len(),
        history = state.craft_counts().len(),
        "loaded inputs"
    );

    if cli.problem_only {
        println!("{}", ProblemBuilder::new(&catalog, state.inventory()).build());
        return;
    }

    // --- 2. Solving and Reporting ---
    let solver: Box<dyn Solver> = match (&cli.solver, &cli.columns) {
        (Some(program), _) => {
            Box::new(CommandSolver::new(program).with_args(cli.solver_args.clone()))
        }
        (None, Some(path)) => Box::new(PrecomputedSolver::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load solved columns: {}", e))
        })),
        (None, None) => exit_with_error("Either --solver or --columns is required to plan."),
    };

    let mut builder = Optimizer::builder(&catalog, move |problem: &str| solver.solve(problem))
        .with_max_simulated_crafts(cli.max_crafts);
    if cli.no_compare {
        builder = builder.without_mode_comparison();
    }
    let optimizer = builder.build();

    let plan_start = Instant::now();
    let solution = optimizer
        .optimize(state.inventory(), state.craft_counts())
        .unwrap_or_else(|e| exit_with_error(&format!("Optimization failed: {}", e)));
    let plan_duration = plan_start.elapsed();

    // --- 3. Output ---
    match cli.format {
        OutputFormat::Table => println!("{}", SolutionFormatter::format_table(&solution)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&solution).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to serialize solution: {}", e))
            });
            println!("{}", json);
        }
    }

    info!(
        load = ?load_duration,
        plan = ?plan_duration,
        total = ?total_start.elapsed(),
        "finished"
    );
}

fn load_catalog(path: &str, raw: bool) -> Catalog {
    if !raw {
        return Catalog::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)));
    }

    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read catalog file '{}': {}", path, e))
    });
    let raw_recipes: Vec<RawRecipe> = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse catalog JSON: {}", e)));
    RawCatalog(raw_recipes)
        .into_catalog()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert catalog: {}", e)))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
