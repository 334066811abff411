use ahash::AHashMap;
use clap::Parser;
use craftplan::data::PlayerState;
use craftplan::recipe::Recipe;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate random recipe catalogs and player states for craftplan
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated catalog JSON file to
    #[arg(long, default_value = "generated_catalog.json")]
    catalog: String,

    /// The path to write the generated player state JSON file to
    #[arg(long, default_value = "generated_player.json")]
    state: String,

    /// Number of raw (non-craftable) materials
    #[arg(long, default_value_t = 6)]
    raw: usize,

    /// Number of crafting tiers above the raw materials
    #[arg(long, default_value_t = 3)]
    tiers: usize,

    /// Number of artifacts per tier
    #[arg(long, default_value_t = 5)]
    per_tier: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.raw == 0 || cli.per_tier == 0 {
        eprintln!("Error: --raw and --per-tier must both be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating catalog ({} raw materials, {} tiers x {} artifacts)...",
        cli.raw, cli.tiers, cli.per_tier
    );

    let raw_names: Vec<String> = (0..cli.raw).map(|i| format!("raw_{:02}", i)).collect();
    let catalog = generate_catalog(&mut rng, &raw_names, cli.tiers, cli.per_tier);
    let state = generate_state(&mut rng, &raw_names, &catalog);

    fs::write(&cli.catalog, serde_json::to_string_pretty(&catalog)?)?;
    fs::write(&cli.state, serde_json::to_string_pretty(&state)?)?;

    println!(
        "Successfully saved catalog to '{}' and player state to '{}'",
        cli.catalog, cli.state
    );

    Ok(())
}

/// Builds a layered DAG: every artifact only consumes raw materials or lower tiers,
/// so the result is always acyclic.
fn generate_catalog(
    rng: &mut ThreadRng,
    raw_names: &[String],
    tiers: usize,
    per_tier: usize,
) -> AHashMap<String, Recipe> {
    let mut catalog = AHashMap::new();
    let mut lower: Vec<String> = raw_names.to_vec();

    for tier in 1..=tiers {
        let mut current = Vec::with_capacity(per_tier);
        for slot in 0..per_tier {
            let name = format!("t{}_{:02}", tier, slot);
            let scale = tier as f64;
            let mut recipe = Recipe::new(
                (rng.random_range(5.0..20.0) * scale).round(),
                (rng.random_range(50.0..200.0) * scale * scale).round(),
            );

            let ingredient_count = rng.random_range(1..=3usize.min(lower.len()));
            for _ in 0..ingredient_count {
                let ingredient = &lower[rng.random_range(0..lower.len())];
                let quantity = rng.random_range(1..=4) as f64;
                recipe = recipe.with_ingredient(ingredient, quantity);
            }

            catalog.insert(name.clone(), recipe);
            current.push(name);
        }
        println!("-> Generated tier {} ({} artifacts).", tier, current.len());
        lower.extend(current);
    }

    catalog
}

/// Stocks every raw material and gives some artifacts a craft history.
fn generate_state(
    rng: &mut ThreadRng,
    raw_names: &[String],
    catalog: &AHashMap<String, Recipe>,
) -> PlayerState {
    let inventory = raw_names
        .iter()
        .map(|name| (name.clone(), rng.random_range(0..500)))
        .collect();

    let craft_counts = catalog
        .keys()
        .filter_map(|name| {
            rng.random_bool(0.5)
                .then(|| (name.clone(), rng.random_range(0..400)))
        })
        .collect();

    println!("-> Generated player state.");
    PlayerState::new(inventory, craft_counts)
}
