//! Unit tests for catalog loading, error display, and report formatting.
mod common;
use common::*;
use craftplan::prelude::*;

#[test]
fn test_catalog_from_json() {
    let catalog = Catalog::from_json(
        r#"{
            "gem": { "xp": 5, "cost": 100, "ingredients": { "shard": 2, "ore": 1 } },
            "shard": { "xp": 1, "cost": 50, "ingredients": { "ore": 3 } },
            "plain": { "xp": 2 }
        }"#,
    )
    .unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get("gem").unwrap().ingredients["shard"], 2.0);
    assert_eq!(catalog.get("plain").unwrap().cost, 0.0);
    assert!(catalog.get("plain").unwrap().ingredients.is_empty());
    assert!(catalog.has_craftable_ingredient("gem"));
    assert!(!catalog.has_craftable_ingredient("shard"));
    assert_eq!(catalog.base_cost("ore"), 0.0);

    let ids: Vec<&str> = catalog.iter_sorted().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["gem", "plain", "shard"]);
}

#[test]
fn test_catalog_rejects_bad_json() {
    assert!(matches!(
        Catalog::from_json("[1, 2"),
        Err(CatalogError::JsonParseError(_))
    ));
}

#[test]
fn test_catalog_rejects_non_finite_numbers() {
    let result = Catalog::new([("A".to_string(), Recipe::new(f64::NAN, 1.0))]);
    match result {
        Err(CatalogError::NonFiniteNumber { artifact, field, .. }) => {
            assert_eq!(artifact, "A");
            assert_eq!(field, "xp");
        }
        other => panic!("Expected NonFiniteNumber, got {:?}", other),
    }
}

#[test]
fn test_list_conversion_rejects_duplicates() {
    let recipes = vec![
        ("A".to_string(), Recipe::new(1.0, 1.0)),
        ("A".to_string(), Recipe::new(2.0, 2.0)),
    ];
    assert!(matches!(
        recipes.into_catalog(),
        Err(CatalogError::ValidationError(_))
    ));
}

#[test]
fn test_player_state_normalizes_counts() {
    let state =
        PlayerState::from_json(r#"{ "inventory": { "ore": 2.6, "gem": -1 }, "craftCounts": {} }"#)
            .unwrap();
    assert_eq!(state.inventory()["ore"], 3);
    assert_eq!(state.inventory()["gem"], 0);
    assert!(state.craft_counts().is_empty());

    let empty = PlayerState::from_json("{}").unwrap();
    assert!(empty.inventory().is_empty());
}

#[test]
fn test_error_display() {
    let err = CraftError::CycleDetected {
        artifact: "A".to_string(),
        path: vec!["A".to_string(), "B".to_string(), "A".to_string()],
    };
    assert!(err.to_string().contains("A -> B -> A"));

    let err = SolverError::InvalidPrimal {
        artifact: "gem".to_string(),
        value: -2.0,
    };
    assert!(err.to_string().contains("gem"));
    assert!(err.to_string().contains("-2"));

    let err: OptimizeError = SolverError::NoSolution {
        status: "Infeasible".to_string(),
    }
    .into();
    assert!(err.to_string().contains("Infeasible"));

    let err = SolverError::Unavailable("no such program".to_string());
    assert!(err.to_string().contains("could not be reached"));
}

#[test]
fn test_table_lists_only_crafted_artifacts() {
    let catalog = create_gem_catalog();
    let solution = optimize_crafts(
        fixed_solver(&[("gem", 3.0), ("shard", 0.0)]),
        &catalog,
        &counts(&[("ore", 10), ("shard", 1)]),
        &counts(&[]),
    )
    .unwrap();

    let table = SolutionFormatter::format_table(&solution);
    let lines: Vec<&str> = table.lines().collect();
    assert!(lines[0].starts_with("Artifact"));
    assert!(lines[1].chars().all(|c| c == '-'));
    assert!(lines[2].starts_with("gem"));
    assert!(lines[2].contains("237"));
    assert!(!table.contains("shard "));
    assert_eq!(lines.last().copied(), Some("Total XP: 15  Total Cost: 237"));
}

#[test]
fn test_table_marks_capped_simulations() {
    let catalog = create_single_catalog();
    let solution = Optimizer::builder(&catalog, fixed_solver(&[("A", 1.0)]))
        .with_max_simulated_crafts(3)
        .build()
        .optimize(&counts(&[]), &counts(&[]))
        .unwrap();

    let table = SolutionFormatter::format_table(&solution);
    let row = table.lines().nth(2).unwrap();
    assert!(row.contains("3+"));
    assert!(row.ends_with('-'));
}
