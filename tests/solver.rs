//! Tests for the solver collaborators and response validation.
mod common;
use common::*;
use craftplan::prelude::*;
use craftplan::solver::validate_columns;

#[test]
fn test_validate_columns() {
    assert!(validate_columns(&columns(&[("A", 0.0), ("B", 3.0)])).is_ok());
    assert!(matches!(
        validate_columns(&columns(&[])),
        Err(SolverError::EmptyResponse)
    ));
    assert!(matches!(
        validate_columns(&columns(&[("A", f64::INFINITY)])),
        Err(SolverError::InvalidPrimal { .. })
    ));
}

#[test]
fn test_precomputed_solver_ignores_problem() {
    let solver = PrecomputedSolver::from_columns(columns(&[("A", 2.0)]));
    let first = solver.solve("Maximize\nobj: 1 A\nEnd").unwrap();
    let second = solver.solve("").unwrap();
    assert_eq!(first, second);
    assert_eq!(first["A"].primal_value, 2.0);
}

#[test]
fn test_missing_solver_program_is_unavailable() {
    let solver = CommandSolver::new("craftplan-no-such-solver-binary");
    assert!(matches!(
        solver.solve("Maximize\nobj: 1 A\nEnd"),
        Err(SolverError::Unavailable(_))
    ));
}

#[cfg(unix)]
#[test]
fn test_command_solver_reads_stdout() {
    let solver = CommandSolver::new("sh").with_args([
        "-c",
        r#"cat > /dev/null; echo '{ "Status": "Optimal", "Columns": { "A": { "Primal": 4 } } }'"#,
    ]);
    let solved = solver.solve("Maximize\nobj: 1 A\nEnd").unwrap();
    assert_eq!(solved["A"].primal_value, 4.0);
}

#[cfg(unix)]
#[test]
fn test_command_solver_failure_keeps_stderr() {
    let solver =
        CommandSolver::new("sh").with_args(["-c", "cat > /dev/null; echo 'license expired' >&2; exit 3"]);
    match solver.solve("Maximize\nobj: 1 A\nEnd") {
        Err(SolverError::Failed { stderr, .. }) => assert_eq!(stderr, "license expired"),
        other => panic!("Expected Failed, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_command_solver_reports_infeasible() {
    let solver = CommandSolver::new("sh").with_args([
        "-c",
        r#"cat > /dev/null; echo '{ "Status": "Infeasible", "Columns": {} }'"#,
    ]);
    assert!(matches!(
        solver.solve("Maximize\nobj: 1 A\nEnd"),
        Err(SolverError::NoSolution { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_command_solver_survives_noisy_stderr_before_reading_input() {
    // Both the problem and the stderr chatter exceed a pipe buffer.
    let solver = CommandSolver::new("sh").with_args([
        "-c",
        r#"head -c 200000 /dev/zero >&2; cat > /dev/null; echo '{ "A": { "primalValue": 1 } }'"#,
    ]);
    let problem = format!("Maximize\nobj: {}\nEnd", vec!["1 A"; 50_000].join(" + "));
    let solved = solver.solve(&problem).unwrap();
    assert_eq!(solved["A"].primal_value, 1.0);
}
