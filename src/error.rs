use thiserror::Error;

/// Errors that can occur while loading or validating a recipe catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Recipe '{artifact}' has a non-finite {field}: {value}")]
    NonFiniteNumber {
        artifact: String,
        field: String,
        value: f64,
    },

    #[error("Invalid custom catalog data: {0}")]
    ValidationError(String),
}

/// Errors raised while walking the recipe graph, either in the simulator or the cost evaluator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CraftError {
    #[error("Recipe cycle detected at '{artifact}' (chain: {})", path.join(" -> "))]
    CycleDetected { artifact: String, path: Vec<String> },
}

/// Errors surfaced by a solver invocation or by validating its response.
#[derive(Error, Debug, Clone)]
pub enum SolverError {
    #[error("Solver could not be reached: {0}")]
    Unavailable(String),

    #[error("Solver exited with status {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Solver found no solution (status: {status})")]
    NoSolution { status: String },

    #[error("Malformed solver response: {0}")]
    Malformed(String),

    #[error("Solver response contained no usable column data")]
    EmptyResponse,

    #[error("Solver returned an invalid count for '{artifact}': {value}")]
    InvalidPrimal { artifact: String, value: f64 },
}

/// Errors that abort a full optimization run.
#[derive(Error, Debug, Clone)]
pub enum OptimizeError {
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Craft(#[from] CraftError),
}

/// Errors that can occur while loading player state (inventory and craft history).
#[derive(Error, Debug, Clone)]
pub enum DataError {
    #[error("Failed to parse player state JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read player state file '{path}': {message}")]
    Io { path: String, message: String },
}
