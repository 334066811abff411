use crate::error::SolverError;
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

/// One solved decision variable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Column {
    #[serde(rename = "primalValue", alias = "Primal", alias = "primal")]
    pub primal_value: f64,
}

impl Column {
    pub fn new(primal_value: f64) -> Self {
        Self { primal_value }
    }
}

/// Artifact id -> solved column.
pub type Columns = AHashMap<String, Column>;

/// The external integer-program solver.
///
/// Receives problem text in the LP dialect produced by [`crate::problem::Problem`] and
/// returns the solved value of every variable. One call, no partial results, no retries.
pub trait Solver {
    fn solve(&self, problem: &str) -> Result<Columns, SolverError>;
}

impl<F> Solver for F
where
    F: Fn(&str) -> Result<Columns, SolverError>,
{
    fn solve(&self, problem: &str) -> Result<Columns, SolverError> {
        self(problem)
    }
}

/// A raw solver reply, either wrapped with a status or as a bare column map.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawResponse {
    Wrapped {
        #[serde(rename = "Status", alias = "status")]
        status: Option<String>,
        #[serde(rename = "Columns", alias = "columns")]
        columns: Columns,
    },
    Bare(Columns),
}

/// A parsed solver reply.
#[derive(Debug, Clone, Default)]
pub struct SolverResponse {
    pub status: Option<String>,
    pub columns: Columns,
}

impl SolverResponse {
    pub fn from_json(json: &str) -> Result<Self, SolverError> {
        let raw: RawResponse =
            serde_json::from_str(json).map_err(|e| SolverError::Malformed(e.to_string()))?;
        Ok(match raw {
            RawResponse::Wrapped { status, columns } => Self { status, columns },
            RawResponse::Bare(columns) => Self {
                status: None,
                columns,
            },
        })
    }

    /// Unwraps the columns, turning any status other than `Optimal` into `NoSolution`.
    pub fn into_columns(self) -> Result<Columns, SolverError> {
        match self.status {
            Some(status) if !status.eq_ignore_ascii_case("optimal") => {
                Err(SolverError::NoSolution { status })
            }
            _ => Ok(self.columns),
        }
    }
}

/// Rejects responses that cannot be turned into a plan: no columns, or a count that is
/// negative, NaN, or infinite.
pub fn validate_columns(columns: &Columns) -> Result<(), SolverError> {
    if columns.is_empty() {
        return Err(SolverError::EmptyResponse);
    }
    for (artifact, column) in columns.iter().sorted_by(|(a, _), (b, _)| a.cmp(b)) {
        let value = column.primal_value;
        if !value.is_finite() || value < 0.0 {
            return Err(SolverError::InvalidPrimal {
                artifact: artifact.clone(),
                value,
            });
        }
    }
    Ok(())
}

/// Runs an external solver program: problem text on stdin, JSON response on stdout.
#[derive(Debug, Clone)]
pub struct CommandSolver {
    program: String,
    args: Vec<String>,
}

impl CommandSolver {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Solver for CommandSolver {
    fn solve(&self, problem: &str) -> Result<Columns, SolverError> {
        debug!(program = %self.program, bytes = problem.len(), "invoking solver");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                SolverError::Unavailable(format!("could not start '{}': {}", self.program, e))
            })?;

        let stdin = child.stdin.take();
        // Feed stdin while stdout and stderr drain so a chatty solver cannot fill a pipe.
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(problem.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        let output =
            output.map_err(|e| SolverError::Unavailable(format!("solver did not finish: {}", e)))?;
        match written {
            Ok(Ok(())) => {}
            // A solver that exits without reading all input is judged by its exit status.
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => {
                return Err(SolverError::Unavailable(format!(
                    "could not write problem to solver: {}",
                    e
                )));
            }
            Err(_) => {
                return Err(SolverError::Unavailable(
                    "solver input writer panicked".to_string(),
                ));
            }
        }

        if !output.status.success() {
            return Err(SolverError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|e| SolverError::Malformed(e.to_string()))?;
        SolverResponse::from_json(&stdout)?.into_columns()
    }
}

/// Replays a response that was solved ahead of time.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedSolver {
    response: SolverResponse,
}

impl PrecomputedSolver {
    pub fn new(response: SolverResponse) -> Self {
        Self { response }
    }

    pub fn from_columns(columns: Columns) -> Self {
        Self::new(SolverResponse {
            status: None,
            columns,
        })
    }

    /// Loads a saved solver response from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, SolverError> {
        let content = fs::read_to_string(path).map_err(|e| {
            SolverError::Unavailable(format!("could not read '{}': {}", path, e))
        })?;
        SolverResponse::from_json(&content).map(Self::new)
    }
}

impl Solver for PrecomputedSolver {
    fn solve(&self, _problem: &str) -> Result<Columns, SolverError> {
        self.response.clone().into_columns()
    }
}
