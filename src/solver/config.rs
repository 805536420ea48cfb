//! Configuration types for maze solvers.

#![allow(dead_code)]

/// Solver algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Single-threaded depth-first search
    Sequential,
    /// Fork/join parallel depth-first search
    #[default]
    Parallel,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Sequential => write!(f, "sequential"),
            Algorithm::Parallel => write!(f, "parallel"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Ok(Algorithm::Sequential),
            "parallel" | "par" | "forkjoin" => Ok(Algorithm::Parallel),
            _ => Err(format!(
                "Unknown algorithm: '{}'. Valid options: sequential, parallel",
                s
            )),
        }
    }
}

/// Configuration for a maze search.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Algorithm to run.
    pub algorithm: Algorithm,
    /// Number of exploration steps between allowed forks; a non-positive
    /// value disables forking entirely.
    pub fork_after: i64,
    /// A task only forks at nodes with strictly more than this many
    /// neighbors. The default of 2 restricts forking to junctions on
    /// 4-connected grids; graphs with a different branching factor may want
    /// a different threshold.
    pub fork_degree: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            fork_after: 8,
            fork_degree: 2,
        }
    }
}

impl SolverConfig {
    /// Select the algorithm to run.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the fork threshold (non-positive disables forking).
    pub fn with_fork_after(mut self, fork_after: i64) -> Self {
        self.fork_after = fork_after;
        self
    }

    /// Set the junction degree above which forking is allowed.
    pub fn with_fork_degree(mut self, fork_degree: usize) -> Self {
        self.fork_degree = fork_degree;
        self
    }

    /// Whether this configuration permits forking at all.
    pub fn forking_enabled(&self) -> bool {
        self.fork_after > 0
    }
}
