//! Maze search algorithms
//!
//! Two solvers over the same [`crate::maze::Maze`] contract:
//! - Sequential: plain depth-first search on the calling thread
//! - Parallel: fork/join depth-first search that spins side branches off
//!   into concurrently running tasks and stitches the first successful
//!   child path onto the parent's own path

pub mod config;
pub mod parallel;
pub mod result;
pub mod sequential;

pub use config::{Algorithm, SolverConfig};
pub use parallel::{run_parallel_search, SearchTask};
pub use result::{SearchOutcome, SearchStatistics};
pub use sequential::SequentialSolver;
