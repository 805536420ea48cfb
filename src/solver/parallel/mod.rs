//! Parallel fork/join search execution.
//!
//! # Architecture
//!
//! The parallel solver consists of:
//! - **Search tasks** that each own a LIFO frontier and may recursively
//!   spawn more tasks at junctions, joining them before returning
//! - **Shared state** (visited set, predecessor map, stop flag) created
//!   fresh per run and handed to every task behind an `Arc`
//! - A **completion-event channel** over which each task reports its
//!   per-task statistics to the run's collector
//!
//! # Example
//!
//! ```ignore
//! use amaze::solver::{run_parallel_search, SolverConfig};
//!
//! let config = SolverConfig::default().with_fork_after(8);
//! let outcome = run_parallel_search(maze, &config);
//! ```

pub mod shared;
pub mod task;

pub use shared::{SharedSearchState, TaskEvent};
pub use task::{run_parallel_search, SearchTask};
