//! Search outcome types and statistics

#![allow(dead_code)]

use crate::maze::NodeId;
use crate::solver::config::Algorithm;
use std::time::Duration;

/// Outcome of a maze search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Path from the start node to a goal node, if one was found
    pub path: Option<Vec<NodeId>>,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl SearchOutcome {
    /// Create an outcome for a search that found no path
    pub fn no_path(statistics: SearchStatistics) -> Self {
        Self {
            path: None,
            statistics,
        }
    }

    /// Create an outcome for a search that found a path
    pub fn with_path(path: Vec<NodeId>, statistics: SearchStatistics) -> Self {
        Self {
            path: Some(path),
            statistics,
        }
    }

    /// Whether a path was found
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Length of the found path in nodes (0 when no path was found)
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map(|p| p.len()).unwrap_or(0)
    }
}

/// Statistics from a single search task
#[derive(Debug, Clone)]
pub struct TaskStatistics {
    /// Identifier of the task within the run (0 is the root task)
    pub task_id: usize,
    /// Node the task started exploring from
    pub start_node: NodeId,
    /// Number of nodes whose neighbor lists this task expanded
    pub nodes_expanded: u64,
    /// Whether this task itself reached a goal node
    pub found_goal: bool,
}

/// Statistics from a search run
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Algorithm used for the search
    pub algorithm: Algorithm,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of nodes expanded across all tasks
    pub nodes_expanded: u64,
    /// Number of tasks that ran (1 for a sequential search)
    pub tasks_spawned: u64,
    /// Per-task breakdown (empty for a sequential search)
    pub task_statistics: Vec<TaskStatistics>,
}

impl SearchStatistics {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Get nodes expanded per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.nodes_expanded as f64 / secs
        }
    }

    /// Mean nodes expanded per task (0.0 when no task ran)
    pub fn nodes_per_task(&self) -> f64 {
        if self.tasks_spawned == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / self.tasks_spawned as f64
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Algorithm: {}\n", self.algorithm));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Nodes expanded: {}\n", self.nodes_expanded));
        s.push_str(&format!("Tasks spawned: {}\n", self.tasks_spawned));
        s.push_str(&format!("Throughput: {:.0} nodes/sec\n", self.throughput()));

        if self.tasks_spawned > 1 {
            s.push_str(&format!(
                "Nodes per task: {:.1}\n",
                self.nodes_per_task()
            ));
        }

        s
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => {
                writeln!(f, "Path found ({} nodes):", path.len())?;
                let rendered: Vec<String> = path.iter().map(|n| n.to_string()).collect();
                writeln!(f, "  {}", rendered.join(" -> "))?;
            }
            None => {
                writeln!(f, "No path found.")?;
            }
        }
        Ok(())
    }
}
