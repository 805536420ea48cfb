//! Single-threaded depth-first search baseline.

use crate::maze::{Maze, NodeId};
use crate::solver::config::Algorithm;
use crate::solver::result::{SearchOutcome, SearchStatistics};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Plain depth-first search over a maze, run entirely on the calling thread.
///
/// Traversal order, visited gating, and predecessor recording match the
/// parallel solver with forking disabled, which makes this the baseline
/// oracle the parallel solver is tested against.
#[derive(Debug, Default)]
pub struct SequentialSolver;

impl SequentialSolver {
    pub fn new() -> Self {
        Self
    }

    /// Search `maze` from its start node.
    pub fn solve<M: Maze + ?Sized>(&self, maze: &M) -> SearchOutcome {
        let start_time = Instant::now();
        let start = maze.start();
        let player = maze.new_player(start);

        let mut frontier: Vec<NodeId> = Vec::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut predecessor: HashMap<NodeId, NodeId> = HashMap::new();
        let mut nodes_expanded: u64 = 0;

        let mut statistics = SearchStatistics::new(Algorithm::Sequential);
        statistics.tasks_spawned = 1;

        frontier.push(start);

        while let Some(current) = frontier.pop() {
            if maze.has_goal(current) {
                maze.move_player(player, current);
                statistics.elapsed_time = start_time.elapsed();
                statistics.nodes_expanded = nodes_expanded;
                return match path_from_to(&predecessor, start, current) {
                    Some(path) => SearchOutcome::with_path(path, statistics),
                    None => SearchOutcome::no_path(statistics),
                };
            }

            if visited.insert(current) {
                maze.move_player(player, current);
                nodes_expanded += 1;
                for nb in maze.neighbors(current) {
                    frontier.push(nb);
                    if !visited.contains(&nb) {
                        predecessor.entry(nb).or_insert(current);
                    }
                }
            }
        }

        statistics.elapsed_time = start_time.elapsed();
        statistics.nodes_expanded = nodes_expanded;
        SearchOutcome::no_path(statistics)
    }
}

/// Walk the predecessor chain backwards from `to` until `from` is reached.
fn path_from_to(
    predecessor: &HashMap<NodeId, NodeId>,
    from: NodeId,
    to: NodeId,
) -> Option<Vec<NodeId>> {
    let mut path = Vec::new();
    let mut current = to;
    loop {
        path.push(current);
        if current == from {
            break;
        }
        current = *predecessor.get(&current)?;
    }
    path.reverse();
    Some(path)
}
