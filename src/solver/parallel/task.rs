//! Fork/join parallel depth-first search.

use crate::maze::{Maze, NodeId};
use crate::solver::config::{Algorithm, SolverConfig};
use crate::solver::parallel::shared::{task_event_channel, SharedSearchState, TaskEvent};
use crate::solver::result::{SearchOutcome, SearchStatistics, TaskStatistics};
use crossbeam_channel::Sender;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Run a parallel depth-first search over `maze` from its start node.
///
/// Builds fresh shared state for the run, executes the root [`SearchTask`]
/// on the calling thread, and aggregates per-task completion events into the
/// outcome's statistics. Every spawned task is joined before this returns.
pub fn run_parallel_search<M: Maze + 'static>(maze: Arc<M>, config: &SolverConfig) -> SearchOutcome {
    let start_time = Instant::now();
    let shared = Arc::new(SharedSearchState::new());
    let (events_tx, events_rx) = task_event_channel();

    let start = maze.start();
    let root = SearchTask::new(maze, Arc::clone(&shared), config, start, events_tx);
    let path = root.run();

    // Every task has been joined by its parent at this point, so all
    // completion events are already buffered in the channel.
    let mut task_statistics: Vec<TaskStatistics> = events_rx
        .try_iter()
        .map(|event| TaskStatistics {
            task_id: event.task_id,
            start_node: event.start_node,
            nodes_expanded: event.nodes_expanded,
            found_goal: event.found_goal,
        })
        .collect();
    task_statistics.sort_by_key(|stats| stats.task_id);

    let mut statistics = SearchStatistics::new(Algorithm::Parallel);
    statistics.elapsed_time = start_time.elapsed();
    statistics.nodes_expanded = shared.nodes_expanded();
    statistics.tasks_spawned = shared.tasks_started();
    statistics.task_statistics = task_statistics;

    match path {
        Some(path) => SearchOutcome::with_path(path, statistics),
        None => SearchOutcome::no_path(statistics),
    }
}

/// One unit of parallel depth-first search.
///
/// A task owns a LIFO frontier and explores from its assigned start node
/// until a goal is found, the frontier runs dry, or the shared stop flag
/// fires. When its step budget since the last fork is spent and the current
/// node has enough neighbors, it hands one neighbor to a freshly spawned
/// child task and keeps the rest. Child results are stitched onto the path
/// from this task's own start node.
pub struct SearchTask<M: Maze + 'static> {
    maze: Arc<M>,
    shared: Arc<SharedSearchState>,
    config: SolverConfig,
    start: NodeId,
    task_id: usize,
    /// Nodes awaiting exploration by this task. Never shared.
    frontier: Vec<NodeId>,
    /// Spawned children keyed by the node each child started from.
    children: HashMap<NodeId, JoinHandle<Option<Vec<NodeId>>>>,
    events: Sender<TaskEvent>,
}

impl<M: Maze + 'static> SearchTask<M> {
    /// Create a task that searches `maze` from `start`.
    pub fn new(
        maze: Arc<M>,
        shared: Arc<SharedSearchState>,
        config: &SolverConfig,
        start: NodeId,
        events: Sender<TaskEvent>,
    ) -> Self {
        let task_id = shared.next_task_id();
        Self {
            maze,
            shared,
            config: config.clone(),
            start,
            task_id,
            frontier: Vec::new(),
            children: HashMap::new(),
            events,
        }
    }

    /// Spawn this task on its own thread.
    pub fn spawn(self) -> JoinHandle<Option<Vec<NodeId>>> {
        thread::spawn(move || self.run())
    }

    /// Explore until a goal is found, the frontier is exhausted, or the stop
    /// flag fires; then join children and stitch in the first successful
    /// child result.
    ///
    /// Returns the path from this task's start node to a goal, or `None`.
    pub fn run(mut self) -> Option<Vec<NodeId>> {
        let player = self.maze.new_player(self.start);
        let fork_after = self.config.fork_after;
        let fork_degree = self.config.fork_degree;
        let mut steps_since_fork: i64 = 0;
        let mut nodes_expanded: u64 = 0;
        let mut found_goal = false;
        let mut result: Option<Vec<NodeId>> = None;

        self.frontier.push(self.start);

        while !self.shared.should_stop() {
            let Some(current) = self.frontier.pop() else {
                break;
            };

            if self.maze.has_goal(current) {
                self.shared.signal_stop();
                self.maze.move_player(player, current);
                found_goal = true;
                result = self.shared.path_from_to(self.start, current);
                break;
            }

            // Whoever wins this insert owns the expansion of `current`.
            if self.shared.try_visit(current) {
                self.maze.move_player(player, current);
                self.shared.note_expansion();
                nodes_expanded += 1;

                let neighbors = self.maze.neighbors(current);
                let at_junction = neighbors.len() > fork_degree;
                for nb in neighbors {
                    let nb_visited = self.shared.was_visited(nb);
                    if fork_after > 0 && steps_since_fork >= fork_after - 1 && at_junction {
                        steps_since_fork = 0;
                        if !nb_visited {
                            self.fork_child(nb);
                        }
                    } else {
                        self.frontier.push(nb);
                    }
                    if !nb_visited {
                        self.shared.record_predecessor(nb, current);
                    }
                }
            }

            steps_since_fork += 1;
        }

        if result.is_none() {
            result = self.join_children();
        } else {
            // Goal found here; children wind down on the stop flag and
            // their results are not needed.
            self.discard_children();
        }

        let _ = self.events.send(TaskEvent {
            task_id: self.task_id,
            start_node: self.start,
            nodes_expanded,
            found_goal,
        });

        result
    }

    /// Hand `nb` to a new child task. The child owns the node from here on;
    /// it is not pushed onto this task's frontier.
    fn fork_child(&mut self, nb: NodeId) {
        let config = self.config.clone();
        let child = SearchTask::new(
            Arc::clone(&self.maze),
            Arc::clone(&self.shared),
            &config,
            nb,
            self.events.clone(),
        );
        self.children.insert(nb, child.spawn());
    }

    /// Join every spawned child and stitch the first successful result onto
    /// the path from this task's start to that child's start.
    fn join_children(&mut self) -> Option<Vec<NodeId>> {
        let mut stitched: Option<Vec<NodeId>> = None;
        for (child_start, handle) in self.children.drain() {
            let child_result = handle.join().unwrap_or(None);
            if stitched.is_some() {
                continue;
            }
            let Some(child_path) = child_result else {
                continue;
            };
            let Some(mut path) = self.shared.path_from_to(self.start, child_start) else {
                continue;
            };
            // The prefix ends on the child's start node, which the child's
            // path begins with.
            path.pop();
            path.extend(child_path);
            stitched = Some(path);
        }
        stitched
    }

    /// Join every spawned child, ignoring results.
    fn discard_children(&mut self) {
        for (_, handle) in self.children.drain() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{generate_grid_maze, GraphMaze, Maze};
    use crate::solver::sequential::SequentialSolver;

    /// The five-node baseline maze: edges 0-1, 1-2, 1-3, 3-4, goal at 4,
    /// start at 0.
    fn five_node_maze() -> GraphMaze {
        GraphMaze::new(5)
            .unwrap()
            .with_edge(0, 1)
            .unwrap()
            .with_edge(1, 2)
            .unwrap()
            .with_edge(1, 3)
            .unwrap()
            .with_edge(3, 4)
            .unwrap()
            .with_goal(4)
            .unwrap()
    }

    /// Fully open `width x height` lattice with no goals: every interior
    /// node has four neighbors, so junction-gated forking triggers
    /// everywhere. Callers add goals as needed.
    fn open_lattice(width: usize, height: usize) -> GraphMaze {
        let mut maze = GraphMaze::new(width * height).unwrap();
        for row in 0..height {
            for col in 0..width {
                let node = row * width + col;
                if col + 1 < width {
                    maze = maze.with_edge(node, node + 1).unwrap();
                }
                if row + 1 < height {
                    maze = maze.with_edge(node, node + width).unwrap();
                }
            }
        }
        maze
    }

    fn assert_valid_path<M: Maze>(maze: &M, path: &[NodeId]) {
        assert!(!path.is_empty(), "path must not be empty");
        assert_eq!(path[0], maze.start(), "path must begin at the start node");
        assert!(
            maze.has_goal(*path.last().unwrap()),
            "path must end on a goal node"
        );
        for pair in path.windows(2) {
            assert!(
                maze.neighbors(pair[0]).contains(&pair[1]),
                "nodes {} and {} are not adjacent",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_concrete_scenario_fork_disabled() {
        let maze = Arc::new(five_node_maze());
        let config = SolverConfig::default().with_fork_after(0);
        let outcome = run_parallel_search(maze, &config);
        assert_eq!(outcome.path, Some(vec![0, 1, 3, 4]));
    }

    #[test]
    fn test_concrete_scenario_fork_after_one() {
        // The junction-degree guard and the stitch epilogue both resolve to
        // the same route here.
        let maze = Arc::new(five_node_maze());
        let config = SolverConfig::default().with_fork_after(1);
        let outcome = run_parallel_search(maze, &config);
        assert_eq!(outcome.path, Some(vec![0, 1, 3, 4]));
    }

    #[test]
    fn test_goal_at_start() {
        let maze = Arc::new(
            GraphMaze::new(3)
                .unwrap()
                .with_edge(0, 1)
                .unwrap()
                .with_edge(1, 2)
                .unwrap()
                .with_goal(0)
                .unwrap(),
        );
        let outcome = run_parallel_search(maze, &SolverConfig::default());
        assert_eq!(outcome.path, Some(vec![0]));
        // The goal check precedes the visit, so nothing was expanded.
        assert_eq!(outcome.statistics.nodes_expanded, 0);
    }

    #[test]
    fn test_no_goal_returns_none() {
        for fork_after in [0, 1, 4] {
            let maze = Arc::new(open_lattice(5, 5));
            let config = SolverConfig::default().with_fork_after(fork_after);
            let outcome = run_parallel_search(maze, &config);
            assert!(
                outcome.path.is_none(),
                "fork_after {} found a path in a goalless maze",
                fork_after
            );
        }
    }

    #[test]
    fn test_unreachable_goal_returns_none() {
        // Goal exists but sits in a disconnected component.
        let maze = Arc::new(
            GraphMaze::new(4)
                .unwrap()
                .with_edge(0, 1)
                .unwrap()
                .with_edge(2, 3)
                .unwrap()
                .with_goal(3)
                .unwrap(),
        );
        let outcome = run_parallel_search(maze, &SolverConfig::default().with_fork_after(1));
        assert!(outcome.path.is_none());
    }

    #[test]
    fn test_fork_disabled_matches_sequential_oracle() {
        for seed in [1, 7, 42] {
            let maze = Arc::new(generate_grid_maze(12, 9, Some(seed)).unwrap());
            let sequential = SequentialSolver::new().solve(maze.as_ref());
            let config = SolverConfig::default().with_fork_after(0);
            let parallel = run_parallel_search(Arc::clone(&maze), &config);
            assert_eq!(sequential.path, parallel.path, "seed {} diverged", seed);
        }
    }

    #[test]
    fn test_heavy_forking_finds_valid_path() {
        for seed in [2, 13, 99] {
            let maze = Arc::new(generate_grid_maze(15, 15, Some(seed)).unwrap());
            let config = SolverConfig::default().with_fork_after(1);
            let outcome = run_parallel_search(Arc::clone(&maze), &config);
            let path = outcome.path.expect("generated mazes are always solvable");
            assert_valid_path(maze.as_ref(), &path);
        }
    }

    #[test]
    fn test_open_lattice_forking_finds_valid_path() {
        let maze = Arc::new(open_lattice(8, 8).with_goal(63).unwrap());
        let config = SolverConfig::default().with_fork_after(1);
        let outcome = run_parallel_search(Arc::clone(&maze), &config);
        let path = outcome.path.expect("goal is reachable");
        assert_valid_path(maze.as_ref(), &path);
        assert!(
            outcome.statistics.tasks_spawned > 1,
            "an open lattice must fork"
        );
    }

    #[test]
    fn test_at_most_once_processing() {
        // Every successful add-if-absent is one neighbor expansion; even
        // under heavy forking each node is claimed exactly once, so a
        // goalless run expands every node exactly once.
        let maze = Arc::new(open_lattice(10, 10));
        let shared = Arc::new(SharedSearchState::new());
        let (events_tx, _events_rx) = task_event_channel();
        let config = SolverConfig::default().with_fork_after(1);
        let start = maze.start();
        let root = SearchTask::new(
            Arc::clone(&maze),
            Arc::clone(&shared),
            &config,
            start,
            events_tx,
        );
        assert_eq!(root.run(), None);

        assert_eq!(shared.visited_count(), 100);
        assert_eq!(shared.nodes_expanded(), 100);
    }

    #[test]
    fn test_stop_signal_prevents_new_exploration() {
        let maze = Arc::new(open_lattice(6, 6));
        let shared = Arc::new(SharedSearchState::new());
        shared.signal_stop();
        let (events_tx, events_rx) = task_event_channel();
        let start = maze.start();
        let root = SearchTask::new(
            Arc::clone(&maze),
            Arc::clone(&shared),
            &SolverConfig::default(),
            start,
            events_tx,
        );
        assert_eq!(root.run(), None);
        assert_eq!(shared.visited_count(), 0);

        let event = events_rx.try_recv().unwrap();
        assert_eq!(event.nodes_expanded, 0);
        assert!(!event.found_goal);
    }

    #[test]
    fn test_idempotent_restart() {
        let maze = Arc::new(generate_grid_maze(10, 10, Some(5)).unwrap());
        let config = SolverConfig::default().with_fork_after(2);
        let first = run_parallel_search(Arc::clone(&maze), &config);
        let second = run_parallel_search(Arc::clone(&maze), &config);
        // Routes may differ between runs; existence may not.
        assert_eq!(first.found(), second.found());
        assert!(first.found());
    }

    #[test]
    fn test_multiple_goals_returns_some_valid_path() {
        // Several reachable goals: the first successful child encountered
        // during result collection wins, so the only guarantee is a valid
        // path to one of the goals, not the shortest one.
        let maze = Arc::new(
            open_lattice(7, 7)
                .with_goal(6)
                .unwrap()
                .with_goal(42)
                .unwrap()
                .with_goal(48)
                .unwrap(),
        );
        let config = SolverConfig::default().with_fork_after(1);
        let outcome = run_parallel_search(Arc::clone(&maze), &config);
        let path = outcome.path.expect("goals are reachable");
        assert_valid_path(maze.as_ref(), &path);
    }

    #[test]
    fn test_statistics_report_per_task_breakdown() {
        let maze = Arc::new(open_lattice(8, 8).with_goal(63).unwrap());
        let config = SolverConfig::default().with_fork_after(1);
        let outcome = run_parallel_search(maze, &config);
        let stats = &outcome.statistics;
        assert_eq!(stats.task_statistics.len() as u64, stats.tasks_spawned);
        assert_eq!(stats.task_statistics[0].task_id, 0);
        let total: u64 = stats.task_statistics.iter().map(|t| t.nodes_expanded).sum();
        assert_eq!(total, stats.nodes_expanded);
    }
}
