//! Adjacency-list maze over an arbitrary undirected graph.

#![allow(dead_code)]

use crate::maze::{Maze, MazeError, NodeId, PlayerId};
use std::collections::BTreeSet;
use std::sync::Mutex;

/// A maze over an explicit undirected graph.
///
/// Built through the `with_*` methods, each of which validates node
/// identifiers so that a malformed graph fails before any search starts.
///
/// # Example
///
/// ```ignore
/// let maze = GraphMaze::new(5)?
///     .with_edge(0, 1)?
///     .with_edge(1, 2)?
///     .with_edge(1, 3)?
///     .with_edge(3, 4)?
///     .with_goal(4)?;
/// ```
#[derive(Debug)]
pub struct GraphMaze {
    adjacency: Vec<BTreeSet<NodeId>>,
    goals: BTreeSet<NodeId>,
    start: NodeId,
    players: Mutex<Vec<NodeId>>,
}

impl GraphMaze {
    /// Create a maze with `num_nodes` isolated nodes, start at node 0.
    pub fn new(num_nodes: usize) -> Result<Self, MazeError> {
        if num_nodes == 0 {
            return Err(MazeError::Empty);
        }
        Ok(Self {
            adjacency: vec![BTreeSet::new(); num_nodes],
            goals: BTreeSet::new(),
            start: 0,
            players: Mutex::new(Vec::new()),
        })
    }

    /// Add an undirected edge between `a` and `b`.
    pub fn with_edge(mut self, a: NodeId, b: NodeId) -> Result<Self, MazeError> {
        self.check_node(a)?;
        self.check_node(b)?;
        self.adjacency[a].insert(b);
        self.adjacency[b].insert(a);
        Ok(self)
    }

    /// Mark `node` as a goal.
    pub fn with_goal(mut self, node: NodeId) -> Result<Self, MazeError> {
        self.check_node(node)?;
        self.goals.insert(node);
        Ok(self)
    }

    /// Set the start node (defaults to node 0).
    pub fn with_start(mut self, node: NodeId) -> Result<Self, MazeError> {
        self.check_node(node)?;
        self.start = node;
        Ok(self)
    }

    /// Number of nodes in the graph.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Current positions of all registered players.
    pub fn player_positions(&self) -> Vec<NodeId> {
        self.players.lock().unwrap().clone()
    }

    fn check_node(&self, node: NodeId) -> Result<(), MazeError> {
        if node >= self.adjacency.len() {
            return Err(MazeError::InvalidNode(node, self.adjacency.len()));
        }
        Ok(())
    }
}

impl Maze for GraphMaze {
    fn start(&self) -> NodeId {
        self.start
    }

    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.adjacency
            .get(node)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    fn has_goal(&self, node: NodeId) -> bool {
        self.goals.contains(&node)
    }

    fn new_player(&self, node: NodeId) -> PlayerId {
        let mut players = self.players.lock().unwrap();
        players.push(node);
        players.len() - 1
    }

    fn move_player(&self, player: PlayerId, node: NodeId) {
        let mut players = self.players.lock().unwrap();
        if let Some(position) = players.get_mut(player) {
            *position = node;
        }
    }
}
