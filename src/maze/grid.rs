//! 4-connected rectangular grid maze.

use crate::maze::{Maze, MazeError, NodeId, PlayerId};
use std::collections::BTreeSet;
use std::sync::Mutex;

/// A `width x height` grid maze where cell `(row, col)` is node
/// `row * width + col` and passages connect orthogonally adjacent cells.
#[derive(Debug)]
pub struct GridMaze {
    width: usize,
    height: usize,
    adjacency: Vec<BTreeSet<NodeId>>,
    goals: BTreeSet<NodeId>,
    start: NodeId,
    players: Mutex<Vec<NodeId>>,
}

impl GridMaze {
    /// Create a grid maze from a set of carved passages.
    ///
    /// Each passage is a pair of orthogonally adjacent cell identifiers.
    pub fn new(
        width: usize,
        height: usize,
        passages: &[(NodeId, NodeId)],
        start: NodeId,
        goals: &[NodeId],
    ) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::DegenerateGrid(width, height));
        }
        let num_nodes = width * height;
        let check = |node: NodeId| {
            if node >= num_nodes {
                Err(MazeError::InvalidNode(node, num_nodes))
            } else {
                Ok(())
            }
        };
        check(start)?;

        let mut adjacency = vec![BTreeSet::new(); num_nodes];
        for &(a, b) in passages {
            check(a)?;
            check(b)?;
            adjacency[a].insert(b);
            adjacency[b].insert(a);
        }

        let mut goal_set = BTreeSet::new();
        for &goal in goals {
            check(goal)?;
            goal_set.insert(goal);
        }

        Ok(Self {
            width,
            height,
            adjacency,
            goals: goal_set,
            start,
            players: Mutex::new(Vec::new()),
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn num_nodes(&self) -> usize {
        self.width * self.height
    }

    /// Node identifier of cell `(row, col)`.
    pub fn node_at(&self, row: usize, col: usize) -> NodeId {
        row * self.width + col
    }

    /// Render the maze as ASCII art, optionally overlaying a solved path.
    ///
    /// Walls are drawn between cells without a passage; the start cell is
    /// `S`, goal cells are `G`, and path cells are `*`.
    pub fn render(&self, path: Option<&[NodeId]>) -> String {
        let on_path: BTreeSet<NodeId> = path.map(|p| p.iter().copied().collect()).unwrap_or_default();
        let mut out = String::new();

        for row in 0..self.height {
            // Wall line above this row
            for col in 0..self.width {
                let node = self.node_at(row, col);
                let open_up = row > 0 && self.adjacency[node].contains(&(node - self.width));
                out.push('+');
                out.push_str(if open_up { "   " } else { "---" });
            }
            out.push_str("+\n");

            // Cell line
            for col in 0..self.width {
                let node = self.node_at(row, col);
                let open_left = col > 0 && self.adjacency[node].contains(&(node - 1));
                out.push(if open_left { ' ' } else { '|' });
                let mark = if node == self.start {
                    'S'
                } else if self.goals.contains(&node) {
                    'G'
                } else if on_path.contains(&node) {
                    '*'
                } else {
                    ' '
                };
                out.push(' ');
                out.push(mark);
                out.push(' ');
            }
            out.push_str("|\n");
        }

        // Bottom border
        for _ in 0..self.width {
            out.push_str("+---");
        }
        out.push_str("+\n");
        out
    }
}

impl Maze for GridMaze {
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
