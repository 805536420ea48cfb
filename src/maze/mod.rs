//! Maze graph representation and generation
//!
//! The solver only ever sees a maze through the [`Maze`] trait: a start node,
//! a neighbor query, a goal predicate, and player bookkeeping. Two
//! implementations are provided:
//! - [`GraphMaze`]: an arbitrary adjacency-list graph built through a
//!   validating builder, useful for tests and hand-crafted topologies
//! - [`GridMaze`]: a 4-connected rectangular grid with ASCII rendering,
//!   produced by the seeded generator in [`generator`]

pub mod generator;
pub mod graph;
pub mod grid;

pub use generator::generate_grid_maze;
pub use graph::GraphMaze;
pub use grid::GridMaze;

use thiserror::Error;

/// Identifier of a position in the maze graph.
///
/// An opaque, copyable handle; `GridMaze` maps cell `(row, col)` to
/// `row * width + col` but the solver never relies on that.
pub type NodeId = usize;

/// Identifier of a player presence registered on a maze.
pub type PlayerId = usize;

/// Errors from maze construction and validation.
#[derive(Debug, Error)]
pub enum MazeError {
    /// A node identifier outside the maze was supplied.
    #[error("invalid node id {0} (maze has {1} nodes)")]
    InvalidNode(NodeId, usize),
    /// A maze must contain at least one node.
    #[error("maze has no nodes")]
    Empty,
    /// Grid dimensions must both be at least one cell.
    #[error("degenerate grid dimensions {0}x{1}")]
    DegenerateGrid(usize, usize),
}

/// Read-side contract between the solver and a maze graph.
///
/// Implementations must be safe to query from multiple solver tasks
/// concurrently. `new_player` and `move_player` are side-effecting
/// bookkeeping only; the search algorithm never depends on their effects.
pub trait Maze: Send + Sync {
    /// The designated start node of this maze.
    fn start(&self) -> NodeId;

    /// Identifiers of the nodes adjacent to `node`, in ascending order.
    ///
    /// Deterministic ordering keeps sequential searches reproducible.
    fn neighbors(&self, node: NodeId) -> Vec<NodeId>;

    /// Whether `node` is a goal node.
    fn has_goal(&self, node: NodeId) -> bool;

    /// Register a new player presence at `node`.
    fn new_player(&self, node: NodeId) -> PlayerId;

    /// Move a registered player to `node`.
    fn move_player(&self, player: PlayerId, node: NodeId);
}
