//! Shared state and completion-event channel for parallel search tasks.

#![allow(dead_code)]

use crate::maze::NodeId;
use crossbeam_channel::{unbounded, Receiver, Sender};
use dashmap::{DashMap, DashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Completion report sent by each search task to the run's collector.
#[derive(Debug, Clone)]
pub struct TaskEvent {
    /// Identifier of the reporting task (0 is the root task).
    pub task_id: usize,
    /// Node the task started exploring from.
    pub start_node: NodeId,
    /// Number of nodes whose neighbor lists the task expanded.
    pub nodes_expanded: u64,
    /// Whether the task itself reached a goal node.
    pub found_goal: bool,
}

/// Create the channel tasks report completion events on.
///
/// Unbounded so that a finishing task never blocks on the collector.
pub fn task_event_channel() -> (Sender<TaskEvent>, Receiver<TaskEvent>) {
    unbounded()
}

/// State shared by every task of one search run.
///
/// One instance is created per run and handed to tasks behind an `Arc`, so
/// independent runs (and tests) never interfere with each other. The visited
/// set and the stop flag are the only cross-task synchronization points the
/// algorithm needs for correctness; the predecessor map additionally keeps
/// first-write-wins semantics per key so a full chain from the run's start
/// to a goal stays reconstructible under concurrent discovery.
#[derive(Debug, Default)]
pub struct SharedSearchState {
    /// Nodes whose neighbor lists have been claimed for expansion.
    visited: DashSet<NodeId>,
    /// For each discovered node, the node it was first discovered from.
    predecessor: DashMap<NodeId, NodeId>,
    /// Set once a goal is confirmed; read by every task each iteration.
    stop: AtomicBool,
    /// Total neighbor-list expansions across all tasks.
    nodes_expanded: AtomicU64,
    /// Number of task identifiers handed out so far.
    next_task_id: AtomicU64,
}

impl SharedSearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically mark `node` visited. Returns true exactly once per node:
    /// the caller that sees true owns the expansion of that node.
    pub fn try_visit(&self, node: NodeId) -> bool {
        self.visited.insert(node)
    }

    /// Whether `node` has already been marked visited.
    pub fn was_visited(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }

    /// Number of nodes marked visited so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Record `pred` as the predecessor of `node`. The first writer for a
    /// given node wins; later writes are no-ops.
    pub fn record_predecessor(&self, node: NodeId, pred: NodeId) {
        self.predecessor.entry(node).or_insert(pred);
    }

    /// The recorded predecessor of `node`, if any.
    pub fn predecessor_of(&self, node: NodeId) -> Option<NodeId> {
        self.predecessor.get(&node).map(|entry| *entry)
    }

    /// Check whether a goal has been confirmed somewhere in the run.
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    /// Signal every task to wind down.
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Count one neighbor-list expansion.
    pub fn note_expansion(&self) {
        self.nodes_expanded.fetch_add(1, Ordering::SeqCst);
    }

    /// Total neighbor-list expansions so far.
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded.load(Ordering::SeqCst)
    }

    /// Hand out the next task identifier (0 for the root task).
    pub fn next_task_id(&self) -> usize {
        self.next_task_id.fetch_add(1, Ordering::SeqCst) as usize
    }

    /// Number of tasks started so far.
    pub fn tasks_started(&self) -> u64 {
        self.next_task_id.load(Ordering::SeqCst)
    }

    /// Reconstruct the path from `from` to `to` by walking the predecessor
    /// chain backwards from `to`.
    ///
    /// Returns `None` when the chain does not lead back to `from`, which can
    /// happen when another task won the predecessor race somewhere along the
    /// route this task took.
    pub fn path_from_to(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        let mut path = Vec::new();
        let mut current = to;
        loop {
            path.push(current);
            if current == from {
                break;
            }
            current = self.predecessor_of(current)?;
        }
        path.reverse();
        Some(path)
    }
}
