//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for node storage. Nodes are stored in a
//! contiguous Vec and referenced by NodeId indices, so parent links are
//! plain indices and the whole tree is released in one drop.

use games_connect4::{Board, Player};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use crate::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree {
    /// Arena storing all nodes
    nodes: Vec<MctsNode>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl MctsTree {
    /// Create a new tree rooted at the given board.
    pub fn new(root_state: Board) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    fn allocate(&mut self, node: MctsNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a child reached by dropping into `column` from `parent_id`.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, column: usize, state: Board) -> NodeId {
        let child = MctsNode::new_child(parent_id, column as u8, state);
        let child_id = self.allocate(child);
        self.get_mut(parent_id).children[column] = Some(child_id);
        child_id
    }

    /// Pick the best child of a node.
    ///
    /// With `exploration == 0.0` children are scored by visit count alone;
    /// otherwise by UCB1. Ties are broken uniformly at random among every
    /// column that reaches the maximum. Returns `(column, child)`, or `None`
    /// if the node has no children.
    pub fn best_child(
        &self,
        node_id: NodeId,
        exploration: f64,
        rng: &mut ChaCha20Rng,
    ) -> Option<(usize, NodeId)> {
        let node = self.get(node_id);
        let mut best_value = f64::NEG_INFINITY;
        let mut best: Vec<(usize, NodeId)> = Vec::with_capacity(node.children.len());

        for (column, slot) in node.children.iter().enumerate() {
            let Some(child_id) = *slot else {
                continue;
            };
            let child = self.get(child_id);
            let value = if exploration == 0.0 {
                child.visit_count as f64
            } else {
                child.ucb1(node.visit_count, exploration)
            };

            if value > best_value {
                best_value = value;
                best.clear();
                best.push((column, child_id));
            } else if value == best_value {
                best.push((column, child_id));
            }
        }

        best.choose(rng).copied()
    }

    /// Backpropagate a rollout reward from a node up to the root.
    ///
    /// Every node on the path gains one visit. A node whose player to move
    /// is the perspective player receives `-reward`, every other node
    /// `+reward`: a node's reward values the move that led into it.
    pub fn backpropagate(&mut self, leaf_id: NodeId, reward: f64, perspective: Player) {
        let mut current_id = leaf_id;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.visit_count += 1;
            if node.to_move == perspective {
                node.reward -= reward;
            } else {
                node.reward += reward;
            }
            current_id = node.parent;
        }
    }

    /// Visit counts of the root's children, indexed by column (0 if unexpanded).
    pub fn child_visits(&self) -> Vec<u32> {
        self.get(self.root)
            .children
            .iter()
            .map(|slot| slot.map_or(0, |id| self.get(id).visit_count))
            .collect()
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visit_count,
            root_reward: root.mean_reward(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        self.get(node_id)
            .children
            .iter()
            .flatten()
            .map(|id| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_reward: f64,
    pub max_depth: u32,
}
