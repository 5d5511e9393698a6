//! MCTS tree node representation.
//!
//! Each node represents a board reached by dropping a disc into `action`
//! from the parent. Nodes store the visit statistics used for UCB1
//! selection and the final visit-count vote.

use games_connect4::{Board, Player};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Column that led to this node from parent (0 for root)
    pub action: u8,

    /// Board at this node
    pub state: Board,

    /// Player to move at this node, derived from piece counts
    pub to_move: Player,

    /// Whether this is a terminal state (win or draw)
    pub is_terminal: bool,

    /// Legal moves mask at this state (bit c = column c accepts a disc)
    pub legal_moves_mask: u64,

    /// Number of times this node has been visited
    pub visit_count: u32,

    /// Sum of rewards backpropagated through this node, signed relative to
    /// the perspective player of the search.
    pub reward: f64,

    /// One slot per column. `None` until the column is expanded.
    pub children: Box<[Option<NodeId>]>,
}

impl MctsNode {
    /// Create a new root node.
    pub fn new_root(state: Board) -> Self {
        Self::new_child(NodeId::NONE, 0, state)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, action: u8, state: Board) -> Self {
        let to_move = state.next_to_move();
        let is_terminal = state.is_terminal();
        let legal_moves_mask = if is_terminal {
            0
        } else {
            state.legal_moves_mask()
        };
        let children = vec![None; state.width()].into_boxed_slice();

        Self {
            parent,
            action,
            state,
            to_move,
            is_terminal,
            legal_moves_mask,
            visit_count: 0,
            reward: 0.0,
            children,
        }
    }

    /// Child reached by dropping into `column`, if expanded.
    #[inline]
    pub fn child(&self, column: usize) -> Option<NodeId> {
        self.children.get(column).copied().flatten()
    }

    /// Number of expanded children.
    #[inline]
    pub fn num_children(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    /// True once every legal move has a child.
    ///
    /// Full columns never get a child, so this compares against the legal
    /// move count rather than the board width.
    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.num_children() >= self.legal_moves_mask.count_ones() as usize
    }

    /// Legal columns that do not have a child yet, in ascending order.
    pub fn untried_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.children.len())
            .filter(move |&c| (self.legal_moves_mask >> c) & 1 == 1 && self.children[c].is_none())
    }

    /// Mean reward = reward / visit_count. Returns 0.0 if never visited.
    #[inline]
    pub fn mean_reward(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.reward / self.visit_count as f64
        }
    }

    /// UCB1 score used by the parent when choosing among its children.
    ///
    /// UCB1 = reward / N + c * sqrt(ln(N_parent) / N)
    ///
    /// Unvisited nodes score infinity so they are always tried first.
    #[inline]
    pub fn ucb1(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visit_count == 0 {
            return f64::INFINITY;
        }
        let visits = self.visit_count as f64;
        self.reward / visits + exploration * ((parent_visits as f64).ln() / visits).sqrt()
    }
}
