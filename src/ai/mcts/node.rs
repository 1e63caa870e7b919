//! MCTS tree node representation.
//!
//! Each node holds the board reached by `action` from its parent and the
//! player who made that move. Statistics are always from the searching
//! agent's point of view.

use std::f64::consts::SQRT_2;

use crate::game::{Board, Player};

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode {
    /// Parent node index (None for root). Non-owning back edge.
    pub parent: Option<NodeId>,

    /// Column played from the parent to reach this node (None for root)
    pub action: Option<usize>,

    /// Board snapshot at this node
    pub board: Board,

    /// Player whose move produced this board
    pub mover: Player,

    /// Columns not yet expanded into children
    pub untried: Vec<usize>,

    /// Children in expansion order
    pub children: Vec<NodeId>,

    /// Sum of backpropagated rewards
    pub wins: f64,

    /// Number of times this node has been visited
    pub visits: u32,
}

impl MctsNode {
    /// Create a new root node. `mover` is the player who made the move
    /// leading to `board`, i.e. the opponent of the searching agent.
    pub fn new_root(board: Board, mover: Player) -> Self {
        Self::new(None, None, board, mover)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, action: usize, board: Board, mover: Player) -> Self {
        Self::new(Some(parent), Some(action), board, mover)
    }

    fn new(parent: Option<NodeId>, action: Option<usize>, board: Board, mover: Player) -> Self {
        // A finished position is never expanded further; a full board yields
        // no legal actions on its own.
        let untried = if board.is_connect_four(mover) {
            Vec::new()
        } else {
            board.legal_actions()
        };
        Self {
            parent,
            action,
            board,
            mover,
            untried,
            children: Vec::new(),
            wins: 0.0,
            visits: 0,
        }
    }

    /// True if the move into this node completed four in a row.
    #[inline]
    pub fn is_immediate_win(&self) -> bool {
        self.board.is_connect_four(self.mover)
    }

    /// No untried actions and no children: nothing left to grow.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.untried.is_empty() && self.children.is_empty()
    }

    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Average reward; 0.0 if never visited.
    #[inline]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f64
        }
    }

    /// UCT score: `wins/visits + sqrt(2) * sqrt(ln(parent_visits) / visits)`.
    /// Unvisited nodes score +inf.
    #[inline]
    pub fn uct_score(&self, parent_visits: u32) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let visits = self.visits as f64;
        let exploration = ((parent_visits as f64).ln() / visits).sqrt();
        self.wins / visits + SQRT_2 * exploration
    }

    /// Record one visit with the given reward.
    #[inline]
    pub fn update(&mut self, reward: f64) {
        self.wins += reward;
        self.visits += 1;
    }
}
