//! MCTS tree structure with arena allocation.
//!
//! Nodes live in a contiguous Vec and reference each other by `NodeId`.
//! Children are owned by the arena; the parent link is a plain index used
//! only for backpropagation.

use rand::Rng;

use crate::error::AgentError;
use crate::game::{Board, Player};

use super::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<MctsNode>,
}

impl SearchTree {
    /// Create a new tree rooted at `board`, where `mover` made the last move.
    pub fn new(board: Board, mover: Player) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(board, mover)],
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.index()]
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn allocate(&mut self, node: MctsNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Child of `id` with the highest UCT score. Ties keep the earliest child.
    pub fn select_child(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id);
        let mut best: Option<(NodeId, f64)> = None;
        for &child_id in &node.children {
            let score = self.get(child_id).uct_score(node.visits);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child_id, score)),
            }
        }
        best.map(|(child_id, _)| child_id)
    }

    /// Descend from the root until reaching a node with untried actions or
    /// without children.
    pub fn select(&self) -> NodeId {
        let mut current = self.root();
        loop {
            let node = self.get(current);
            if !node.untried.is_empty() || node.children.is_empty() {
                return current;
            }
            match self.select_child(current) {
                Some(child) => current = child,
                None => return current,
            }
        }
    }

    /// Expand `id` with a uniformly random untried action.
    pub fn expand<R: Rng + ?Sized>(&mut self, id: NodeId, rng: &mut R) -> Result<NodeId, AgentError> {
        let untried = &self.get(id).untried;
        if untried.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }
        let action = untried[rng.random_range(0..untried.len())];
        self.expand_action(id, action)
    }

    /// Expand `id` with a specific untried action. The move is played by the
    /// opponent of the node's mover.
    pub fn expand_action(&mut self, id: NodeId, action: usize) -> Result<NodeId, AgentError> {
        let parent = self.get(id);
        let position = parent
            .untried
            .iter()
            .position(|&a| a == action)
            .ok_or(AgentError::NoLegalMoves)?;
        let mover = parent.mover.other();
        let board = parent.board.with_action(action, mover)?;

        let child_id = self.allocate(MctsNode::new_child(id, action, board, mover));
        let parent = self.get_mut(id);
        parent.untried.remove(position);
        parent.children.push(child_id);
        Ok(child_id)
    }

    /// Add `reward` to every node from `leaf` up to the root inclusive.
    /// The same reward is applied at every level.
    pub fn backpropagate(&mut self, leaf: NodeId, reward: f64) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.update(reward);
            current = node.parent;
        }
    }

    /// Final decision at the root: an immediately winning child if one
    /// exists, else the child with the best average reward (first on ties).
    pub fn best_action(&self) -> Option<usize> {
        let root = self.get(self.root());
        let mut best: Option<(usize, f64)> = None;
        for &child_id in &root.children {
            let child = self.get(child_id);
            let Some(action) = child.action else { continue };
            if child.is_immediate_win() {
                return Some(action);
            }
            let score = child.mean_reward();
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((action, score)),
            }
        }
        best.map(|(action, _)| action)
    }
}
