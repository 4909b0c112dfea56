//! Arena storage for search nodes.
//!
//! Every state discovered during one search lives in a [`StateArena`] owned
//! by that search's engine, and is referred to by [`StateId`] handle. The
//! predecessor chain used for path reconstruction is a chain of handles
//! rather than owning pointers, so the whole graph -- including states that
//! never make it onto the solution path -- is torn down as a unit when the
//! engine is dropped.

use crate::board::{Board, Direction};

/// Handle to a node inside a [`StateArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One search-tree node: a grid configuration plus A* bookkeeping.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub board: Board,
    /// Slides taken from the start configuration.
    pub g: u32,
    /// Heuristic estimate of slides remaining.
    pub h: u32,
    /// Priority: always `g + h`, recomputed on every estimate update.
    pub f: u32,
    /// `None` exactly for the root of the search tree.
    pub predecessor: Option<StateId>,
}

impl SearchNode {
    /// Successor of `parent` reached by one blank slide. Deep-copies the
    /// parent grid; `h` and `f` are filled by [`SearchNode::set_estimate`]
    /// once the heuristic has run.
    pub fn child_of(parent_id: StateId, parent: &SearchNode, direction: Direction) -> SearchNode {
        SearchNode {
            board: parent.board.child(direction),
            g: parent.g + 1,
            h: 0,
            f: 0,
            predecessor: Some(parent_id),
        }
    }

    /// Record the heuristic estimate and recompute the priority.
    pub fn set_estimate(&mut self, h: u32) {
        self.h = h;
        self.f = self.g + h;
    }
}

/// Append-only store of every state discovered during one search.
pub struct StateArena {
    nodes: Vec<SearchNode>,
}

impl StateArena {
    pub fn new() -> StateArena {
        StateArena { nodes: Vec::new() }
    }

    /// Allocate the root node: zero costs, no predecessor.
    pub fn new_root(&mut self, board: Board) -> StateId {
        self.alloc(SearchNode {
            board,
            g: 0,
            h: 0,
            f: 0,
            predecessor: None,
        })
    }

    pub fn alloc(&mut self, node: SearchNode) -> StateId {
        let id = StateId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: StateId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The predecessor chain from `id` back to the root, in that order.
    pub fn path_to_root(&self, id: StateId) -> Vec<StateId> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            path.push(current);
            cursor = self.get(current).predecessor;
        }
        path
    }
}

impl Default for StateArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_zero_costs_and_no_predecessor() {
        let mut arena = StateArena::new();
        let root = arena.new_root(Board::goal(3));
        let node = arena.get(root);
        assert_eq!((node.g, node.h, node.f), (0, 0, 0));
        assert!(node.predecessor.is_none());
    }

    #[test]
    fn child_increments_travel_and_links_back() {
        let mut arena = StateArena::new();
        let root = arena.new_root(Board::goal(3));

        let mut child = SearchNode::child_of(root, arena.get(root), Direction::Left);
        child.set_estimate(1);
        assert_eq!(child.g, 1);
        assert_eq!(child.f, 2);
        assert_eq!(child.predecessor, Some(root));

        let child_id = arena.alloc(child);
        assert_eq!(arena.path_to_root(child_id), vec![child_id, root]);
    }

    #[test]
    fn path_to_root_walks_the_chain() {
        let mut arena = StateArena::new();
        let root = arena.new_root(Board::goal(3));

        let mut previous = root;
        for direction in [Direction::Left, Direction::Up, Direction::Right] {
            let mut node = SearchNode::child_of(previous, arena.get(previous), direction);
            node.set_estimate(crate::heuristic::score(&node.board));
            previous = arena.alloc(node);
        }

        let path = arena.path_to_root(previous);
        assert_eq!(path.len(), 4);
        assert_eq!(*path.last().unwrap(), root);
        // g decreases by one at every hop toward the root.
        for (hop, id) in path.iter().enumerate() {
            assert_eq!(arena.get(*id).g, (path.len() - 1 - hop) as u32);
        }
    }
}
