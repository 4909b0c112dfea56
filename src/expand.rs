//! Successor generation: the fork/join step of each A* iteration.
//!
//! The four candidate slides of a dequeued state are independent -- each
//! worker reads the immutable parent grid plus read-only fringe/closed
//! membership and writes only its own output slot -- so they run as scoped
//! threads forked together and joined before anything is merged. All
//! fringe, closed, and arena mutation happens single-threaded in
//! [`merge_valid`], strictly after the join.

use crate::board::Direction;
use crate::closed::ClosedSet;
use crate::fringe::Fringe;
use crate::heuristic;
use crate::state::{SearchNode, StateArena, StateId};
use log::trace;
use std::thread;

/// Generate up to four successors of `current`, one slot per direction in
/// {left, right, down, up} order.
///
/// A slot is `None` when the slide is out of bounds for the blank position,
/// or when the candidate duplicates a state already present in the fringe
/// or the closed set (the candidate is dropped before it ever reaches the
/// arena).
pub fn expand(
    arena: &StateArena,
    current: StateId,
    fringe: &Fringe,
    closed: &ClosedSet,
) -> [Option<SearchNode>; 4] {
    let parent = arena.get(current);

    thread::scope(|scope| {
        Direction::ALL
            .map(|direction| {
                scope.spawn(move || candidate(arena, current, parent, direction, fringe, closed))
            })
            .map(|worker| worker.join().expect("direction worker panicked"))
    })
}

/// Build, score, and duplicate-filter one directional candidate.
fn candidate(
    arena: &StateArena,
    parent_id: StateId,
    parent: &SearchNode,
    direction: Direction,
    fringe: &Fringe,
    closed: &ClosedSet,
) -> Option<SearchNode> {
    if !parent.board.can_slide(direction) {
        return None;
    }

    let mut node = SearchNode::child_of(parent_id, parent, direction);
    node.set_estimate(heuristic::score(&node.board));

    if fringe.contains(arena, &node.board) || closed.contains(arena, &node.board) {
        trace!("discarding duplicate successor ({} slide)", direction);
        return None;
    }

    Some(node)
}

/// Merge every surviving slot into the fringe, returning how many were
/// inserted. Used for instrumentation; correctness does not depend on the
/// count.
pub fn merge_valid(
    arena: &mut StateArena,
    fringe: &mut Fringe,
    slots: [Option<SearchNode>; 4],
) -> usize {
    let mut merged = 0;
    for node in slots.into_iter().flatten() {
        let f = node.f;
        let id = arena.alloc(node);
        fringe.insert(f, id);
        merged += 1;
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn seeded(start: Board) -> (StateArena, StateId, Fringe, ClosedSet) {
        let mut arena = StateArena::new();
        let root = arena.new_root(start);
        (arena, root, Fringe::new(), ClosedSet::new())
    }

    #[test]
    fn corner_blank_yields_two_slots() {
        // Blank in the bottom-right corner: only left and up are in bounds.
        let (arena, root, fringe, closed) = seeded(Board::goal(3));
        let slots = expand(&arena, root, &fringe, &closed);

        assert!(slots[0].is_some()); // left
        assert!(slots[1].is_none()); // right
        assert!(slots[2].is_none()); // down
        assert!(slots[3].is_some()); // up
    }

    #[test]
    fn center_blank_yields_four_slots() {
        let start = Board::from_tiles(3, vec![1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        let (arena, root, fringe, closed) = seeded(start);
        let slots = expand(&arena, root, &fringe, &closed);
        assert!(slots.iter().all(Option::is_some));
    }

    #[test]
    fn slots_carry_scored_costs() {
        let (arena, root, fringe, closed) = seeded(Board::goal(3));
        let slots = expand(&arena, root, &fringe, &closed);

        let left = slots[0].as_ref().unwrap();
        assert_eq!(left.g, 1);
        assert_eq!(left.h, crate::heuristic::score(&left.board));
        assert_eq!(left.f, left.g + left.h);
        assert_eq!(left.predecessor, Some(root));
    }

    #[test]
    fn closed_duplicates_are_discarded() {
        let (mut arena, root, fringe, mut closed) = seeded(Board::goal(3));

        // Pretend the left successor was already expanded.
        let left = Board::goal(3).child(Direction::Left);
        let left_id = arena.new_root(left);
        closed.push(left_id);

        let slots = expand(&arena, root, &fringe, &closed);
        assert!(slots[0].is_none());
        assert!(slots[3].is_some());
    }

    #[test]
    fn fringe_duplicates_are_discarded() {
        let (mut arena, root, mut fringe, closed) = seeded(Board::goal(3));

        let up = Board::goal(3).child(Direction::Up);
        let up_id = arena.new_root(up);
        fringe.insert(0, up_id);

        let slots = expand(&arena, root, &fringe, &closed);
        assert!(slots[0].is_some());
        assert!(slots[3].is_none());
    }

    #[test]
    fn merge_valid_counts_insertions() {
        let (mut arena, root, mut fringe, closed) = seeded(Board::goal(3));
        let slots = expand(&arena, root, &fringe, &closed);

        let merged = merge_valid(&mut arena, &mut fringe, slots);
        assert_eq!(merged, 2);
        assert_eq!(fringe.len(), 2);
        assert_eq!(arena.len(), 3); // root + two successors
    }
}
