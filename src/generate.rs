//! Start/goal factory.
//!
//! Scrambled starts are produced by walking the blank away from the goal
//! with random legal slides. Any sequence of legal slides preserves the
//! solvability parity, so every board this module returns is solvable by
//! construction -- there is no rejection sampling and no need to re-check.

use crate::board::{Board, Direction};
use crate::constants::MIN_DIMENSION;
use crate::error::PuzzleError;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// The canonical goal grid for the given dimension.
pub fn goal_board(n: usize) -> Result<Board, PuzzleError> {
    if n < MIN_DIMENSION {
        return Err(PuzzleError::InvalidDimension { n });
    }
    Ok(Board::goal(n))
}

/// A guaranteed-solvable start configuration, `complexity` random legal
/// slides away from the goal.
///
/// The direction of each slide is chosen uniformly among the moves that are
/// in bounds for the current blank position. `complexity = 0` returns the
/// goal itself.
pub fn scrambled_start(n: usize, complexity: u32) -> Result<Board, PuzzleError> {
    let mut board = goal_board(n)?;
    let mut rng = thread_rng();

    for _ in 0..complexity {
        let legal: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|direction| board.can_slide(*direction))
            .collect();
        // Every blank position has at least two legal slides.
        let direction = legal
            .choose(&mut rng)
            .copied()
            .expect("no legal slide available");
        board.slide(direction);
    }

    debug_assert!(board.is_solvable());
    Ok(board)
}
