//! Admissible cost-to-go estimate for A*.
//!
//! The estimate is the Manhattan-distance sum over all misplaced tiles plus
//! a linear-conflict correction: two tiles that both sit in their goal row
//! (or column) but in swapped order must pass around each other, which costs
//! at least two slides beyond what Manhattan distance accounts for. The
//! correction keeps the estimate admissible while being noticeably better
//! informed than raw Manhattan distance.

use crate::board::Board;
use itertools::Itertools;

/// Estimated number of slides remaining to reach the goal.
///
/// Pure function of the grid; zero exactly at the goal configuration.
pub fn score(board: &Board) -> u32 {
    manhattan(board) + 2 * linear_conflicts(board)
}

fn manhattan(board: &Board) -> u32 {
    let n = board.dimension();
    let mut distance = 0u32;

    for row in 0..n {
        for col in 0..n {
            let tile = board.get(row, col);
            if tile == 0 {
                continue;
            }

            let goal_row = (tile as usize - 1) / n;
            let goal_col = (tile as usize - 1) % n;
            distance += (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32;
        }
    }

    distance
}

fn linear_conflicts(board: &Board) -> u32 {
    let n = board.dimension();
    let mut conflicts = 0u32;

    // Rows: every unordered pair of non-blank tiles that both belong to the
    // row they are on, with values in swapped order.
    for row in 0..n {
        for (left_col, right_col) in (0..n).tuple_combinations() {
            let left = board.get(row, left_col);
            let right = board.get(row, right_col);
            if left == 0 || right == 0 {
                continue;
            }

            let left_home = (left as usize - 1) / n == row;
            let right_home = (right as usize - 1) / n == row;
            if left_home && right_home && left > right {
                conflicts += 1;
            }
        }
    }

    // Columns, symmetrically.
    for col in 0..n {
        for (upper_row, lower_row) in (0..n).tuple_combinations() {
            let upper = board.get(upper_row, col);
            let lower = board.get(lower_row, col);
            if upper == 0 || lower == 0 {
                continue;
            }

            let upper_home = (upper as usize - 1) % n == col;
            let lower_home = (lower as usize - 1) % n == col;
            if upper_home && lower_home && upper > lower {
                conflicts += 1;
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;

    #[test]
    fn zero_at_goal() {
        assert_eq!(score(&Board::goal(3)), 0);
        assert_eq!(score(&Board::goal(4)), 0);
    }

    #[test]
    fn one_slide_from_goal() {
        // [[1,2,3],[4,5,6],[7,0,8]]: tile 8 is one column off, no conflicts.
        let board = Board::goal(3).child(Direction::Left);
        assert_eq!(score(&board), 1);
    }

    #[test]
    fn row_conflict_adds_two_per_pair() {
        // 2 and 1 are both in their goal row but swapped: manhattan 2,
        // one conflict worth 2 extra.
        let board = Board::from_tiles(3, vec![2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert_eq!(score(&board), 4);
    }

    #[test]
    fn column_conflict_adds_two_per_pair() {
        // 4 and 1 swapped within their goal column.
        let board = Board::from_tiles(3, vec![4, 2, 3, 1, 5, 6, 7, 8, 0]).unwrap();
        assert_eq!(score(&board), 4);
    }

    #[test]
    fn out_of_line_tiles_do_not_conflict() {
        // 5 and 4 sit in the top row in swapped order, but neither belongs
        // to that row (and no column pair is in its goal column), so only
        // manhattan distance applies.
        let board = Board::from_tiles(3, vec![5, 4, 3, 2, 1, 6, 7, 8, 0]).unwrap();
        assert_eq!(linear_conflicts(&board), 0);
    }

    #[test]
    fn estimate_never_exceeds_true_distance_on_short_paths() {
        // Walking k slides away from the goal can never produce an estimate
        // above k, or the heuristic would be inadmissible.
        let mut board = Board::goal(3);
        let walk = [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Up,
            Direction::Left,
        ];
        for (taken, direction) in walk.into_iter().enumerate() {
            board.slide(direction);
            assert!(score(&board) <= taken as u32 + 1);
        }
    }
}
