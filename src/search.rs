//! A* search driver.
//!
//! The `SearchEngine` owns one search's entire working set -- state arena,
//! fringe, and closed set -- so concurrent searches never alias each other.
//! The driver loop itself is single-threaded: parallelism is confined to
//! the per-expansion fork/join inside [`crate::expand`]. `step()` runs one
//! dequeue/expand/merge cycle so that callers wanting a bounded search can
//! impose their own iteration cap; `run()` loops to a terminal outcome.

use crate::board::Board;
use crate::closed::ClosedSet;
use crate::error::PuzzleError;
use crate::expand::{expand, merge_valid};
use crate::fringe::Fringe;
use crate::generate::scrambled_start;
use crate::state::{StateArena, StateId};
use log::debug;

/// One node of a reconstructed solution chain.
#[derive(Clone, Debug)]
pub struct PathState {
    pub board: Board,
    pub g: u32,
    pub h: u32,
    pub f: u32,
}

/// An owned solution chain, ordered goal first, start configuration last.
#[derive(Clone, Debug)]
pub struct Solution {
    states: Vec<PathState>,
}

impl Solution {
    /// The chain goal -> ... -> root. Never empty.
    pub fn states(&self) -> &[PathState] {
        &self.states
    }

    /// Number of slides in the solution (the goal node's `g`).
    pub fn moves(&self) -> u32 {
        self.states[0].g
    }

    pub fn goal_state(&self) -> &PathState {
        &self.states[0]
    }

    pub fn start_state(&self) -> &PathState {
        self.states.last().expect("solution chain is never empty")
    }
}

/// Terminal outcome of a search.
pub enum SearchOutcome {
    /// The goal was reached; the chain is complete and owned by the caller.
    Solved(Solution),
    /// The fringe emptied without reaching the goal. Only reachable from
    /// malformed or unsolvable start configurations -- the factory never
    /// produces one -- but defined and reported rather than undefined.
    Exhausted,
}

/// Result of a single driver iteration.
pub enum StepResult {
    /// More work remains; call `step()` again.
    Running,
    /// Terminal: goal dequeued.
    Solved(Solution),
    /// Terminal: fringe empty.
    Exhausted,
}

/// Counters reported at termination (instrumentation only).
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// States dequeued and expanded.
    pub expanded: u64,
    /// In-bounds candidates generated across all expansions.
    pub generated: u64,
    /// Candidates discarded by the duplicate filter.
    pub duplicates: u64,
    /// Candidates merged into the fringe.
    pub merged: u64,
    /// Largest fringe length observed.
    pub peak_fringe: usize,
}

/// Drives the A* loop over one puzzle instance.
pub struct SearchEngine {
    arena: StateArena,
    fringe: Fringe,
    closed: ClosedSet,
    goal: Board,
    stats: SearchStats,
}

impl SearchEngine {
    /// Seed the fringe with the start configuration as the search root.
    pub fn new(start: Board, goal: Board) -> SearchEngine {
        let mut arena = StateArena::new();
        let root = arena.new_root(start);
        let mut fringe = Fringe::new();
        fringe.insert(0, root);

        SearchEngine {
            arena,
            fringe,
            closed: ClosedSet::new(),
            goal,
            stats: SearchStats {
                peak_fringe: 1,
                ..Default::default()
            },
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// One dequeue/expand/merge cycle.
    pub fn step(&mut self) -> StepResult {
        let Some(entry) = self.fringe.extract_min() else {
            debug!(
                "search exhausted: expanded={}, generated={}, duplicates={}",
                self.stats.expanded, self.stats.generated, self.stats.duplicates
            );
            return StepResult::Exhausted;
        };
        let current = entry.id;

        if self.arena.get(current).board == self.goal {
            let solution = self.reconstruct(current);
            debug!(
                "solved in {} moves: expanded={}, generated={}, duplicates={}, peak_fringe={}",
                solution.moves(),
                self.stats.expanded,
                self.stats.generated,
                self.stats.duplicates,
                self.stats.peak_fringe
            );
            return StepResult::Solved(solution);
        }

        let slots = expand(&self.arena, current, &self.fringe, &self.closed);
        let merged = merge_valid(&mut self.arena, &mut self.fringe, slots);
        self.closed.push(current);

        let in_bounds = crate::board::Direction::ALL
            .iter()
            .filter(|direction| self.arena.get(current).board.can_slide(**direction))
            .count();

        self.stats.expanded += 1;
        self.stats.generated += in_bounds as u64;
        self.stats.merged += merged as u64;
        self.stats.duplicates += (in_bounds - merged) as u64;
        self.stats.peak_fringe = self.stats.peak_fringe.max(self.fringe.len());

        StepResult::Running
    }

    /// Loop `step()` until the search terminates.
    pub fn run(&mut self) -> SearchOutcome {
        loop {
            match self.step() {
                StepResult::Running => continue,
                StepResult::Solved(solution) => return SearchOutcome::Solved(solution),
                StepResult::Exhausted => return SearchOutcome::Exhausted,
            }
        }
    }

    /// Materialize the predecessor chain goal -> ... -> root into an owned
    /// `Solution`, copying boards out of the arena.
    fn reconstruct(&self, goal_id: StateId) -> Solution {
        let states = self
            .arena
            .path_to_root(goal_id)
            .into_iter()
            .map(|id| {
                let node = self.arena.get(id);
                PathState {
                    board: node.board.clone(),
                    g: node.g,
                    h: node.h,
                    f: node.f,
                }
            })
            .collect();
        Solution { states }
    }
}

/// Solve a freshly scrambled puzzle of the given dimension and complexity.
pub fn solve(n: usize, complexity: u32) -> Result<SearchOutcome, PuzzleError> {
    let start = scrambled_start(n, complexity)?;
    Ok(solve_board(start))
}

/// Solve an explicit start configuration against the canonical goal grid of
/// the same dimension.
pub fn solve_board(start: Board) -> SearchOutcome {
    let goal = Board::goal(start.dimension());
    SearchEngine::new(start, goal).run()
}
