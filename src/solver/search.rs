//! Exhaustive depth-first move search.
//!
//! The search works on one field and one hand per opening tile. Moves are
//! applied in place and never undone inside a branch: a sibling sees
//! whatever the siblings before it left behind. State is restored only
//! between opening tiles.
//!
//! Each applied move removes a tile for good, so a branch applies at most
//! `|hand|` moves and every node tries `2 × |hand|` candidates.
//!
//! ## Pruning
//!
//! An illegal candidate ends its branch with value `0` rather than moving on
//! to another tile at the same position. Its siblings are still tried.

use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{End, Move, MoveLog, Tile, TileSequence};
use crate::rules::RulesEngine;

use super::progress::{NoProgress, Progress};
use super::stats::SolveStats;

/// Best result found by the solver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Highest branch value.
    pub score: i64,
    /// Field left behind by the winning branch.
    pub field: TileSequence,
    /// Hand left behind by the winning branch.
    pub hand: TileSequence,
    /// Every move applied in the winning branch, in order.
    pub moves: MoveLog,
}

impl Solution {
    /// The result when no opening scores above zero.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            score: 0,
            field: TileSequence::new(),
            hand: TileSequence::new(),
            moves: MoveLog::new(),
        }
    }
}

/// Exhaustive solver.
///
/// Generic over the rules engine. Owns the engine, a progress observer and
/// the statistics of the last solve.
pub struct Solver<E: RulesEngine> {
    /// The game rules.
    engine: E,

    /// Notified once per opening tile.
    progress: Box<dyn Progress>,

    /// Statistics of the last solve.
    stats: SolveStats,
}

impl<E: RulesEngine> Solver<E> {
    /// Create a solver that reports no progress.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            progress: Box::new(NoProgress),
            stats: SolveStats::default(),
        }
    }

    /// Set a progress observer.
    pub fn with_progress<P: Progress + 'static>(mut self, progress: P) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// The rules engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Statistics of the last solve.
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Solve a hand from an empty field.
    pub fn solve_hand(&mut self, hand: &TileSequence) -> Solution {
        let mut field = TileSequence::new();
        let mut hand = hand.clone();
        self.solve(&mut field, &mut hand)
    }

    /// Try every hand tile as the opening move and keep the best branch.
    ///
    /// `field` and `hand` are used as scratch space and are back to their
    /// initial contents on return. Ties keep the earlier opening.
    pub fn solve(&mut self, field: &mut TileSequence, hand: &mut TileSequence) -> Solution {
        let start = Instant::now();
        self.stats.reset();

        let initial_field = field.clone();
        let initial_hand = hand.clone();
        let total = initial_hand.len();

        let mut best = Solution::empty();

        for (index, &opening) in initial_hand.iter().enumerate() {
            self.progress.on_branch(index, total);
            self.stats.branches += 1;

            let mut moves = MoveLog::new();
            let score = self.search(field, hand, &mut moves, End::Start, opening);
            debug!("opening {} ({}/{}) scored {}", opening, index + 1, total, score);

            if score > best.score {
                debug!("new best {} after {} moves", score, moves.len());
                best = Solution {
                    score,
                    field: field.clone(),
                    hand: hand.clone(),
                    moves,
                };
            }

            field.copy_from(&initial_field);
            hand.copy_from(&initial_hand);
        }

        self.progress.on_finish();
        self.stats.time_us = start.elapsed().as_micros() as u64;

        info!(
            "solved {} tiles: best {} ({} nodes, {} leaves, {} pruned, {} us)",
            total,
            best.score,
            self.stats.nodes,
            self.stats.leaves,
            self.stats.pruned,
            self.stats.time_us
        );

        best
    }

    /// Value of playing `tile` at `end`, then everything reachable after it.
    fn search(
        &mut self,
        field: &mut TileSequence,
        hand: &mut TileSequence,
        moves: &mut MoveLog,
        end: End,
        tile: Tile,
    ) -> i64 {
        self.stats.nodes += 1;

        if !self.engine.has_any_legal_move(field, hand) {
            self.stats.leaves += 1;
            return self.engine.score(field);
        }

        if !self.engine.is_legal(field, end, tile) {
            self.stats.pruned += 1;
            return 0;
        }

        if self.engine.apply(field, hand, end, tile) {
            moves.push(Move::new(end, tile));
            self.stats.moves_applied += 1;
        }

        // Playing the last fitting tile makes this node a leaf
        if !self.engine.has_any_legal_move(field, hand) {
            self.stats.leaves += 1;
            return self.engine.score(field);
        }

        let mut best = 0;
        let mut index = 0;

        // The hand shrinks under us, so re-check the bound and re-read the
        // tile before each child.
        while index < hand.len() {
            if let Some(next) = hand.get(index) {
                best = best.max(self.search(field, hand, moves, End::Right, next));
            }
            if let Some(next) = hand.get(index) {
                best = best.max(self.search(field, hand, moves, End::Left, next));
            }
            index += 1;
        }

        best
    }
}
