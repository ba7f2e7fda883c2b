//! Exhaustive solver for linear domino.
//!
//! ## Overview
//!
//! The solver tries every hand tile as the opening move and runs a
//! depth-first search from each, returning the best score together with the
//! field, hand and move log of the winning branch.
//!
//! ## Usage
//!
//! ```rust
//! use linear_domino::core::{Tile, TileSequence};
//! use linear_domino::games::linear::LinearDomino;
//! use linear_domino::solver::Solver;
//!
//! let hand: TileSequence = vec![Tile::new(1, 2), Tile::new(2, 3)].into();
//!
//! let mut solver = Solver::new(LinearDomino::new());
//! let solution = solver.solve_hand(&hand);
//!
//! assert_eq!(solution.score, 8);
//! assert_eq!(solution.moves.len(), 2);
//! ```
//!
//! ## Progress
//!
//! Any `FnMut(usize, usize)` works as a progress observer:
//!
//! ```rust,ignore
//! let solver = Solver::new(LinearDomino::new())
//!     .with_progress(|index: usize, total: usize| eprintln!("{}/{}", index + 1, total));
//! ```

pub mod progress;
pub mod search;
pub mod stats;

pub use progress::{NoProgress, Progress};
pub use search::{Solution, Solver};
pub use stats::SolveStats;
