//! Progress reporting hook.
//!
//! The solver reports once per opening tile. Rendering is up to the caller;
//! the CLI draws a text bar, tests usually pass a closure or `NoProgress`.

/// Observer notified as the solver works through opening tiles.
pub trait Progress {
    /// Called before opening tile `index` of `total` is searched.
    fn on_branch(&mut self, index: usize, total: usize);

    /// Called once after the last opening tile.
    fn on_finish(&mut self) {}
}

/// Ignores all progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn on_branch(&mut self, _index: usize, _total: usize) {}
}

impl<F: FnMut(usize, usize)> Progress for F {
    fn on_branch(&mut self, index: usize, total: usize) {
        self(index, total)
    }
}
