//! Game trait driven by the loop scheduler

use cadence_core::Result;

/// A game (or any simulation) that can be driven by [`LoopScheduler`].
///
/// Callbacks run on the loop's thread in a fixed order each iteration:
/// every pending event through `handle_event`, then zero or more `update`
/// calls, then one `render`. An error returned from any callback stops the
/// loop and is handed back to the caller of `run` unchanged.
///
/// [`LoopScheduler`]: crate::LoopScheduler
pub trait Game {
    /// Input event type delivered by the host's event source
    type Event;

    /// Checked at the top of every iteration. Returning false stops the loop.
    fn is_running(&self) -> bool;

    fn handle_event(&mut self, event: Self::Event) -> Result<()>;

    /// Advance the simulation by `dt` seconds.
    ///
    /// `dt` is always the scheduler's fixed step, so simulation results do not
    /// depend on the frame rate.
    fn update(&mut self, dt: f64) -> Result<()>;

    /// Draw the current state. Called exactly once per iteration.
    fn render(&mut self) -> Result<()>;
}
