//! Cadence Runtime - Fixed-timestep game loop
//!
//! Provides the loop scheduler and the capabilities it drives:
//! - `LoopScheduler` / `run_game` - fixed-step update, once-per-frame render
//! - `FixedTimestep` - clamped time accumulator
//! - `Clock` - `MonotonicClock` for real time, `ScriptedClock` for replays
//! - `Game` - trait the consumer implements
//! - `EventSource` / `Present` - host capabilities, with `EventQueue` and
//!   `HeadlessHost` as in-memory implementations

mod clock;
mod event_queue;
mod game;
mod host;
mod scheduler;
mod timestep;

pub use clock::{Clock, MonotonicClock, ScriptedClock};
pub use event_queue::{EventQueue, EventSource};
pub use game::Game;
pub use host::{HeadlessHost, Present};
pub use scheduler::{run_game, LoopScheduler};
pub use timestep::{FixedTimestep, FrameStep};
