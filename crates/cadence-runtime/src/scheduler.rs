//! Fixed-timestep loop scheduler
//!
//! Each iteration drains input, measures the frame, runs as many fixed
//! `update` steps as the accumulated time allows, then renders and presents
//! once:
//!
//! ```text
//! while game.is_running():
//!     for event in host: game.handle_event(event)
//!     accumulator += clamp(now - last, 0, max_frame_time)
//!     while accumulator >= fixed_step:
//!         game.update(fixed_step); accumulator -= fixed_step
//!     game.render(); host.present()
//! ```

use cadence_core::{ColdStart, LoopConfig, Result, EXIT_SUCCESS};

use crate::clock::{Clock, MonotonicClock};
use crate::event_queue::EventSource;
use crate::game::Game;
use crate::host::Present;
use crate::timestep::FixedTimestep;

/// Drives a [`Game`] with a fixed simulation step, decoupled from the rate at
/// which frames are rendered and presented.
///
/// The scheduler owns its configuration and clock. Accumulated time is local
/// to each [`run`](Self::run) call.
#[derive(Debug)]
pub struct LoopScheduler<C = MonotonicClock> {
    config: LoopConfig,
    clock: C,
}

impl LoopScheduler<MonotonicClock> {
    /// Scheduler using the monotonic wall clock
    pub fn new(config: LoopConfig) -> Result<Self> {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> LoopScheduler<C> {
    pub fn with_clock(config: LoopConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, clock })
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run the loop until `game.is_running()` returns false.
    ///
    /// Returns [`EXIT_SUCCESS`] on a clean stop. The first error raised by a
    /// game callback or by `present` ends the loop immediately and is
    /// returned as is; nothing else is called after it.
    pub fn run<H, G>(&mut self, host: &mut H, game: &mut G) -> Result<i32>
    where
        G: Game,
        H: EventSource<Event = G::Event> + Present,
    {
        let mut timestep = FixedTimestep::new(&self.config);
        if self.config.cold_start == ColdStart::Prime {
            timestep.prime(self.clock.now());
        }

        log::debug!(
            "Loop started: fixed_step={:.6}s max_frame_time={:.3}s cold_start={:?}",
            timestep.fixed_step(),
            timestep.max_frame_time(),
            self.config.cold_start
        );

        let dt = timestep.fixed_step();
        let mut frames: u64 = 0;
        let mut updates: u64 = 0;

        while game.is_running() {
            while let Some(event) = host.poll_event() {
                game.handle_event(event)?;
            }

            let frame = timestep.advance(self.clock.now());
            if frame.clamped {
                log::debug!(
                    "Frame {frames} took {:.3}s, clamped to {:.3}s",
                    frame.raw,
                    frame.frame_time
                );
            }

            let mut steps = 0u32;
            while timestep.should_step() {
                game.update(dt)?;
                timestep.consume_step();
                steps += 1;
            }

            log::trace!(
                "Frame {frames}: dt={:.6}s steps={steps} accumulator={:.6}s",
                frame.frame_time,
                timestep.accumulator()
            );

            game.render()?;
            host.present()?;

            frames += 1;
            updates += u64::from(steps);
        }

        log::debug!("Loop stopped after {frames} frames and {updates} updates");
        Ok(EXIT_SUCCESS)
    }
}

/// Run `game` with the default 60 Hz step and 250 ms clamp on the monotonic
/// wall clock.
pub fn run_game<H, G>(host: &mut H, game: &mut G) -> Result<i32>
where
    G: Game,
    H: EventSource<Event = G::Event> + Present,
{
    LoopScheduler::new(LoopConfig::default())?.run(host, game)
}
