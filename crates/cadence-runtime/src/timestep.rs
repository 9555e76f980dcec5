//! Fixed-timestep accumulator

use cadence_core::LoopConfig;

/// Result of measuring one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    /// Unclamped difference between this reading and the previous one
    pub raw: f64,
    /// Time actually added to the accumulator
    pub frame_time: f64,
    /// Whether `raw` exceeded the frame-time clamp
    pub clamped: bool,
}

/// Converts clock readings into a number of fixed simulation steps.
///
/// The accumulator never goes negative, and once `should_step` returns false
/// it holds less than one fixed step.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    fixed_step: f64,
    max_frame_time: f64,
    accumulator: f64,
    /// Previous clock reading, zero until primed or advanced
    last_time: f64,
}

impl FixedTimestep {
    /// Build from a config. The config is expected to have passed
    /// [`LoopConfig::validate`].
    pub fn new(config: &LoopConfig) -> Self {
        Self {
            fixed_step: config.fixed_step,
            max_frame_time: config.max_frame_time,
            accumulator: 0.0,
            last_time: 0.0,
        }
    }

    /// Record a reading without accumulating anything.
    pub fn prime(&mut self, now: f64) {
        self.last_time = now;
    }

    /// Measure the time since the previous reading and add it, clamped to
    /// `[0, max_frame_time]`, to the accumulator.
    pub fn advance(&mut self, now: f64) -> FrameStep {
        let raw = now - self.last_time;
        self.last_time = now;

        let clamped = raw > self.max_frame_time;
        // NaN and backwards jumps contribute nothing
        let frame_time = if raw > 0.0 {
            raw.min(self.max_frame_time)
        } else {
            0.0
        };

        self.accumulator += frame_time;

        FrameStep {
            raw,
            frame_time,
            clamped,
        }
    }

    /// Returns true if there's enough accumulated time for a fixed update step
    pub fn should_step(&self) -> bool {
        self.accumulator >= self.fixed_step
    }

    /// Consume one fixed step from the accumulator
    pub fn consume_step(&mut self) {
        self.accumulator -= self.fixed_step;
    }

    pub fn fixed_step(&self) -> f64 {
        self.fixed_step
    }

    pub fn max_frame_time(&self) -> f64 {
        self.max_frame_time
    }

    /// Unconsumed simulation time in seconds
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }
}
