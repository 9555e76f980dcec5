//! Loop configuration
//!
//! Each scheduler owns a [`LoopConfig`]; the constants below are only its
//! defaults. The config can be loaded from a TOML table:
//!
//! ```toml
//! fixed_step = 0.016666666666666666
//! max_frame_time = 0.25
//! cold_start = "prime"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CadenceError, Result};

/// Duration of one simulation tick in seconds (60 Hz).
pub const FIXED_STEP: f64 = 1.0 / 60.0;

/// Upper bound on how much time one iteration may feed into the accumulator.
pub const MAX_FRAME_TIME: f64 = 1.0 / 4.0;

/// How the very first frame's delta is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColdStart {
    /// Read the clock once before the first iteration so the first delta is
    /// the real time spent between that read and the first frame.
    #[default]
    Prime,
    /// Start from a previous reading of zero. The first delta is the clock's
    /// first reading. That is an absolute timestamp only for clocks counting
    /// from a fixed epoch, in which case the clamp cuts it to
    /// `max_frame_time`; a clock counting from its own creation yields a
    /// small delta.
    FromZero,
}

/// Timing parameters of a fixed-timestep loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopConfig {
    /// Seconds of simulated time per `update` call
    #[serde(default = "default_fixed_step")]
    pub fixed_step: f64,
    /// Clamp applied to each measured frame delta
    #[serde(default = "default_max_frame_time")]
    pub max_frame_time: f64,
    #[serde(default)]
    pub cold_start: ColdStart,
}

fn default_fixed_step() -> f64 {
    FIXED_STEP
}

fn default_max_frame_time() -> f64 {
    MAX_FRAME_TIME
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            fixed_step: default_fixed_step(),
            max_frame_time: default_max_frame_time(),
            cold_start: ColdStart::default(),
        }
    }
}

impl LoopConfig {
    /// Default config with a custom update rate in Hz
    pub fn with_fixed_hz(hz: f64) -> Self {
        Self {
            fixed_step: 1.0 / hz,
            ..Self::default()
        }
    }

    pub fn with_max_frame_time(mut self, seconds: f64) -> Self {
        self.max_frame_time = seconds;
        self
    }

    pub fn with_cold_start(mut self, cold_start: ColdStart) -> Self {
        self.cold_start = cold_start;
        self
    }

    /// Upper bound on `update` calls a single iteration can trigger.
    pub fn max_steps_per_frame(&self) -> u32 {
        (self.max_frame_time / self.fixed_step).floor() as u32
    }

    /// Check the invariants the scheduler relies on.
    pub fn validate(&self) -> Result<()> {
        if !self.fixed_step.is_finite() || self.fixed_step <= 0.0 {
            return Err(CadenceError::ConfigError(format!(
                "fixed_step must be a positive number of seconds, got {}",
                self.fixed_step
            )));
        }
        if !self.max_frame_time.is_finite() || self.max_frame_time < self.fixed_step {
            return Err(CadenceError::ConfigError(format!(
                "max_frame_time ({}) must be finite and >= fixed_step ({})",
                self.max_frame_time, self.fixed_step
            )));
        }
        Ok(())
    }

    /// Parse and validate a config from a TOML string. Missing keys take
    /// their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: LoopConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
