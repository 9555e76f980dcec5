//! Cadence Core - Foundational types for the Cadence loop scheduler
//!
//! This crate provides the types that the runtime and the CLI share:
//! - `LoopConfig` - fixed step, frame-time clamp and cold-start policy
//! - `ColdStart` - how the first frame's delta is measured
//! - Error types and Result alias

mod config;
mod error;

pub use config::{ColdStart, LoopConfig, FIXED_STEP, MAX_FRAME_TIME};
pub use error::{CadenceError, Result};

/// Status code returned by a loop that stopped cleanly.
pub const EXIT_SUCCESS: i32 = 0;
