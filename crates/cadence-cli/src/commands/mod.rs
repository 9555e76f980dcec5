pub mod replay;
pub mod run;

use anyhow::{Context, Result};
use cadence_core::LoopConfig;

/// Load the loop config from `path`, or use the defaults
pub fn load_config(path: Option<&str>) -> Result<LoopConfig> {
    match path {
        Some(path) => LoopConfig::load(path)
            .with_context(|| format!("Failed to load loop config: {}", path)),
        None => Ok(LoopConfig::default()),
    }
}
