//! Run command - drives the bouncing-ball demo on the wall clock

use anyhow::{Context, Result};
use cadence_runtime::{HeadlessHost, LoopScheduler};
use instant::Instant;

use crate::demo::{BouncingBall, DemoHost};

pub struct RunArgs {
    pub config: Option<String>,
    pub seconds: f64,
    pub kick_every: u64,
    pub vsync_hz: f64,
}

pub fn run(args: RunArgs) -> Result<i32> {
    if !args.seconds.is_finite() || args.seconds <= 0.0 {
        anyhow::bail!("--seconds must be a positive number, got {}", args.seconds);
    }

    let config = super::load_config(args.config.as_deref())?;
    let mut scheduler = LoopScheduler::new(config).context("Invalid loop config")?;

    let inner = if args.vsync_hz > 0.0 {
        HeadlessHost::with_refresh_rate(args.vsync_hz).context("Invalid --vsync-hz")?
    } else {
        HeadlessHost::new()
    };
    let mut host = DemoHost::new(inner, args.kick_every);
    let mut game = BouncingBall::new(args.seconds);

    log::info!(
        "Running demo for {:.2}s of simulated time (step {:.4}s, vsync {})",
        args.seconds,
        scheduler.config().fixed_step,
        if args.vsync_hz > 0.0 {
            format!("{} Hz", args.vsync_hz)
        } else {
            "off".to_string()
        }
    );

    let started = Instant::now();
    let code = scheduler
        .run(&mut host, &mut game)
        .context("Demo loop failed")?;
    let wall = started.elapsed().as_secs_f64();

    println!("Simulated: {:.3}s in {} updates", game.sim_time, game.ticks);
    println!(
        "Rendered:  {} frames ({} presented) in {:.3}s wall time",
        game.frames,
        host.frames_presented(),
        wall
    );
    println!(
        "Ball:      height {:.3}, velocity {:.3}, {} bounces, {} kicks",
        game.height, game.velocity, game.bounces, game.kicks
    );

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_paced_run() {
        let code = run(RunArgs {
            config: None,
            seconds: 0.05,
            kick_every: 2,
            vsync_hz: 200.0,
        })
        .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        let err = run(RunArgs {
            config: None,
            seconds: 0.0,
            kick_every: 0,
            vsync_hz: 0.0,
        })
        .unwrap_err();
        assert!(err.to_string().contains("--seconds"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = run(RunArgs {
            config: Some("/definitely/not/here/loop.toml".into()),
            seconds: 1.0,
            kick_every: 0,
            vsync_hz: 0.0,
        })
        .unwrap_err();
        assert!(err.to_string().contains("Failed to load loop config"));
    }
}
