//! Replay command - feeds scripted frame deltas through the scheduler
//!
//! Useful for checking how a given sequence of frame times turns into fixed
//! updates, e.g. after a stall:
//!
//!   cadence replay --deltas 0,0.02,0.02,0.3

use anyhow::{Context, Result};
use cadence_core::{ColdStart, LoopConfig};
use cadence_runtime::{EventQueue, EventSource, Game, LoopScheduler, Present, ScriptedClock};
use serde::Serialize;

pub struct ReplayArgs {
    pub deltas: Vec<f64>,
    pub start: f64,
    pub config: Option<String>,
    pub format: String,
}

/// What happened in one replayed frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: usize,
    /// Supplied frame delta, before clamping
    pub raw_dt: f64,
    pub updates: u32,
    /// Simulated time after this frame's updates
    pub sim_time: f64,
}

/// Counts updates per frame and stops after a fixed number of frames
struct ReplayGame {
    frame_limit: usize,
    pending_updates: u32,
    sim_time: f64,
    updates: Vec<(u32, f64)>,
}

impl Game for ReplayGame {
    type Event = ();

    fn is_running(&self) -> bool {
        self.updates.len() < self.frame_limit
    }

    fn handle_event(&mut self, _event: ()) -> cadence_core::Result<()> {
        Ok(())
    }

    fn update(&mut self, dt: f64) -> cadence_core::Result<()> {
        self.pending_updates += 1;
        self.sim_time += dt;
        Ok(())
    }

    fn render(&mut self) -> cadence_core::Result<()> {
        self.updates.push((self.pending_updates, self.sim_time));
        self.pending_updates = 0;
        Ok(())
    }
}

/// No window and no events; presenting is a no-op
struct ReplayHost {
    events: EventQueue<()>,
}

impl EventSource for ReplayHost {
    type Event = ();

    fn poll_event(&mut self) -> Option<()> {
        self.events.poll_event()
    }
}

impl Present for ReplayHost {
    fn present(&mut self) -> cadence_core::Result<()> {
        Ok(())
    }
}

/// Run the scheduler over `deltas` and report each frame.
///
/// With [`ColdStart::FromZero`] there is one extra leading frame whose raw
/// delta is the clock's `start` value.
pub fn replay(config: LoopConfig, start: f64, deltas: &[f64]) -> Result<Vec<FrameReport>> {
    let raw_dts: Vec<f64> = match config.cold_start {
        ColdStart::Prime => deltas.to_vec(),
        ColdStart::FromZero => std::iter::once(start)
            .chain(deltas.iter().copied())
            .collect(),
    };

    let clock = ScriptedClock::starting_at(start, deltas.iter().copied());
    let mut scheduler = LoopScheduler::with_clock(config, clock).context("Invalid loop config")?;

    let mut host = ReplayHost {
        events: EventQueue::new(),
    };
    let mut game = ReplayGame {
        frame_limit: raw_dts.len(),
        pending_updates: 0,
        sim_time: 0.0,
        updates: Vec::with_capacity(raw_dts.len()),
    };

    scheduler
        .run(&mut host, &mut game)
        .context("Replay loop failed")?;

    Ok(game
        .updates
        .into_iter()
        .zip(raw_dts)
        .enumerate()
        .map(|(frame, ((updates, sim_time), raw_dt))| FrameReport {
            frame,
            raw_dt,
            updates,
            sim_time,
        })
        .collect())
}

pub fn run(args: ReplayArgs) -> Result<i32> {
    let config = super::load_config(args.config.as_deref())?;
    let reports = replay(config, args.start, &args.deltas)?;

    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(&reports)?,
        "text" => format_text(&reports),
        _ => anyhow::bail!("Unknown format: {}", args.format),
    };
    println!("{}", output);

    Ok(cadence_core::EXIT_SUCCESS)
}

fn format_text(reports: &[FrameReport]) -> String {
    let mut out = format!("{:>5}  {:>12}  {:>7}  {:>10}", "frame", "raw_dt", "updates", "sim_time");
    for r in reports {
        out.push_str(&format!(
            "\n{:>5}  {:>12.6}  {:>7}  {:>10.6}",
            r.frame, r.raw_dt, r.updates, r.sim_time
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(reports: &[FrameReport]) -> Vec<u32> {
        reports.iter().map(|r| r.updates).collect()
    }

    #[test]
    fn test_stall_is_clamped() {
        let reports = replay(LoopConfig::default(), 0.0, &[0.0, 0.02, 0.02, 0.3]).unwrap();
        assert_eq!(counts(&reports), vec![0, 1, 1, 15]);
        assert_eq!(reports[3].raw_dt, 0.3);
        assert!((reports[3].sim_time - 17.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_zero_adds_leading_frame() {
        let config = LoopConfig::default().with_cold_start(ColdStart::FromZero);
        let reports = replay(config, 1000.0, &[0.02]).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].raw_dt, 1000.0);
        assert_eq!(counts(&reports), vec![15, 1]);
    }

    #[test]
    fn test_empty_replay() {
        let reports = replay(LoopConfig::default(), 0.0, &[]).unwrap();
        assert!(reports.is_empty());
    }

    #[test]
    fn test_text_table() {
        let reports = replay(LoopConfig::default(), 0.0, &[0.02]).unwrap();
        let text = format_text(&reports);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("updates"));
        assert!(lines[1].contains("0.020000"));
    }

    #[test]
    fn test_json_report() {
        let reports = replay(LoopConfig::default(), 0.0, &[0.05]).unwrap();
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["frame"], 0);
        assert_eq!(json[0]["updates"], 3);
    }

    #[test]
    fn test_unknown_format() {
        let err = run(ReplayArgs {
            deltas: vec![0.01],
            start: 0.0,
            config: None,
            format: "yaml".into(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("Unknown format"));
    }
}
