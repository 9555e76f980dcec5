//! Headless bouncing-ball demo driven by the loop scheduler

use cadence_core::{CadenceError, Result};
use cadence_runtime::{EventSource, Game, HeadlessHost, Present};

const GRAVITY: f64 = -9.81;
const RESTITUTION: f64 = 0.8;
const KICK_SPEED: f64 = 6.0;
/// Below this speed a ball on the floor comes to rest
const REST_SPEED: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoEvent {
    /// Push the ball upwards
    Kick,
}

/// A ball falling under gravity and bouncing on the floor at height 0.
///
/// Stops once `duration` seconds of simulated time have elapsed.
#[derive(Debug, Clone)]
pub struct BouncingBall {
    pub height: f64,
    pub velocity: f64,
    pub sim_time: f64,
    duration: f64,
    pub ticks: u64,
    pub frames: u64,
    pub kicks: u64,
    pub bounces: u64,
}

impl BouncingBall {
    pub fn new(duration: f64) -> Self {
        Self {
            height: 2.0,
            velocity: 0.0,
            sim_time: 0.0,
            duration,
            ticks: 0,
            frames: 0,
            kicks: 0,
            bounces: 0,
        }
    }
}

impl Game for BouncingBall {
    type Event = DemoEvent;

    fn is_running(&self) -> bool {
        self.sim_time < self.duration
    }

    fn handle_event(&mut self, event: DemoEvent) -> Result<()> {
        match event {
            DemoEvent::Kick => {
                self.velocity += KICK_SPEED;
                self.kicks += 1;
            }
        }
        Ok(())
    }

    fn update(&mut self, dt: f64) -> Result<()> {
        // Semi-implicit Euler
        self.velocity += GRAVITY * dt;
        self.height += self.velocity * dt;

        if self.height < 0.0 {
            let rebound = -self.velocity * RESTITUTION;
            if rebound < REST_SPEED {
                self.height = 0.0;
                self.velocity = 0.0;
            } else {
                self.height = -self.height;
                self.velocity = rebound;
                self.bounces += 1;
            }
        }

        if !self.height.is_finite() || !self.velocity.is_finite() {
            return Err(CadenceError::GameError(format!(
                "ball state diverged at t={:.3}s",
                self.sim_time
            )));
        }

        self.sim_time += dt;
        self.ticks += 1;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.frames += 1;
        if self.frames % 60 == 0 {
            log::debug!(
                "t={:.2}s height={:.3} velocity={:.3}",
                self.sim_time,
                self.height,
                self.velocity
            );
        }
        Ok(())
    }
}

/// Headless host that also kicks the ball on a fixed frame interval
pub struct DemoHost {
    inner: HeadlessHost<DemoEvent>,
    kick_every: u64,
}

impl DemoHost {
    /// `kick_every` of 0 never kicks
    pub fn new(inner: HeadlessHost<DemoEvent>, kick_every: u64) -> Self {
        Self { inner, kick_every }
    }

    pub fn frames_presented(&self) -> u64 {
        self.inner.frames_presented()
    }
}

impl EventSource for DemoHost {
    type Event = DemoEvent;

    fn poll_event(&mut self) -> Option<DemoEvent> {
        self.inner.poll_event()
    }
}

impl Present for DemoHost {
    fn present(&mut self) -> Result<()> {
        self.inner.present()?;
        if self.kick_every > 0 && self.inner.frames_presented() % self.kick_every == 0 {
            self.inner.push_event(DemoEvent::Kick);
        }
        Ok(())
    }
}
