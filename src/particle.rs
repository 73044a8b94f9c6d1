//! Confetti particle physics.
//!
//! Particles are launched from a single origin with a random heading and
//! speed, fall under constant gravity and fade linearly. A particle is
//! finished once fully transparent or below the viewport bottom.
//!
//! The simulation advances by measured elapsed time supplied by a
//! [`FrameClock`]; the constants are expressed per second so frame rate does
//! not change trajectories.

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::consts::{
    CONFETTI_COLORS, CONFETTI_FADE_PER_SEC, CONFETTI_GRAVITY, CONFETTI_MAX_SPEED, CONFETTI_MIN_SPEED, MAX_FRAME_SECS,
    NOMINAL_FRAME_SECS,
};

/// Outline of a rendered particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Round confetti.
    Circle,
    /// Square confetti.
    Square,
}

impl Shape {
    #[must_use]
    pub fn border_radius(self) -> &'static str {
        match self {
            Self::Circle => "50%",
            Self::Square => "0",
        }
    }
}

/// One confetti piece.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position in viewport px.
    pub x: f64,
    /// Vertical position in viewport px, growing downward.
    pub y: f64,
    /// Horizontal velocity, px/s.
    pub vx: f64,
    /// Vertical velocity, px/s.
    pub vy: f64,
    /// 1.0 at launch, finished at 0.
    pub opacity: f64,
    /// CSS color from the palette.
    pub color: &'static str,
    /// Rendered outline.
    pub shape: Shape,
}

impl Particle {
    /// A fully opaque particle at `(x, y)` moving at `speed` px/s along `angle`.
    #[must_use]
    pub fn launch(x: f64, y: f64, angle: f64, speed: f64, color: &'static str, shape: Shape) -> Self {
        Self { x, y, vx: angle.cos() * speed, vy: angle.sin() * speed, opacity: 1.0, color, shape }
    }

    /// Advance by `dt` seconds. Position moves with the current velocity
    /// before gravity is applied.
    pub fn step(&mut self, dt: f64) {
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        self.vy += CONFETTI_GRAVITY * dt;
        self.opacity -= CONFETTI_FADE_PER_SEC * dt;
    }

    #[must_use]
    pub fn is_finished(&self, viewport_height: f64) -> bool {
        self.opacity <= 0.0 || self.y >= viewport_height
    }
}

/// Spawn `count` particles at `(x, y)`.
pub fn emit(rng: &mut impl Rng, x: f64, y: f64, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let color = CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())];
            let shape = if rng.random_bool(0.5) { Shape::Circle } else { Shape::Square };
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(CONFETTI_MIN_SPEED..CONFETTI_MAX_SPEED);
            Particle::launch(x, y, angle, speed, color, shape)
        })
        .collect()
}

/// Measures elapsed time between animation frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Seconds to advance for a frame stamped `now_ms`. The first frame uses
    /// the nominal step; later frames are clamped to `[0, MAX_FRAME_SECS]`.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_SECS),
            None => NOMINAL_FRAME_SECS,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}

/// One emission's live particles, each paired with a host payload (the DOM
/// node in the browser).
#[derive(Debug)]
pub struct Burst<T> {
    live: Vec<(Particle, T)>,
}

impl<T> Burst<T> {
    #[must_use]
    pub fn new(live: Vec<(Particle, T)>) -> Self {
        Self { live }
    }

    /// Step every particle and hand back the payloads of those that finished.
    pub fn advance(&mut self, dt: f64, viewport_height: f64) -> Vec<T> {
        let mut finished = Vec::new();
        let mut kept = Vec::with_capacity(self.live.len());
        for (mut particle, payload) in self.live.drain(..) {
            particle.step(dt);
            if particle.is_finished(viewport_height) {
                finished.push(payload);
            } else {
                kept.push((particle, payload));
            }
        }
        self.live = kept;
        finished
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Particle, T)> {
        self.live.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
