//! Decorative floating particles.
//!
//! Positions come from a seeded RNG so the server-rendered markup and the
//! hydrated client agree.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const PALETTE: [&str; 3] = ["#3b82f6", "#10b981", "#8b5cf6"];

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub top_pct: f64,
    pub left_pct: f64,
    pub size_px: f64,
    pub color: &'static str,
    /// Horizontal drift at the top of the float cycle.
    pub drift_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    /// Inline style for the particle's `<div>`.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "top:{:.2}%;left:{:.2}%;width:{:.1}px;height:{:.1}px;background:{};--drift:{}px;animation-duration:{:.2}s;animation-delay:{:.2}s",
            self.top_pct,
            self.left_pct,
            self.size_px,
            self.size_px,
            self.color,
            self.drift_px,
            self.duration_s,
            self.delay_s,
        )
    }
}

/// Layout knobs for one section's particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleField {
    pub count: usize,
    pub seed: u64,
    pub min_size_px: f64,
    pub max_size_px: f64,
    pub drift_px: f64,
    pub min_duration_s: f64,
    pub max_duration_s: f64,
    pub max_delay_s: f64,
}

impl ParticleField {
    /// Field used by the content sections.
    #[must_use]
    pub const fn section(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            min_size_px: 4.0,
            max_size_px: 12.0,
            drift_px: 10.0,
            min_duration_s: 6.0,
            max_duration_s: 12.0,
            max_delay_s: 2.0,
        }
    }

    /// Denser, slower field behind the hero.
    #[must_use]
    pub const fn hero(seed: u64) -> Self {
        Self {
            count: 25,
            seed,
            min_size_px: 5.0,
            max_size_px: 15.0,
            drift_px: 15.0,
            min_duration_s: 10.0,
            max_duration_s: 20.0,
            max_delay_s: 5.0,
        }
    }

    #[must_use]
    pub fn generate(&self) -> Vec<Particle> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (0..self.count)
            .map(|i| Particle {
                top_pct: rng.random_range(0.0..100.0),
                left_pct: rng.random_range(0.0..100.0),
                size_px: rng.random_range(self.min_size_px..self.max_size_px),
                color: PALETTE[i % PALETTE.len()],
                drift_px: if i % 2 == 0 { self.drift_px } else { -self.drift_px },
                duration_s: rng.random_range(self.min_duration_s..self.max_duration_s),
                delay_s: rng.random_range(0.0..self.max_delay_s),
            })
            .collect()
    }
}
