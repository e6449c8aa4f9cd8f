//! Model construction parameters and fail-fast validation.
//!
//! Defaults match the reference parameterization of the model: 100 boids in
//! a 100×100 toroidal space, unit speed, vision 10, separation 2, infection
//! rate 0.3, mortality rate 0.1.
//!
//! The recovery rate deserves a note: the mortality trial and the recovery
//! trial are evaluated independently each tick (mortality first).  Its
//! default of 0.05 is a documented modeling assumption — the parameter is
//! explicit precisely so nothing has to be inferred from it.

use crate::{CoreError, CoreResult};

/// Relative importance of the three steering drives.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringWeights {
    /// Pull toward the centroid of visible neighbors.
    pub cohere: f64,
    /// Push away from neighbors closer than the separation radius.
    pub separate: f64,
    /// Pull toward the mean velocity of visible neighbors (alignment).
    pub match_velocity: f64,
}

impl Default for SteeringWeights {
    fn default() -> Self {
        Self {
            cohere: 0.025,
            separate: 0.25,
            match_velocity: 0.04,
        }
    }
}

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// Top-level model configuration.
///
/// Construct with struct-update syntax over `ModelConfig::default()` and pass
/// to `ModelBuilder`; `validate()` runs there before anything is allocated,
/// so an invalid configuration never yields a half-initialized model.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    /// Number of agents.  Fixed for the run — no birth, no deletion.
    pub population: usize,

    /// Space width.  Positions span `[0, width)` on the x axis.
    pub width: f64,

    /// Space height.  Positions span `[0, height)` on the y axis.
    pub height: f64,

    /// `true` wraps both axes (exiting one edge re-enters the opposite one);
    /// `false` makes out-of-bounds movement an error.
    pub toroidal: bool,

    /// Distance every agent covers per tick.
    pub speed: f64,

    /// Radius within which an agent perceives neighbors.
    pub vision: f64,

    /// Sub-radius of `vision` inside which the separation drive applies.
    pub separation: f64,

    /// Per-infected-neighbor transmission probability per tick.
    pub infection_rate: f64,

    /// Per-tick probability that an infected agent dies (→ Removed).
    pub mortality_rate: f64,

    /// Per-tick probability that an infected agent recovers, evaluated after
    /// the mortality trial fails.  Default 0.05 (documented assumption).
    pub recovery_rate: f64,

    /// Steering drive weights.
    pub weights: SteeringWeights,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// How many of the last-created agents start Infected.  Capped at the
    /// population, so the effective count is `min(initial_infected, population)`.
    pub initial_infected: usize,

    /// Emit an agent snapshot to observers every N ticks.  1 = every tick;
    /// 0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            population: 100,
            width: 100.0,
            height: 100.0,
            toroidal: true,
            speed: 1.0,
            vision: 10.0,
            separation: 2.0,
            infection_rate: 0.3,
            mortality_rate: 0.1,
            recovery_rate: 0.05,
            weights: SteeringWeights::default(),
            seed: 0,
            initial_infected: 5,
            snapshot_interval_ticks: 1,
        }
    }
}

impl ModelConfig {
    /// Check every parameter, returning a descriptive error for the first
    /// violation found.
    pub fn validate(&self) -> CoreResult<()> {
        fn positive(name: &str, v: f64) -> CoreResult<()> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(CoreError::Config(format!("{name} must be finite and > 0, got {v}")))
            }
        }
        fn non_negative(name: &str, v: f64) -> CoreResult<()> {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(CoreError::Config(format!("{name} must be finite and >= 0, got {v}")))
            }
        }
        fn rate(name: &str, v: f64) -> CoreResult<()> {
            if v.is_finite() && (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(CoreError::Config(format!("{name} must lie in [0, 1], got {v}")))
            }
        }

        positive("width", self.width)?;
        positive("height", self.height)?;
        non_negative("speed", self.speed)?;
        non_negative("vision", self.vision)?;
        non_negative("separation", self.separation)?;
        if self.separation > self.vision {
            return Err(CoreError::Config(format!(
                "separation ({}) must not exceed vision ({})",
                self.separation, self.vision
            )));
        }
        rate("infection_rate", self.infection_rate)?;
        rate("mortality_rate", self.mortality_rate)?;
        rate("recovery_rate", self.recovery_rate)?;
        non_negative("cohere weight", self.weights.cohere)?;
        non_negative("separate weight", self.weights.separate)?;
        non_negative("match_velocity weight", self.weights.match_velocity)?;
        Ok(())
    }
}
