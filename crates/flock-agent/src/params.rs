//! Per-agent movement and epidemic parameters.
//!
//! Every agent carries its own copy.  Seeding fills all agents from the one
//! model configuration, but the storage is per-agent so heterogeneous
//! populations (faster boids, more susceptible boids) need no structural
//! change.

use flock_core::{ModelConfig, SteeringWeights};

/// Movement and epidemic knobs for one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoidParams {
    /// Distance covered per tick; also the fixed velocity magnitude.
    pub speed: f64,
    /// Neighbor-perception radius.
    pub vision: f64,
    /// Sub-radius of `vision` inside which the separation drive applies.
    pub separation: f64,
    /// Steering drive weights.
    pub weights: SteeringWeights,
    /// Per-infected-neighbor transmission probability per tick.
    pub infection_rate: f64,
    /// Per-tick death probability while infected.
    pub mortality_rate: f64,
    /// Per-tick recovery probability while infected, tried after the
    /// mortality trial fails.
    pub recovery_rate: f64,
}

impl BoidParams {
    /// Copy the agent-relevant fields out of a model configuration.
    pub fn from_config(config: &ModelConfig) -> Self {
        Self {
            speed: config.speed,
            vision: config.vision,
            separation: config.separation,
            weights: config.weights,
            infection_rate: config.infection_rate,
            mortality_rate: config.mortality_rate,
            recovery_rate: config.recovery_rate,
        }
    }
}

impl Default for BoidParams {
    fn default() -> Self {
        Self::from_config(&ModelConfig::default())
    }
}
