//! `flock-core` — foundational types for the flock epidemic simulation.
//!
//! This crate is a dependency of every other `flock-*` crate.  It intentionally
//! has no `flock-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`ids`]     | `AgentId`                                           |
//! | [`vec2`]    | `Vec2` — 2-D Euclidean vector math                  |
//! | [`time`]    | `Tick`                                              |
//! | [`health`]  | `InfectionStatus`, `StatusTally`                    |
//! | [`config`]  | `ModelConfig`, `SteeringWeights`, validation        |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (model-level)      |
//! | [`error`]   | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod health;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ModelConfig, SteeringWeights};
pub use error::{CoreError, CoreResult};
pub use health::{InfectionStatus, StatusTally};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
pub use vec2::Vec2;
