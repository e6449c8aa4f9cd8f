//! `flock-agent` — Structure-of-Arrays agent storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`params`]  | `BoidParams` — per-agent movement/epidemic knobs     |
//! | [`store`]   | `AgentStore` (SoA arrays), `AgentRngs`               |
//! | [`builder`] | `AgentStoreBuilder` (fluent construction)            |

pub mod builder;
pub mod params;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use params::BoidParams;
pub use store::{AgentRngs, AgentStore};
