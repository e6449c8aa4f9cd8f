//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::{AgentStoreBuilder, BoidParams};
//!
//! let (store, rngs) = AgentStoreBuilder::new(100, /*seed=*/ 42)
//!     .params(BoidParams::default())
//!     .build();
//!
//! assert_eq!(store.count, 100);
//! assert_eq!(rngs.len(), 100);
//!
//! // All agents start Susceptible with zero velocity; the model seeds
//! // actual headings and the initially-infected subset after building.
//! ```

use crate::{AgentRngs, AgentStore, BoidParams};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// All arrays are pre-allocated at construction time so later writes (from
/// the model's seeding pass) are simple indexed assignments, not pushes.
pub struct AgentStoreBuilder {
    count: usize,
    seed: u64,
    params: BoidParams,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            params: BoidParams::default(),
        }
    }

    /// Parameters stamped onto every agent.  Defaults to
    /// [`BoidParams::default`] when not called.
    pub fn params(mut self, params: BoidParams) -> Self {
        self.params = params;
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let store = AgentStore::new(self.count, self.params);
        let rngs = AgentRngs::new(self.count, self.seed);
        (store, rngs)
    }
}
