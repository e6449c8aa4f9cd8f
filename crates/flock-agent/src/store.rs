//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! An activation mutates the agent arrays (`&mut AgentStore`) while drawing
//! from that agent's RNG (`&mut AgentRng`).  Rust's borrow checker forbids
//! both coming out of a single struct through one `&mut self`.  Keeping the
//! RNGs in a separate `AgentRngs` struct lets the tick loop split-borrow:
//!
//! ```ignore
//! // flock-sim step loop (simplified):
//! schedule.step(rng, |agent| {
//!     behavior.activate(agent, space, agents, rngs.get_mut(agent))
//! })?;
//! ```

use flock_core::{AgentId, AgentRng, InfectionStatus, StatusTally, Vec2};

use crate::BoidParams;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to enable
/// simultaneous `&mut AgentRngs` + `&mut AgentStore` borrows in the tick loop.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state except position (which the
/// space owns, so neighbor queries and movement share one source of truth).
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let status = store.status[agent.index()];  // O(1), cache-friendly
/// ```
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current velocity.  Magnitude stays at `params.speed` after seeding;
    /// recomputed from the steering forces on every activation.
    pub velocity: Vec<Vec2>,

    /// Epidemic compartment.  Transitions are append-only; `Recovered` and
    /// `Removed` are absorbing.
    pub status: Vec<InfectionStatus>,

    /// Activations survived so far, incremented once per tick.
    pub age: Vec<u64>,

    /// Movement and epidemic parameters.
    pub params: Vec<BoidParams>,
}

impl AgentStore {
    pub(crate) fn new(count: usize, params: BoidParams) -> Self {
        Self {
            count,
            velocity: vec![Vec2::ZERO; count],
            status: vec![InfectionStatus::Susceptible; count],
            age: vec![0; count],
            params: vec![params; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Count the population per compartment.
    pub fn status_tally(&self) -> StatusTally {
        StatusTally::from_statuses(&self.status)
    }
}
