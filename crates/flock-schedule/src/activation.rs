//! `RandomActivation` — uniform-random, strictly sequential activation.
//!
//! # Why this exists
//!
//! Activating agents in a fixed order every tick introduces systematic bias:
//! the same agents always move first, always get first pick of the RNG-free
//! world state, and the artifacts show up in aggregate statistics.  Drawing
//! a fresh uniform permutation per step removes the bias while keeping the
//! run fully deterministic under a seeded RNG.
//!
//! # Ordering contract
//!
//! Within a step, activation is *sequential*: an agent activated earlier has
//! already moved (and possibly changed status) by the time a later agent
//! senses its neighborhood.  This read-after-write dependency is part of the
//! model's semantics — callers must not parallelize the pass or buffer the
//! writes.

use flock_core::{AgentId, SimRng, Tick};

/// The ordered set of live agents plus the monotonic tick counter.
///
/// The tick starts at 0 and increments after each *completed* pass; a pass
/// aborted by an activation error leaves the counter unchanged.
#[derive(Default)]
pub struct RandomActivation {
    agents: Vec<AgentId>,
    tick: Tick,
}

impl RandomActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler pre-filled with agents `0..count`.
    pub fn with_population(count: usize) -> Self {
        Self {
            agents: (0..count as u32).map(AgentId).collect(),
            tick: Tick::ZERO,
        }
    }

    /// Register an agent for activation.  Registration order is irrelevant —
    /// every step draws its own permutation.
    pub fn add(&mut self, agent: AgentId) {
        self.agents.push(agent);
    }

    /// Current tick.  Equals the number of completed passes.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// The live agent set, in registration order.
    pub fn agents(&self) -> &[AgentId] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Run one step: shuffle the agent list with `rng`, invoke `activate`
    /// once per agent in that order, then advance the tick.
    ///
    /// The first activation error aborts the pass (remaining agents are not
    /// activated this step) and is returned; the tick does not advance.
    pub fn step<E>(
        &mut self,
        rng: &mut SimRng,
        mut activate: impl FnMut(AgentId) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut order = self.agents.clone();
        rng.shuffle(&mut order);
        for agent in order {
            activate(agent)?;
        }
        self.tick = self.tick + 1;
        Ok(())
    }
}
