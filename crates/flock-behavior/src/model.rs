//! The `Behavior` trait — the main extension point for agent logic.

use flock_agent::AgentStore;
use flock_core::{AgentId, AgentRng};
use flock_space::ContinuousSpace;

use crate::BehaviorResult;

/// Pluggable per-agent activation logic.
///
/// The scheduler calls [`activate`][Self::activate] exactly once per live
/// agent per tick, in a freshly shuffled order, strictly sequentially.  An
/// activation may mutate the space (its own position) and the store (its own
/// velocity, status, age); mutations are immediately visible to agents
/// activated later in the same tick.
///
/// All randomness must come from the supplied per-agent [`AgentRng`] so that
/// runs are reproducible from the model seed alone.
pub trait Behavior: Send + Sync + 'static {
    /// One activation: sense, decide, and update this agent's own state.
    ///
    /// Errors abort the current scheduler pass and surface through the
    /// model's `step()`; the only source in the shipped behaviors is an
    /// out-of-bounds move in a non-toroidal space.
    fn activate(
        &self,
        agent: AgentId,
        space: &mut ContinuousSpace,
        agents: &mut AgentStore,
        rng: &mut AgentRng,
    ) -> BehaviorResult<()>;
}
