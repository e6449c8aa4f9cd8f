//! A no-op behavior — agents never move or change state.

use flock_agent::AgentStore;
use flock_core::{AgentId, AgentRng};
use flock_space::ContinuousSpace;

use crate::{Behavior, BehaviorResult};

/// A [`Behavior`] whose activations do nothing.
///
/// Useful as a placeholder in tests or for frozen populations that simply
/// occupy space.
pub struct NoopBehavior;

impl Behavior for NoopBehavior {
    fn activate(
        &self,
        _agent: AgentId,
        _space: &mut ContinuousSpace,
        _agents: &mut AgentStore,
        _rng: &mut AgentRng,
    ) -> BehaviorResult<()> {
        Ok(())
    }
}
