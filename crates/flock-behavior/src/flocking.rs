//! `FlockingBehavior` — the full boid activation.
//!
//! Per activation, in this fixed order:
//!
//! 1. Sense: query the space for neighbors within `vision`, excluding the
//!    agent itself (the space's queries are self-inclusive by contract; the
//!    behavior owns the exclusion).
//! 2. Steer: `v' = v + cohere·w_c + separate·w_s + match·w_m`, renormalized
//!    to the agent's speed.  A degenerate zero `v'` (exact cancellation)
//!    retains the previous heading unchanged — never a NaN.
//! 3. Move: `position + v'` through the space (wraps on a torus, errors on a
//!    bounded space).
//! 4. Transition the epidemic state using the infected neighbors at the
//!    post-move position, then bump the age counter.
//!
//! Status gates none of the movement: recovered and removed agents keep
//! flying with the flock.

use flock_agent::AgentStore;
use flock_core::{AgentId, AgentRng, InfectionStatus};
use flock_space::ContinuousSpace;

use crate::{Behavior, BehaviorResult, epidemic, steering};

/// The standard boid: three weighted steering drives plus the
/// susceptible/infected/recovered/removed state machine.
pub struct FlockingBehavior;

impl Behavior for FlockingBehavior {
    fn activate(
        &self,
        agent: AgentId,
        space: &mut ContinuousSpace,
        agents: &mut AgentStore,
        rng: &mut AgentRng,
    ) -> BehaviorResult<()> {
        let i = agent.index();
        let params = agents.params[i];
        let pos = space.position(agent);

        // ── Sense ─────────────────────────────────────────────────────────
        let mut neighbors = space.neighbors_within(pos, params.vision);
        neighbors.retain(|&n| n != agent);

        // ── Steer ─────────────────────────────────────────────────────────
        let velocity = agents.velocity[i];
        let steered = velocity
            + steering::cohere(pos, &neighbors, space) * params.weights.cohere
            + steering::separate(pos, &neighbors, space, params.separation) * params.weights.separate
            + steering::match_velocity(velocity, &neighbors, agents) * params.weights.match_velocity;

        // Exact cancellation has no direction; keep the previous heading.
        let new_velocity = steered.scaled_to(params.speed).unwrap_or(velocity);
        agents.velocity[i] = new_velocity;

        // ── Move ──────────────────────────────────────────────────────────
        space.move_agent(agent, pos + new_velocity)?;

        // ── Epidemic transition (post-move position) ──────────────────────
        let status = agents.status[i];
        let infected_neighbors = if status == InfectionStatus::Susceptible {
            let here = space.position(agent);
            space
                .neighbors_within(here, params.vision)
                .into_iter()
                .filter(|&n| n != agent && agents.status[n.index()] == InfectionStatus::Infected)
                .count()
        } else {
            0
        };
        agents.status[i] = epidemic::next_status(status, infected_neighbors, &params, rng);
        agents.age[i] += 1;

        Ok(())
    }
}
