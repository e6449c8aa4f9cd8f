//! The `Model` struct and its step loop.

use flock_agent::{AgentRngs, AgentStore};
use flock_behavior::Behavior;
use flock_core::{AgentId, InfectionStatus, ModelConfig, SimRng, StatusTally, Tick, Vec2};
use flock_schedule::RandomActivation;
use flock_space::ContinuousSpace;

use crate::{SimObserver, SimResult};

/// Per-agent read surface consumed by external renderers and statistics
/// collectors after each tick.
#[derive(Copy, Clone, Debug)]
pub struct AgentView {
    pub id: AgentId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub status: InfectionStatus,
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// The simulation container.
///
/// `Model<B>` owns every piece of run state and drives the per-tick pass:
///
/// 1. The scheduler draws a fresh uniform permutation of the population and
///    activates each agent exactly once, sequentially (see
///    [`RandomActivation::step`]).
/// 2. Each activation steers, moves, and transitions one agent via the
///    behavior `B` (default [`FlockingBehavior`][flock_behavior::FlockingBehavior]).
/// 3. The 4-way status tally is appended to the history.
///
/// Create via [`ModelBuilder`][crate::ModelBuilder].
pub struct Model<B: Behavior> {
    /// Construction parameters, kept for reference and snapshot cadence.
    pub config: ModelConfig,

    /// The continuous space; owns every agent position.
    pub space: ContinuousSpace,

    /// SoA agent state (velocity, status, age, params).
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// The activation scheduler; owns the tick counter.
    pub schedule: RandomActivation,

    /// The behavior invoked once per agent per tick.
    pub behavior: B,

    /// Model-level RNG: population seeding and per-step shuffles.
    pub(crate) rng: SimRng,

    /// Status-count history.  `history[0]` is the post-seeding tally;
    /// `history[t]` the tally after tick `t` completed.  Appended to only by
    /// `step()`, never rewritten.
    pub(crate) history: Vec<StatusTally>,
}

impl<B: Behavior> Model<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run one tick: a full scheduler pass, then record the tally.
    ///
    /// On an activation error (out-of-bounds move in a bounded space) the
    /// pass aborts, no tally is recorded, and the tick does not advance.
    pub fn step(&mut self) -> SimResult<()> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let Model { space, agents, rngs, schedule, behavior, rng, .. } = self;

        schedule.step(rng, |agent| {
            behavior.activate(agent, space, agents, rngs.get_mut(agent))
        })?;

        self.history.push(self.agents.status_tally());
        Ok(())
    }

    /// Run exactly `steps` ticks, invoking observer hooks at each boundary.
    pub fn run_steps<O: SimObserver>(&mut self, steps: u64, observer: &mut O) -> SimResult<()> {
        let interval = self.config.snapshot_interval_ticks;
        for _ in 0..steps {
            let now = self.tick();
            observer.on_step_start(now);
            self.step()?;

            let tally = *self.history.last().expect("history always has the seeding entry");
            observer.on_step_end(now, &tally);

            let after = self.tick();
            if interval > 0 && after.0.is_multiple_of(interval) {
                observer.on_snapshot(after, &self.space, &self.agents);
            }
        }
        observer.on_sim_end(self.tick());
        Ok(())
    }

    // ── Read surface ──────────────────────────────────────────────────────

    /// Current tick (number of completed steps).
    pub fn tick(&self) -> Tick {
        self.schedule.tick()
    }

    /// The ordered tally sequence: one entry at seeding plus one per
    /// completed step.
    pub fn history(&self) -> &[StatusTally] {
        &self.history
    }

    /// The most recent tally.
    pub fn tally(&self) -> StatusTally {
        *self.history.last().expect("history always has the seeding entry")
    }

    /// Snapshot of one agent.
    pub fn agent_view(&self, agent: AgentId) -> AgentView {
        AgentView {
            id: agent,
            position: self.space.position(agent),
            velocity: self.agents.velocity[agent.index()],
            status: self.agents.status[agent.index()],
        }
    }

    /// Iterate over all agents in id order.
    pub fn agents_view(&self) -> impl Iterator<Item = AgentView> + '_ {
        self.agents.agent_ids().map(|id| self.agent_view(id))
    }
}
