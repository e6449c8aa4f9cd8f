//! Fluent builder for constructing a [`Model`].

use flock_agent::{AgentStoreBuilder, BoidParams};
use flock_behavior::{Behavior, FlockingBehavior};
use flock_core::{AgentId, InfectionStatus, ModelConfig, SimRng, Vec2};
use flock_schedule::RandomActivation;
use flock_space::ContinuousSpace;

use crate::{Model, SimResult};

/// Fluent builder for [`Model<B>`].
///
/// Validation runs before anything is allocated, so an invalid configuration
/// never yields a half-initialized model.
///
/// # Seeding
///
/// `build()` creates `config.population` agents in id order:
///
/// - position: uniform in `[0, width) × [0, height)`;
/// - velocity: per-axis uniform `[-1, 1)` direction, normalized to `speed`
///   (a degenerate zero draw falls back to the unit-x heading);
/// - status: the last `initial_infected` agents created start `Infected`,
///   everyone else `Susceptible`;
///
/// and records the initial tally as `history[0]`.
///
/// # Example
///
/// ```rust,ignore
/// let config = ModelConfig { population: 200, seed: 7, ..ModelConfig::default() };
/// let mut model = ModelBuilder::new(config).build()?;
/// model.run_steps(100, &mut NoopObserver)?;
/// ```
pub struct ModelBuilder<B: Behavior = FlockingBehavior> {
    config: ModelConfig,
    behavior: B,
}

impl ModelBuilder<FlockingBehavior> {
    /// Create a builder using the standard flocking + epidemic behavior.
    pub fn new(config: ModelConfig) -> Self {
        Self { config, behavior: FlockingBehavior }
    }
}

impl<B: Behavior> ModelBuilder<B> {
    /// Swap in a different [`Behavior`] implementation.
    pub fn behavior<B2: Behavior>(self, behavior: B2) -> ModelBuilder<B2> {
        ModelBuilder { config: self.config, behavior }
    }

    /// Validate the configuration, seed the population, and return a
    /// ready-to-run [`Model`].
    pub fn build(self) -> SimResult<Model<B>> {
        let config = self.config;
        config.validate()?;

        let mut rng = SimRng::new(config.seed);
        let mut space = ContinuousSpace::new(config.width, config.height, config.toroidal);
        let (mut agents, rngs) = AgentStoreBuilder::new(config.population, config.seed)
            .params(BoidParams::from_config(&config))
            .build();

        let infected_from = config.population.saturating_sub(config.initial_infected);
        for i in 0..config.population {
            let id = AgentId(i as u32);

            let pos = Vec2::new(
                rng.gen_range(0.0..config.width),
                rng.gen_range(0.0..config.height),
            );
            space.place(id, pos)?;

            let heading = Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            agents.velocity[i] = heading
                .scaled_to(config.speed)
                .unwrap_or(Vec2::new(config.speed, 0.0));

            if i >= infected_from {
                agents.status[i] = InfectionStatus::Infected;
            }
        }

        let schedule = RandomActivation::with_population(config.population);
        let history = vec![agents.status_tally()];

        Ok(Model {
            config,
            space,
            agents,
            rngs,
            schedule,
            behavior: self.behavior,
            rng,
            history,
        })
    }
}
