//! Compartment transition function.
//!
//! Evaluated once per activation, after movement, at the agent's post-move
//! position.  The transition graph is append-only and `Recovered`/`Removed`
//! are absorbing (see `flock_core::health`).

use flock_agent::BoidParams;
use flock_core::{AgentRng, InfectionStatus};

/// Compute an agent's next status from one tick's probabilistic trials.
///
/// - Susceptible with `infected_neighbors` = k > 0: infected with
///   probability `1 − (1 − infection_rate)^k`.  This closed form is
///   distribution-identical to k independent per-neighbor Bernoulli trials
///   and costs exactly one draw.
/// - Infected: a mortality trial first (→ `Removed`); if it fails, a
///   recovery trial (→ `Recovered`); otherwise stays `Infected`.
/// - `Recovered` and `Removed`: returned unchanged, no draws.
pub fn next_status(
    current: InfectionStatus,
    infected_neighbors: usize,
    params: &BoidParams,
    rng: &mut AgentRng,
) -> InfectionStatus {
    match current {
        InfectionStatus::Susceptible if infected_neighbors > 0 => {
            let escape = (1.0 - params.infection_rate).powi(infected_neighbors as i32);
            if rng.gen_bool(1.0 - escape) {
                InfectionStatus::Infected
            } else {
                InfectionStatus::Susceptible
            }
        }
        InfectionStatus::Susceptible => InfectionStatus::Susceptible,
        InfectionStatus::Infected => {
            if rng.gen_bool(params.mortality_rate) {
                InfectionStatus::Removed
            } else if rng.gen_bool(params.recovery_rate) {
                InfectionStatus::Recovered
            } else {
                InfectionStatus::Infected
            }
        }
        terminal => terminal,
    }
}
