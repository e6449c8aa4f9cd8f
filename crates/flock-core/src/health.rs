//! Epidemic compartment states and per-tick population tallies.
//!
//! The transition graph is append-only:
//!
//! ```text
//! Susceptible ──▶ Infected ──▶ Recovered
//!                     │
//!                     └──────▶ Removed
//! ```
//!
//! `Recovered` and `Removed` are absorbing.  Agents are never deleted:
//! `Removed` is a tag, not removal from the registry, so the four tally
//! counts always sum to the population.

use std::fmt;

/// Health compartment of a single agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfectionStatus {
    #[default]
    Susceptible,
    Infected,
    Recovered,
    Removed,
}

impl InfectionStatus {
    /// All variants in tally order.
    pub const ALL: [InfectionStatus; 4] = [
        InfectionStatus::Susceptible,
        InfectionStatus::Infected,
        InfectionStatus::Recovered,
        InfectionStatus::Removed,
    ];

    /// `true` for the absorbing states — no transition ever leaves them.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, InfectionStatus::Recovered | InfectionStatus::Removed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InfectionStatus::Susceptible => "susceptible",
            InfectionStatus::Infected => "infected",
            InfectionStatus::Recovered => "recovered",
            InfectionStatus::Removed => "removed",
        }
    }

    /// Display color consumed by external renderers.
    pub fn color(self) -> &'static str {
        match self {
            InfectionStatus::Susceptible => "green",
            InfectionStatus::Infected => "red",
            InfectionStatus::Recovered => "blue",
            InfectionStatus::Removed => "black",
        }
    }
}

impl fmt::Display for InfectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StatusTally ───────────────────────────────────────────────────────────────

/// Population counts per compartment for one tick.
///
/// One `StatusTally` is appended to the model history per completed step
/// (plus one at seeding), so `history[t]` is the state of the world after
/// tick `t` passes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusTally {
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
    pub removed: usize,
}

impl StatusTally {
    /// Count statuses over a slice (one element per agent).
    pub fn from_statuses(statuses: &[InfectionStatus]) -> Self {
        let mut tally = StatusTally::default();
        for &status in statuses {
            match status {
                InfectionStatus::Susceptible => tally.susceptible += 1,
                InfectionStatus::Infected => tally.infected += 1,
                InfectionStatus::Recovered => tally.recovered += 1,
                InfectionStatus::Removed => tally.removed += 1,
            }
        }
        tally
    }

    /// The count for one compartment.
    pub fn count(self, status: InfectionStatus) -> usize {
        match status {
            InfectionStatus::Susceptible => self.susceptible,
            InfectionStatus::Infected => self.infected,
            InfectionStatus::Recovered => self.recovered,
            InfectionStatus::Removed => self.removed,
        }
    }

    /// Sum of all four counts.  Always equals the population.
    pub fn total(self) -> usize {
        self.susceptible + self.infected + self.recovered + self.removed
    }
}

impl fmt::Display for StatusTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "susceptible={} infected={} recovered={} removed={}",
            self.susceptible, self.infected, self.recovered, self.removed
        )
    }
}
