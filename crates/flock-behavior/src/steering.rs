//! The three flocking drives: cohere, separate, match.
//!
//! Each function returns an *unweighted* force vector; the caller applies
//! the configured weights.  Zero neighbors always yields `Vec2::ZERO` — the
//! drives contribute nothing rather than erroring or producing NaN.
//!
//! All displacement math goes through the space so the forces are wrap-aware
//! on a torus (a neighbor just across the seam pulls the short way around,
//! not across the whole world).

use flock_agent::AgentStore;
use flock_core::{AgentId, Vec2};
use flock_space::ContinuousSpace;

/// Vector from `pos` to the centroid of the neighbors: the mean of the
/// wrap-aware displacements to each neighbor.
pub fn cohere(pos: Vec2, neighbors: &[AgentId], space: &ContinuousSpace) -> Vec2 {
    if neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let mut sum = Vec2::ZERO;
    for &n in neighbors {
        sum += space.displacement(pos, space.position(n));
    }
    sum / neighbors.len() as f64
}

/// Sum of the vectors pointing away from every neighbor closer than
/// `separation` (a stricter sub-radius of the vision the neighbor list was
/// built with).  Summed, not averaged: two crowding neighbors push twice as
/// hard as one.
pub fn separate(
    pos: Vec2,
    neighbors: &[AgentId],
    space: &ContinuousSpace,
    separation: f64,
) -> Vec2 {
    let mut sum = Vec2::ZERO;
    for &n in neighbors {
        let away = space.displacement(pos, space.position(n));
        if away.length() <= separation {
            sum += -away;
        }
    }
    sum
}

/// Difference between the mean neighbor velocity and `velocity` (alignment).
pub fn match_velocity(velocity: Vec2, neighbors: &[AgentId], agents: &AgentStore) -> Vec2 {
    if neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let mut sum = Vec2::ZERO;
    for &n in neighbors {
        sum += agents.velocity[n.index()];
    }
    sum / neighbors.len() as f64 - velocity
}
