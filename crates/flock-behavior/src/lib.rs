//! `flock-behavior` — agent activation behavior.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`model`]    | `Behavior` trait — the per-activation extension point     |
//! | [`flocking`] | `FlockingBehavior` — steer, move, update epidemic state   |
//! | [`steering`] | The three steering force computations                     |
//! | [`epidemic`] | The compartment transition function                       |
//! | [`noop`]     | `NoopBehavior` — agents that never act                    |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                      |
//!
//! # Design notes
//!
//! Activations run strictly sequentially within a tick and mutate the space
//! and the agent store directly.  This is deliberate, not an optimization
//! shortcut: an agent activated later in the tick must observe the post-move
//! positions, velocities, and statuses of agents activated earlier (the
//! read-after-write dependency is part of the model's contract), which rules
//! out any buffered intent/apply or parallel scheme.

pub mod epidemic;
pub mod error;
pub mod flocking;
pub mod model;
pub mod noop;
pub mod steering;


pub use error::{BehaviorError, BehaviorResult};
pub use flocking::FlockingBehavior;
pub use model::Behavior;
pub use noop::NoopBehavior;
