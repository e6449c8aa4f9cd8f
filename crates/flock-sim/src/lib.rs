//! `flock-sim` — the model container and step loop.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`model`]    | `Model` — owns space, agents, scheduler, history       |
//! | [`builder`]  | `ModelBuilder` — validation and population seeding     |
//! | [`observer`] | `SimObserver` trait, `NoopObserver`                    |
//! | [`error`]    | `SimError`, `SimResult<T>`                             |
//!
//! # Step anatomy
//!
//! One `Model::step()` call is one tick: a fresh uniform permutation of the
//! population, one sequential activation per agent (steer → move → epidemic
//! transition), then a 4-way status tally appended to the model history.
//! Everything downstream of the seed is deterministic; two models built from
//! the same configuration replay identical trajectories and histories.

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;


pub use builder::ModelBuilder;
pub use error::{SimError, SimResult};
pub use model::{AgentView, Model};
pub use observer::{NoopObserver, SimObserver};
