//! `flock-schedule` — random-order sequential activation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                     |
//! |----------------|----------------------------------------------|
//! | [`activation`] | `RandomActivation` scheduler                 |

pub mod activation;


pub use activation::RandomActivation;
