//! `flock-output` — simulation output writers.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                  | Contents                                        |
//! |-----------------------|-------------------------------------------------|
//! | `status_history.csv`  | one row per tick: the 4-way status tally        |
//! | `agent_snapshots.csv` | one row per agent per snapshot tick             |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `flock_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! model.run_steps(200, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickTallyRow};
pub use writer::OutputWriter;
