//! Simulation observer trait for progress reporting and data collection.

use flock_agent::AgentStore;
use flock_core::{StatusTally, Tick};
use flock_space::ContinuousSpace;

/// Callbacks invoked by [`Model::run_steps`][crate::Model::run_steps] at key
/// points in the step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, tick: Tick, tally: &StatusTally) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {tally}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a step runs.  `tick` is the 0-based index of the step
    /// about to execute.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after a step completes, with the step's index and the freshly
    /// appended status tally.
    fn on_step_end(&mut self, _tick: Tick, _tally: &StatusTally) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// completed ticks).
    ///
    /// Provides read-only access to positions and agent state so output
    /// writers can record the world without the model knowing about any
    /// specific format.  `tick` is the post-step tick counter.
    fn on_snapshot(&mut self, _tick: Tick, _space: &ContinuousSpace, _agents: &AgentStore) {}

    /// Called once after the final step of a `run_steps` call.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_steps` but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
