//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use flock_agent::AgentStore;
use flock_core::{StatusTally, Tick};
use flock_sim::SimObserver;
use flock_space::ContinuousSpace;

use crate::row::{AgentSnapshotRow, TickTallyRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes per-tick tallies and agent snapshots to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `model.run_steps()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, tick: Tick, tally: &StatusTally) {
        let row = TickTallyRow::new(tick + 1, tally);
        let result = self.writer.write_tally(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, space: &ContinuousSpace, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = agents
            .agent_ids()
            .map(|id| {
                let pos = space.position(id);
                AgentSnapshotRow {
                    agent_id: id.0,
                    tick: tick.0,
                    x: pos.x,
                    y: pos.y,
                    status: agents.status[id.index()],
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
