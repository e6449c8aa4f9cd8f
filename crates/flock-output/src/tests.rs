//! Integration tests for flock-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use flock_core::InfectionStatus;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, TickTallyRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            tick,
            x: agent_id as f64 * 10.0,
            y: 50.0,
            status: InfectionStatus::Susceptible,
        }
    }

    fn tally_row(tick: u64) -> TickTallyRow {
        TickTallyRow {
            tick,
            susceptible: 95,
            infected: 5,
            recovered: 0,
            removed: 0,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("status_history.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "tick", "x", "y", "status"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("status_history.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "susceptible", "infected", "recovered", "removed"]);
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // agent_id
        assert_eq!(&read_rows[0][1], "5"); // tick
        assert_eq!(&read_rows[0][4], "susceptible");
        assert_eq!(&read_rows[2][0], "2");
        assert_eq!(&read_rows[2][2], "20"); // x = 2 * 10.0
    }

    #[test]
    fn csv_tally_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tally(&tally_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("status_history.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");
        assert_eq!(&read_rows[0][1], "95");
        assert_eq!(&read_rows[0][2], "5");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use flock_core::ModelConfig;
        use flock_sim::ModelBuilder;

        use crate::observer::SimOutputObserver;

        let config = ModelConfig {
            population: 3,
            seed: 1,
            snapshot_interval_ticks: 2,
            ..ModelConfig::default()
        };
        let mut model = ModelBuilder::new(config).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        model.run_steps(6, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        // One tally row per step, labeled with the post-step tick.
        let mut rdr = csv::Reader::from_path(dir.path().join("status_history.csv")).unwrap();
        let history: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(history.len(), 6);
        assert_eq!(&history[0][0], "1");
        assert_eq!(&history[5][0], "6");
        // Population 3 means all 3 agents start infected (last-5 rule).
        let total: u64 = (1..=4).map(|i| history[0][i].parse::<u64>().unwrap()).sum();
        assert_eq!(total, 3);

        // Snapshots at ticks 2, 4, 6: three batches of three agents.
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let snapshots: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(snapshots.len(), 9);
        assert_eq!(&snapshots[0][1], "2");
        assert_eq!(&snapshots[8][1], "6");
    }
}
