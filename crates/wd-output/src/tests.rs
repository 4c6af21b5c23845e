//! Integration tests for wd-output.

#[cfg(test)]
mod row_tests {
    use wd_core::{Tick, Twist};

    use crate::row::CommandRow;

    #[test]
    fn command_row_spreads_twist_components() {
        let row = CommandRow::new(Tick(36), 10, &Twist::angular_z(0.5));
        assert_eq!(row.tick, 36);
        assert_eq!(row.time_ms, 360);
        assert_eq!(row.angular_z, 0.5);
        assert_eq!(row.linear_x, 0.0);
        assert_eq!(row.record()[7], "0.5");
    }
}

#[cfg(test)]
mod command_sink_tests {
    use tempfile::TempDir;
    use wd_core::{Tick, Twist};
    use wd_runtime::MotionSink;

    use crate::commands::CsvCommandSink;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn header_written_on_create() {
        let dir = tmp();
        let path = dir.path().join("commands.csv");
        let mut sink = CsvCommandSink::new(&path, 10).unwrap();
        sink.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["tick", "time_ms", "linear_x", "linear_y", "linear_z", "angular_x", "angular_y", "angular_z"]
        );
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn published_commands_land_in_order() {
        let dir = tmp();
        let path = dir.path().join("commands.csv");
        let mut sink = CsvCommandSink::new(&path, 10).unwrap();
        sink.publish(Tick(50), &Twist::linear_x(0.1));
        sink.publish(Tick(200), &Twist::zero());
        assert_eq!(sink.rows(), 2);
        sink.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "50");
        assert_eq!(&records[0][1], "500");
        assert_eq!(records[0][2].parse::<f64>().unwrap(), 0.1);
        assert_eq!(&records[1][1], "2000");
        assert!(records[1].iter().skip(2).all(|v| v.parse::<f64>().unwrap() == 0.0));
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut sink = CsvCommandSink::new(&dir.path().join("commands.csv"), 10).unwrap();
        sink.finish().unwrap();
        sink.finish().unwrap();
        assert!(sink.take_error().is_none());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        let path = dir.path().join("no_such_dir").join("commands.csv");
        assert!(CsvCommandSink::new(&path, 10).is_err());
    }
}

#[cfg(test)]
mod event_log_tests {
    use tempfile::TempDir;
    use wd_core::{HazardBatch, HazardKind, Tick};
    use wd_runtime::RuntimeObserver;
    use wd_timer::TimerId;

    use crate::events::CsvEventLog;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn timers_and_hazards_are_logged() {
        let dir = tmp();
        let path = dir.path().join("events.csv");
        let mut log = CsvEventLog::new(&path, 10).unwrap();
        log.on_timer(Tick(50), TimerId::ForwardDrive);
        log.on_hazard(Tick(200), &HazardBatch::of_kinds(&[HazardKind::Bump, HazardKind::Cliff]));
        log.on_run_end(Tick(300));

        let records = read(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][2], "timer");
        assert_eq!(&records[0][3], TimerId::ForwardDrive.as_str());
        assert_eq!(&records[1][1], "2000");
        assert_eq!(&records[1][2], "hazard");
        assert_eq!(&records[1][3], "bump|cliff");
    }

    #[test]
    fn heartbeats_skipped_by_default() {
        let dir = tmp();
        let path = dir.path().join("events.csv");
        let mut log = CsvEventLog::new(&path, 10).unwrap();
        log.on_hazard(Tick(10), &HazardBatch::empty());
        log.on_run_end(Tick(20));
        assert_eq!(log.rows(), 0);
        assert!(read(&path).is_empty());
    }

    #[test]
    fn heartbeats_logged_when_enabled() {
        let dir = tmp();
        let path = dir.path().join("events.csv");
        let mut log = CsvEventLog::new(&path, 10).unwrap().with_heartbeats(true);
        log.on_hazard(Tick(10), &HazardBatch::empty());
        log.on_run_end(Tick(20));

        let records = read(&path);
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][3], "empty");
    }
}

#[cfg(test)]
mod runtime_tests {
    use wd_behavior::BehaviorController;
    use wd_core::RunConfig;
    use wd_runtime::{HazardScript, RuntimeBuilder};

    use crate::{CsvCommandSink, CsvEventLog};

    #[test]
    fn bump_run_writes_both_logs() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = RunConfig::default().with_duration_ms(3_000);
        let commands = dir.path().join("commands.csv");
        let events = dir.path().join("events.csv");

        let sink = CsvCommandSink::new(&commands, config.tick_duration_ms).unwrap();
        let mut log = CsvEventLog::new(&events, config.tick_duration_ms).unwrap();
        let mut rt = RuntimeBuilder::new(config, BehaviorController::with_seed(3), sink)
            .script(HazardScript::new().bump_at(2_000))
            .build()
            .unwrap();
        rt.run(&mut log).unwrap();
        rt.sink.finish().unwrap();
        assert!(log.take_error().is_none());

        // Forward at 0.5 s, 1.0 s, 1.5 s, 2.0 s, then the bump stops the robot.
        let mut rdr = csv::Reader::from_path(&commands).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[4][1], "2000");
        assert!(rows[4].iter().skip(2).all(|v| v.parse::<f64>().unwrap() == 0.0));

        // Four forward fires plus the bump batch; heartbeats are not logged.
        let mut rdr = csv::Reader::from_path(&events).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[4][2], "hazard");
        assert_eq!(&rows[4][3], "bump");
    }
}
