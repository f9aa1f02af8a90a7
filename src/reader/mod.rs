//! Incremental tailing of HWiNFO-style sensor CSV logs.
//!
//! The reader owns the subscribed sensor store and feeds it from an
//! append-only log. Open-time problems are the only hard errors; once a
//! log is open, every data-quality issue degrades to a skip counter and
//! every I/O hiccup degrades to "zero new bytes".
//!
//! ```text
//! open() ──▶ encoding ladder + header columns
//! initialize_sensors() ──▶ column subscriptions
//! read_initial_data(window) ──▶ LogCursor at end of complete lines
//!        │
//!        ▼                  (cursor threaded by the caller)
//! poll_new_rows(cursor) ──▶ append new readings, prune window, new cursor
//! ```

mod encoding;
mod row;

pub use encoding::LogEncoding;
pub use row::{parse_cell, parse_row, parse_timestamp, CellOutcome, CellSkip, ParsedRow, RowSkip};

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::data::{Reading, Sensor, SensorInfo};

/// Fatal open-time failures.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("cannot read log file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("log file {path} is empty")]
    EmptyFile { path: PathBuf },
    #[error("log file {path} has no Date,Time header row")]
    MissingHeader { path: PathBuf },
}

/// Byte offset into the append-only log.
///
/// Returned by [`LogReader::read_initial_data`] and threaded by the caller
/// through every [`LogReader::poll_new_rows`] call; the reader keeps no
/// hidden read position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogCursor(u64);

impl LogCursor {
    /// Cursor at the top of the log (before the header).
    pub fn start() -> Self {
        Self(0)
    }

    pub fn offset(&self) -> u64 {
        self.0
    }
}

/// Result of one tail poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOutcome {
    /// Cursor to thread into the next poll.
    pub cursor: LogCursor,
    /// Readings appended across all sensors.
    pub appended: usize,
}

/// Per-reason tallies of rejected rows and cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub shape_mismatch: u64,
    pub bad_timestamp: u64,
    pub bad_number: u64,
    pub bad_boolean: u64,
    pub non_finite: u64,
}

impl SkipCounts {
    /// Sum across all reasons.
    pub fn total(&self) -> u64 {
        self.shape_mismatch + self.bad_timestamp + self.bad_number + self.bad_boolean
            + self.non_finite
    }

    fn count_row(&mut self, skip: RowSkip) {
        match skip {
            RowSkip::ShapeMismatch => self.shape_mismatch += 1,
            RowSkip::BadTimestamp => self.bad_timestamp += 1,
        }
    }

    fn count_cell(&mut self, skip: CellSkip) {
        match skip {
            CellSkip::BadNumber => self.bad_number += 1,
            CellSkip::BadBoolean => self.bad_boolean += 1,
            CellSkip::NonFinite => self.non_finite += 1,
        }
    }
}

/// Tails one sensor log and maintains the subscribed sensor store.
#[derive(Debug)]
pub struct LogReader {
    path: PathBuf,
    encoding: LogEncoding,
    /// Metadata for every data column, in header order.
    columns: Vec<SensorInfo>,
    /// Data-column index → subscribed identity.
    subscriptions: Vec<Option<String>>,
    sensors: BTreeMap<String, Sensor>,
    window: Duration,
    /// Newest timestamp on any parsed row, even rows whose cells all
    /// skipped; log time advances with the log, not with the readings.
    latest: Option<NaiveDateTime>,
    skipped: SkipCounts,
    last_error: Option<String>,
}

impl LogReader {
    /// Open a log, detect its encoding, and validate the header row.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ReadError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| ReadError::Unreadable {
            path: path.clone(),
            source,
        })?;

        let mut header_line = Vec::new();
        BufReader::new(file)
            .read_until(b'\n', &mut header_line)
            .map_err(|source| ReadError::Unreadable {
                path: path.clone(),
                source,
            })?;
        while header_line.last() == Some(&b'\n') || header_line.last() == Some(&b'\r') {
            header_line.pop();
        }

        let (encoding, header_text) = LogEncoding::detect(&header_line)
            .ok_or_else(|| ReadError::EmptyFile { path: path.clone() })?;
        let columns = parse_header(&header_text)
            .ok_or_else(|| ReadError::MissingHeader { path: path.clone() })?;

        debug!(
            path = %path.display(),
            encoding = encoding.name(),
            columns = columns.len(),
            "opened sensor log"
        );

        Ok(Self {
            path,
            encoding,
            subscriptions: vec![None; columns.len()],
            columns,
            sensors: BTreeMap::new(),
            // No retention until the initial read supplies a window.
            window: Duration::MAX,
            latest: None,
            skipped: SkipCounts::default(),
            last_error: None,
        })
    }

    /// Identities offered by the header, in column order.
    pub fn available_sensors(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Resolve requested names and (re)build the sensor store.
    ///
    /// Exact identity matches win; a request may otherwise match a column's
    /// bare label. Unresolved requests are dropped without error, so the
    /// result can be smaller than the request; callers check membership.
    pub fn initialize_sensors<S: AsRef<str>>(&mut self, requested: &[S]) -> &BTreeMap<String, Sensor> {
        self.subscriptions = vec![None; self.columns.len()];
        self.sensors.clear();

        for request in requested {
            let request = request.as_ref().trim();
            let position = self
                .columns
                .iter()
                .position(|c| c.name == request)
                .or_else(|| self.columns.iter().position(|c| c.label == request));

            let Some(position) = position else {
                debug!(request, "no matching sensor column");
                continue;
            };
            if self.subscriptions[position].is_some() {
                continue;
            }

            let info = self.columns[position].clone();
            self.subscriptions[position] = Some(info.name.clone());
            self.sensors.insert(info.name.clone(), Sensor::new(info));
        }

        debug!(
            requested = requested.len(),
            resolved = self.sensors.len(),
            "sensor subscriptions resolved"
        );
        &self.sensors
    }

    /// Read everything currently in the file, keep only the trailing
    /// `window`, and return the cursor for subsequent polls.
    pub fn read_initial_data(&mut self, window: Duration) -> LogCursor {
        self.window = window;
        let (cursor, appended) = self.consume_new_bytes(LogCursor::start(), true);
        self.prune_all();
        debug!(
            appended,
            skipped = self.skipped.total(),
            offset = cursor.0,
            "initial read complete"
        );
        cursor
    }

    /// Tail the log from `cursor`.
    ///
    /// Consumes only complete lines; bytes after the last newline wait for
    /// the next poll. A file shorter than the cursor (rotation or restart)
    /// re-tails from the top, skipping the fresh header. I/O trouble
    /// degrades to zero new bytes and is reported via [`Self::last_error`].
    pub fn poll_new_rows(&mut self, cursor: LogCursor) -> PollOutcome {
        let mut cursor = cursor;
        match std::fs::metadata(&self.path) {
            Ok(meta) => {
                if meta.len() < cursor.0 {
                    warn!(
                        len = meta.len(),
                        offset = cursor.0,
                        "log shrank; re-tailing from start"
                    );
                    cursor = LogCursor::start();
                }
            }
            Err(e) => {
                warn!(error = %e, "stat failed; poll degraded to zero new bytes");
                self.last_error = Some(format!("stat failed: {e}"));
                return PollOutcome {
                    cursor,
                    appended: 0,
                };
            }
        }

        let skip_header = cursor.0 == 0;
        let skipped_before = self.skipped.total();
        let (cursor, appended) = self.consume_new_bytes(cursor, skip_header);
        self.prune_all();
        if appended > 0 {
            debug!(appended, offset = cursor.0, "tail poll appended readings");
        }
        let newly_skipped = self.skipped.total() - skipped_before;
        if newly_skipped > 0 {
            warn!(skipped = newly_skipped, "rows or cells rejected during poll");
        }
        PollOutcome { cursor, appended }
    }

    /// Change the retention window; applies on the next prune pass.
    pub fn set_retention_window(&mut self, window: Duration) {
        self.window = window;
    }

    pub fn retention_window(&self) -> Duration {
        self.window
    }

    /// Clear all retained readings and skip counts. Identities, the window,
    /// and any caller-held cursor stay valid.
    pub fn reset_readings(&mut self) {
        for sensor in self.sensors.values_mut() {
            sensor.clear();
        }
        self.skipped = SkipCounts::default();
        self.latest = None;
    }

    /// The subscribed sensor store, keyed by full identity.
    pub fn sensors(&self) -> &BTreeMap<String, Sensor> {
        &self.sensors
    }

    pub fn skip_counts(&self) -> SkipCounts {
        self.skipped
    }

    /// Newest timestamp seen on any parsed row.
    pub fn latest_timestamp(&self) -> Option<NaiveDateTime> {
        self.latest
    }

    pub fn encoding(&self) -> LogEncoding {
        self.encoding
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The error recorded by the most recent degraded poll, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Read complete lines from `cursor` to end-of-file and ingest them.
    fn consume_new_bytes(&mut self, cursor: LogCursor, skip_header: bool) -> (LogCursor, usize) {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                warn!(error = %e, "open failed; poll degraded to zero new bytes");
                self.last_error = Some(format!("open failed: {e}"));
                return (cursor, 0);
            }
        };
        if let Err(e) = file.seek(SeekFrom::Start(cursor.0)) {
            warn!(error = %e, "seek failed; poll degraded to zero new bytes");
            self.last_error = Some(format!("seek failed: {e}"));
            return (cursor, 0);
        }

        let mut buf = Vec::new();
        if let Err(e) = file.read_to_end(&mut buf) {
            warn!(error = %e, "read failed; poll degraded to zero new bytes");
            self.last_error = Some(format!("read failed: {e}"));
            return (cursor, 0);
        }
        self.last_error = None;

        // A partially written trailing row is left for the next poll.
        let consumed = match buf.iter().rposition(|&b| b == b'\n') {
            Some(pos) => pos + 1,
            None => return (cursor, 0),
        };

        let encoding = self.encoding;
        let text = encoding.decode(&buf[..consumed]);
        let appended = self.ingest_chunk(&text, skip_header);
        (LogCursor(cursor.0 + consumed as u64), appended)
    }

    /// Parse a decoded chunk of complete lines and append readings.
    fn ingest_chunk(&mut self, text: &str, skip_header: bool) -> usize {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(skip_header)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut appended = 0;
        for record in reader.records() {
            match record {
                Ok(record) => appended += self.ingest_record(&record),
                Err(_) => self.skipped.count_row(RowSkip::ShapeMismatch),
            }
        }
        appended
    }

    fn ingest_record(&mut self, record: &csv::StringRecord) -> usize {
        let fields: Vec<&str> = record.iter().collect();
        let booleans: Vec<bool> = self.columns.iter().map(SensorInfo::is_boolean).collect();

        let parsed = match row::parse_row(&fields, &booleans) {
            Ok(parsed) => parsed,
            Err(skip) => {
                self.skipped.count_row(skip);
                return 0;
            }
        };

        self.latest = Some(match self.latest {
            Some(latest) => latest.max(parsed.timestamp),
            None => parsed.timestamp,
        });

        let mut appended = 0;
        for (index, outcome) in parsed.cells.iter().enumerate() {
            let Some(identity) = self.subscriptions.get(index).and_then(Option::as_ref) else {
                continue;
            };
            match outcome {
                CellOutcome::Value(value) => {
                    if let Some(sensor) = self.sensors.get_mut(identity.as_str()) {
                        sensor.push(Reading {
                            timestamp: parsed.timestamp,
                            value: *value,
                        });
                        appended += 1;
                    }
                }
                CellOutcome::Empty => {}
                CellOutcome::Skipped(skip) => self.skipped.count_cell(*skip),
            }
        }
        appended
    }

    /// Drop readings older than the window behind the newest row timestamp.
    fn prune_all(&mut self) {
        let Some(latest) = self.latest else {
            return;
        };
        // An unrepresentable window (e.g. the pre-initial-read default)
        // means no pruning at all.
        let Ok(delta) = TimeDelta::from_std(self.window) else {
            return;
        };
        let Some(cutoff) = latest.checked_sub_signed(delta) else {
            return;
        };
        for sensor in self.sensors.values_mut() {
            sensor.prune_before(cutoff);
        }
    }
}

/// Parse and validate the header row into per-column metadata.
fn parse_header(text: &str) -> Option<Vec<SensorInfo>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let record = reader.records().next()?.ok()?;
    let fields: Vec<&str> = record.iter().collect();

    if fields.len() < 2
        || !fields[0].trim().eq_ignore_ascii_case("date")
        || !fields[1].trim().eq_ignore_ascii_case("time")
    {
        return None;
    }
    Some(fields[2..].iter().map(|f| SensorInfo::parse(f)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_log(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn two_sensor_log() -> NamedTempFile {
        write_log(&[
            r#"Date,Time,"CPU Temp [°C]","CPU Usage [%]""#,
            "13.08.2025,10:00:00.000,40.0,10.0",
            "13.08.2025,10:00:01.000,42.0,20.0",
        ])
    }

    #[test]
    fn test_open_missing_file() {
        let err = LogReader::open("/nonexistent/sensors.csv").unwrap_err();
        assert!(matches!(err, ReadError::Unreadable { .. }));
    }

    #[test]
    fn test_open_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let err = LogReader::open(file.path()).unwrap_err();
        assert!(matches!(err, ReadError::EmptyFile { .. }));
    }

    #[test]
    fn test_open_requires_date_time_header() {
        let file = write_log(&["Name,Value", "cpu,42"]);
        let err = LogReader::open(file.path()).unwrap_err();
        assert!(matches!(err, ReadError::MissingHeader { .. }));
    }

    #[test]
    fn test_open_detects_latin1() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Date,Time,CPU Temp [\xB0C]\n").unwrap();
        file.write_all(b"13.08.2025,10:00:00.000,40.0\n").unwrap();
        file.flush().unwrap();

        let reader = LogReader::open(file.path()).unwrap();
        assert_eq!(reader.encoding(), LogEncoding::Latin1);
        assert_eq!(reader.available_sensors(), vec!["CPU Temp [°C]"]);
    }

    #[test]
    fn test_open_detects_bom() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFDate,Time,Fan [RPM]\n").unwrap();
        file.flush().unwrap();

        let reader = LogReader::open(file.path()).unwrap();
        assert_eq!(reader.encoding(), LogEncoding::Utf8Bom);
        assert_eq!(reader.available_sensors(), vec!["Fan [RPM]"]);
    }

    #[test]
    fn test_available_sensors_in_column_order() {
        let file = two_sensor_log();
        let reader = LogReader::open(file.path()).unwrap();
        assert_eq!(
            reader.available_sensors(),
            vec!["CPU Temp [°C]", "CPU Usage [%]"]
        );
    }

    #[test]
    fn test_initialize_matches_exact_then_label() {
        let file = two_sensor_log();
        let mut reader = LogReader::open(file.path()).unwrap();

        let resolved = reader.initialize_sensors(&["CPU Temp [°C]", "CPU Usage", "GPU Temp"]);
        assert_eq!(resolved.len(), 2);
        assert!(resolved.contains_key("CPU Temp [°C]"));
        // Label-only requests resolve to the full identity.
        assert!(resolved.contains_key("CPU Usage [%]"));
        // Unmatched requests are silently absent.
        assert!(!resolved.contains_key("GPU Temp"));
    }

    #[test]
    fn test_initialize_ignores_duplicate_requests() {
        let file = two_sensor_log();
        let mut reader = LogReader::open(file.path()).unwrap();
        let resolved = reader.initialize_sensors(&["CPU Temp [°C]", "CPU Temp"]);
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_read_initial_data_appends_all_rows() {
        let file = two_sensor_log();
        let mut reader = LogReader::open(file.path()).unwrap();
        reader.initialize_sensors(&["CPU Temp [°C]", "CPU Usage [%]"]);

        let cursor = reader.read_initial_data(Duration::from_secs(30));

        assert!(cursor.offset() > 0);
        for sensor in reader.sensors().values() {
            assert_eq!(sensor.len(), 2);
        }
        let temps: Vec<f64> = reader.sensors()["CPU Temp [°C]"].values().collect();
        assert_eq!(temps, vec![40.0, 42.0]);
    }

    #[test]
    fn test_read_initial_data_prunes_to_window() {
        let file = write_log(&[
            "Date,Time,CPU [°C]",
            "13.08.2025,10:00:00.000,40.0",
            "13.08.2025,10:01:30.000,41.0",
            "13.08.2025,10:02:00.000,42.0",
        ]);
        let mut reader = LogReader::open(file.path()).unwrap();
        reader.initialize_sensors(&["CPU [°C]"]);

        reader.read_initial_data(Duration::from_secs(60));

        let kept: Vec<f64> = reader.sensors()["CPU [°C]"].values().collect();
        assert_eq!(kept, vec![41.0, 42.0]);
    }

    #[test]
    fn test_poll_appends_only_new_rows() {
        let mut file = two_sensor_log();
        let mut reader = LogReader::open(file.path()).unwrap();
        reader.initialize_sensors(&["CPU Temp [°C]", "CPU Usage [%]"]);
        let cursor = reader.read_initial_data(Duration::from_secs(300));

        // Nothing appended yet: zero new readings, sensors untouched.
        let outcome = reader.poll_new_rows(cursor);
        assert_eq!(outcome.appended, 0);
        assert_eq!(outcome.cursor, cursor);
        assert_eq!(reader.sensors()["CPU Temp [°C]"].len(), 2);

        writeln!(file, "13.08.2025,10:00:02.000,44.0,30.0").unwrap();
        file.flush().unwrap();

        let outcome = reader.poll_new_rows(outcome.cursor);
        assert_eq!(outcome.appended, 2);
        assert!(outcome.cursor.offset() > cursor.offset());
        assert_eq!(reader.sensors()["CPU Temp [°C]"].len(), 3);
    }

    #[test]
    fn test_poll_waits_for_complete_lines() {
        let mut file = two_sensor_log();
        let mut reader = LogReader::open(file.path()).unwrap();
        reader.initialize_sensors(&["CPU Temp [°C]", "CPU Usage [%]"]);
        let cursor = reader.read_initial_data(Duration::from_secs(300));

        write!(file, "13.08.2025,10:00:02.000,44.0").unwrap();
        file.flush().unwrap();

        // The unterminated row must not be consumed.
        let outcome = reader.poll_new_rows(cursor);
        assert_eq!(outcome.appended, 0);
        assert_eq!(outcome.cursor, cursor);

        writeln!(file, ",30.0").unwrap();
        file.flush().unwrap();

        // Once the newline lands the row parses exactly once.
        let outcome = reader.poll_new_rows(outcome.cursor);
        assert_eq!(outcome.appended, 2);
        assert_eq!(reader.skip_counts().total(), 0);
    }

    #[test]
    fn test_poll_retails_after_truncation() {
        let file = two_sensor_log();
        let mut reader = LogReader::open(file.path()).unwrap();
        reader.initialize_sensors(&["CPU Temp [°C]", "CPU Usage [%]"]);
        let cursor = reader.read_initial_data(Duration::from_secs(300));

        // Simulate a restart: same header, fresh single row, shorter file.
        std::fs::write(
            file.path(),
            "Date,Time,\"CPU Temp [\u{b0}C]\",\"CPU Usage [%]\"\n13.08.2025,11:00:00.000,50.0,5.0\n",
        )
        .unwrap();

        let outcome = reader.poll_new_rows(cursor);
        assert_eq!(outcome.appended, 2);
        // The re-read header must not pollute the skip counters.
        assert_eq!(reader.skip_counts().total(), 0);
    }

    #[test]
    fn test_invalid_cell_skips_without_error() {
        let mut file = write_log(&["Date,Time,CPU [°C]", "13.08.2025,10:00:00.000,40.0"]);
        let mut reader = LogReader::open(file.path()).unwrap();
        reader.initialize_sensors(&["CPU [°C]"]);
        let cursor = reader.read_initial_data(Duration::from_secs(300));

        writeln!(file, "13.08.2025,10:00:02.000,INVALID").unwrap();
        file.flush().unwrap();

        let outcome = reader.poll_new_rows(cursor);
        assert_eq!(outcome.appended, 0);
        assert_eq!(reader.sensors()["CPU [°C]"].len(), 1);
        assert_eq!(reader.skip_counts().bad_number, 1);
    }

    #[test]
    fn test_malformed_rows_are_counted_not_fatal() {
        let mut file = write_log(&["Date,Time,CPU [°C]", "13.08.2025,10:00:00.000,40.0"]);
        let mut reader = LogReader::open(file.path()).unwrap();
        reader.initialize_sensors(&["CPU [°C]"]);
        let cursor = reader.read_initial_data(Duration::from_secs(300));

        writeln!(file, "not,a,sensor,row,at,all").unwrap();
        writeln!(file, "13.08.2025,10:00:03.000,43.0").unwrap();
        file.flush().unwrap();

        let outcome = reader.poll_new_rows(cursor);
        // The good row after the bad one still lands.
        assert_eq!(outcome.appended, 1);
        assert_eq!(reader.skip_counts().shape_mismatch, 1);
    }

    #[test]
    fn test_empty_cells_produce_no_readings_and_no_skips() {
        let file = write_log(&[
            "Date,Time,CPU [°C],GPU [°C]",
            "13.08.2025,10:00:00.000,40.0,",
            "13.08.2025,10:00:01.000,,60.0",
        ]);
        let mut reader = LogReader::open(file.path()).unwrap();
        reader.initialize_sensors(&["CPU [°C]", "GPU [°C]"]);
        reader.read_initial_data(Duration::from_secs(300));

        assert_eq!(reader.sensors()["CPU [°C]"].len(), 1);
        assert_eq!(reader.sensors()["GPU [°C]"].len(), 1);
        assert_eq!(reader.skip_counts().total(), 0);
    }

    #[test]
    fn test_poll_prunes_old_readings() {
        let mut file = write_log(&["Date,Time,CPU [°C]", "13.08.2025,10:00:00.000,40.0"]);
        let mut reader = LogReader::open(file.path()).unwrap();
        reader.initialize_sensors(&["CPU [°C]"]);
        let cursor = reader.read_initial_data(Duration::from_secs(60));

        writeln!(file, "13.08.2025,10:05:00.000,45.0").unwrap();
        file.flush().unwrap();

        reader.poll_new_rows(cursor);

        // The 10:00 reading fell out of the 60s window behind 10:05.
        let kept: Vec<f64> = reader.sensors()["CPU [°C]"].values().collect();
        assert_eq!(kept, vec![45.0]);
    }

    #[test]
    fn test_reset_clears_readings_but_keeps_identities() {
        let file = two_sensor_log();
        let mut reader = LogReader::open(file.path()).unwrap();
        reader.initialize_sensors(&["CPU Temp [°C]", "CPU Usage [%]"]);
        reader.read_initial_data(Duration::from_secs(300));

        reader.reset_readings();

        assert_eq!(reader.sensors().len(), 2);
        assert!(reader.sensors().values().all(Sensor::is_empty));
        assert_eq!(reader.skip_counts(), SkipCounts::default());
    }

    #[test]
    fn test_boolean_column_round_trip() {
        let file = write_log(&[
            "Date,Time,Throttling [Yes/No]",
            "13.08.2025,10:00:00.000,No",
            "13.08.2025,10:00:01.000,Yes",
            "13.08.2025,10:00:02.000,No",
        ]);
        let mut reader = LogReader::open(file.path()).unwrap();
        reader.initialize_sensors(&["Throttling [Yes/No]"]);
        reader.read_initial_data(Duration::from_secs(300));

        let values: Vec<f64> = reader.sensors()["Throttling [Yes/No]"].values().collect();
        assert_eq!(values, vec![0.0, 1.0, 0.0]);
    }
}
