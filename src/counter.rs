//! Most-active cookie scan.
//!
//! Every entry point assumes the log is sorted by descending timestamp (most
//! recent first). The scan stops at the first record dated before the target
//! day, so on unsorted input any matching lines after that record are never
//! counted. The order is not checked.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::error::ScanError;
use crate::observer::{NoopObserver, ScanObserver};
use crate::record::parse_line;
use crate::stats::{MostActive, ScanSummary};

/// Occurrences per cookie on the target date. Only cookies seen at least once
/// have an entry.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, cookie: &str) {
        match self.counts.get_mut(cookie) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(cookie.to_string(), 1);
            }
        }
    }

    pub fn get(&self, cookie: &str) -> u32 {
        self.counts.get(cookie).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// All cookies tied at the highest count, sorted ascending.
    pub fn most_active(&self) -> Vec<String> {
        let max = self.max_count();
        let mut winners: Vec<String> = self
            .counts
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(cookie, _)| cookie.clone())
            .collect();
        winners.sort_unstable();
        winners
    }
}

/// Folds a line source into the most-active set for `target`.
///
/// The first `Err` yielded by `lines` aborts the scan and is returned as is;
/// no partial result is produced. Lines that do not parse are skipped.
pub fn scan_lines<I, S, E, O>(lines: I, target: NaiveDate, mut observer: O) -> Result<MostActive, E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
    O: ScanObserver,
{
    let mut table = FrequencyTable::new();
    let mut summary = ScanSummary::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line?;
        let line = line.as_ref();
        let line_no = idx + 1;
        summary.lines_read += 1;

        let Some(record) = parse_line(line) else {
            summary.lines_skipped += 1;
            observer.on_skipped(line_no, line);
            continue;
        };
        summary.records_parsed += 1;

        if record.date == target {
            table.record(&record.cookie);
            summary.target_matches += 1;
            observer.on_match(line_no, &record);
        } else if record.date < target {
            summary.stopped_early = Some(line_no);
            observer.on_early_stop(line_no, &record);
            break;
        }
    }

    summary.distinct_cookies = table.len();
    summary.max_count = table.max_count();
    observer.on_finished(&summary);

    Ok(MostActive {
        date: target,
        cookies: table.most_active(),
        count: summary.max_count,
        summary,
    })
}

/// In-memory convenience over [`scan_lines`].
pub fn most_active_lines<'a, I>(lines: I, target: NaiveDate) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let source = lines.into_iter().map(Ok::<_, Infallible>);
    match scan_lines(source, target, NoopObserver) {
        Ok(result) => result.cookies,
        Err(never) => match never {},
    }
}

pub fn scan_reader<R, O>(reader: R, target: NaiveDate, observer: O) -> Result<MostActive, ScanError>
where
    R: BufRead,
    O: ScanObserver,
{
    let source = reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map_err(|source| ScanError::Read { line: idx + 1, source }));
    scan_lines(source, target, observer)
}

/// Scans the log at `path`. The file handle lives only for this call and is
/// released on every exit, early stop and read failure included.
pub fn scan_file<O>(path: &Path, target: NaiveDate, observer: O) -> Result<MostActive, ScanError>
where
    O: ScanObserver,
{
    let start_time = Instant::now();
    info!(action = "start", component = "cookie_scan", file_path = ?path, target_date = %target, "Scanning cookie log");

    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let result = scan_reader(BufReader::new(file), target, observer)?;

    info!(
        action = "timing",
        component = "cookie_scan",
        duration_ms = start_time.elapsed().as_millis(),
        "Cookie scan timing"
    );
    Ok(result)
}

/// Most active cookies in the log at `path` for `target`, sorted ascending.
pub fn most_active_cookies(path: &Path, target: NaiveDate) -> Result<Vec<String>, ScanError> {
    scan_file(path, target, NoopObserver).map(|result| result.cookies)
}
