use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub lines_read: usize,
    pub records_parsed: usize,
    pub lines_skipped: usize,
    pub target_matches: usize,
    /// Line number (1-based) of the record dated before the target that ended the scan.
    pub stopped_early: Option<usize>,
    pub distinct_cookies: usize,
    pub max_count: u32,
}

/// Result of one scan: every cookie sharing the highest count on `date`,
/// sorted ascending. Empty when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostActive {
    pub date: NaiveDate,
    pub cookies: Vec<String>,
    pub count: u32,
    pub summary: ScanSummary,
}
