use tracing::{debug, info, trace};

use crate::record::CookieRecord;
use crate::stats::ScanSummary;

/// Progress hooks for a scan. Purely observational: nothing an observer does
/// can change the scan's result. Line numbers are 1-based.
pub trait ScanObserver {
    fn on_skipped(&mut self, _line_no: usize, _line: &str) {}

    fn on_match(&mut self, _line_no: usize, _record: &CookieRecord) {}

    fn on_early_stop(&mut self, _line_no: usize, _record: &CookieRecord) {}

    fn on_finished(&mut self, _summary: &ScanSummary) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Reports scan progress as structured `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn on_skipped(&mut self, line_no: usize, line: &str) {
        debug!(action = "skip", component = "record_parser", line_number = line_no, line = line, "Skipping malformed line");
    }

    fn on_match(&mut self, line_no: usize, record: &CookieRecord) {
        trace!(action = "count", component = "cookie_scan", line_number = line_no, cookie = %record.cookie, "Counted cookie");
    }

    fn on_early_stop(&mut self, line_no: usize, record: &CookieRecord) {
        info!(
            action = "stop",
            component = "cookie_scan",
            line_number = line_no,
            date = %record.date,
            "Reached a record before the target date, stopping scan"
        );
    }

    fn on_finished(&mut self, summary: &ScanSummary) {
        info!(
            action = "complete",
            component = "cookie_scan",
            lines_read = summary.lines_read,
            lines_skipped = summary.lines_skipped,
            target_matches = summary.target_matches,
            distinct_cookies = summary.distinct_cookies,
            max_count = summary.max_count,
            stopped_early = ?summary.stopped_early,
            "Cookie scan completed"
        );
    }
}

impl<T: ScanObserver + ?Sized> ScanObserver for &mut T {
    fn on_skipped(&mut self, line_no: usize, line: &str) {
        (**self).on_skipped(line_no, line)
    }

    fn on_match(&mut self, line_no: usize, record: &CookieRecord) {
        (**self).on_match(line_no, record)
    }

    fn on_early_stop(&mut self, line_no: usize, record: &CookieRecord) {
        (**self).on_early_stop(line_no, record)
    }

    fn on_finished(&mut self, summary: &ScanSummary) {
        (**self).on_finished(summary)
    }
}
