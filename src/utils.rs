use anyhow::{Context, Result};
use time::macros::format_description;
use time::UtcOffset;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::stats::MostActive;

/// Logs go to stderr so stdout only ever carries the result. `RUST_LOG`
/// overrides the level chosen on the command line.
pub fn setup_logging(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()));

    // Local offset lookup can fail on multi-threaded unix processes; fall back to UTC.
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let timer = OffsetTime::new(
        offset,
        format_description!("[hour]:[minute]:[second].[subsecond digits:3]"),
    );

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn validate_args(args: &Args) -> Result<()> {
    if !args.file.exists() {
        anyhow::bail!("File does not exist: {}", args.file.display());
    }
    if !args.file.is_file() {
        anyhow::bail!("Not a regular file: {}", args.file.display());
    }
    Ok(())
}

/// One cookie per line; nothing at all for an empty result.
pub fn render_text(result: &MostActive) -> String {
    result
        .cookies
        .iter()
        .map(|cookie| format!("{}\n", cookie))
        .collect()
}

pub fn render_json(result: &MostActive) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize result")
}

pub fn render_summary(result: &MostActive) -> String {
    let summary = &result.summary;
    let mut out = format!(
        "date: {}\nlines read: {}\nlines skipped: {}\nmatches: {}\ndistinct cookies: {}\nmax count: {}\n",
        result.date,
        summary.lines_read,
        summary.lines_skipped,
        summary.target_matches,
        summary.distinct_cookies,
        summary.max_count,
    );
    match summary.stopped_early {
        Some(line) => out.push_str(&format!("stopped early at line {}\n", line)),
        None => out.push_str("scanned to end of file\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ScanSummary;
    use chrono::NaiveDate;

    fn result(cookies: &[&str]) -> MostActive {
        MostActive {
            date: NaiveDate::from_ymd_opt(2018, 12, 9).unwrap(),
            cookies: cookies.iter().map(|c| c.to_string()).collect(),
            count: if cookies.is_empty() { 0 } else { 2 },
            summary: ScanSummary {
                lines_read: 9,
                records_parsed: 8,
                lines_skipped: 1,
                target_matches: 4,
                stopped_early: Some(6),
                distinct_cookies: 3,
                max_count: 2,
            },
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render_text(&result(&["A", "B"])), "A\nB\n");
        assert_eq!(render_text(&result(&[])), "");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&result(&["AtY0laUfhglK3lC7"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["date"], "2018-12-09");
        assert_eq!(value["cookies"][0], "AtY0laUfhglK3lC7");
        assert_eq!(value["count"], 2);
        assert_eq!(value["summary"]["stopped_early"], 6);
    }

    #[test]
    fn test_render_summary() {
        let text = render_summary(&result(&["A"]));
        assert!(text.contains("lines read: 9"));
        assert!(text.contains("stopped early at line 6"));
    }
}
