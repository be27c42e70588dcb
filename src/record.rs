use chrono::NaiveDate;

/// Width of the `YYYY-MM-DD` prefix taken from the timestamp field.
pub const DATE_PREFIX_LEN: usize = 10;

/// One `cookie,timestamp` line reduced to the cookie and its calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieRecord {
    pub cookie: String,
    pub date: NaiveDate,
}

/// Parses a single log line.
///
/// Returns `None` for anything that is not a usable record: blank lines, the
/// `cookie,timestamp` header, a missing or misplaced comma, an empty cookie, a
/// timestamp shorter than ten characters or an invalid date prefix. Only the
/// first ten characters of the timestamp are read; time of day and offset are
/// ignored.
pub fn parse_line(line: &str) -> Option<CookieRecord> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let comma = trimmed.find(',')?;
    if comma == 0 || comma == trimmed.len() - 1 {
        return None;
    }

    let cookie = trimmed[..comma].trim();
    let timestamp = trimmed[comma + 1..].trim();
    if cookie.is_empty() {
        return None;
    }

    let date_part = date_prefix(timestamp)?;
    let date = parse_date(date_part)?;

    Some(CookieRecord {
        cookie: cookie.to_string(),
        date,
    })
}

/// Strict `YYYY-MM-DD` parsing with calendar validation.
///
/// Rejects anything but four year digits and two-digit month and day, so
/// `2018-1-05`, `+2018-01-05` and trailing characters all fail.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != DATE_PREFIX_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let year: i32 = s[..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

// Character-based so a multi-byte timestamp never splits a code point.
fn date_prefix(timestamp: &str) -> Option<&str> {
    match timestamp.char_indices().nth(DATE_PREFIX_LEN) {
        Some((end, _)) => Some(&timestamp[..end]),
        None if timestamp.chars().count() == DATE_PREFIX_LEN => Some(timestamp),
        None => None,
    }
}
