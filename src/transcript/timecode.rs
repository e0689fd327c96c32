// Caption timestamp parsing and display formatting
//
// Accepted literals: HH:MM:SS.mmm, HH:MM:SS,mmm (SRT) and HH:MM:SS.
// Display always drops the sub-second part: HH:MM:SS.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Offset into a transcript, measured from the start of the media
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(Duration);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(Duration::ZERO);

    pub fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    /// Time elapsed since `earlier` (zero if `earlier` is later than `self`)
    pub fn since(&self, earlier: Timestamp) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.as_secs();
        write!(
            f,
            "{:02}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }
}

/// A timestamp literal that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparseable timestamp {literal:?}: {reason}")]
pub struct TimestampParseError {
    /// The offending literal, as given
    pub literal: String,
    pub reason: &'static str,
}

/// Parse a caption timestamp literal
pub fn parse(text: &str) -> Result<Timestamp, TimestampParseError> {
    let literal = text.trim();
    let fail = |reason: &'static str| TimestampParseError {
        literal: literal.to_string(),
        reason,
    };

    let fields: Vec<&str> = literal.split(':').collect();
    let [hours, minutes, seconds] = fields.as_slice() else {
        return Err(fail("expected three colon-separated fields"));
    };

    let hours = parse_whole(hours).ok_or_else(|| fail("invalid hours"))?;
    let minutes = parse_whole(minutes)
        .filter(|m| *m < 60)
        .ok_or_else(|| fail("invalid minutes"))?;

    let (whole_seconds, nanos) = match seconds.split_once(|c: char| c == '.' || c == ',') {
        Some((whole, fraction)) => (
            whole,
            parse_fraction(fraction).ok_or_else(|| fail("invalid milliseconds"))?,
        ),
        None => (*seconds, 0),
    };
    let whole_seconds = parse_whole(whole_seconds)
        .filter(|s| *s < 60)
        .ok_or_else(|| fail("invalid seconds"))?;

    let total = hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60 + whole_seconds))
        .ok_or_else(|| fail("timestamp out of range"))?;

    Ok(Timestamp(Duration::new(total, nanos)))
}

/// Render an optional timestamp as `HH:MM:SS`; a missing value renders as zero
pub fn format(timestamp: Option<Timestamp>) -> String {
    timestamp.unwrap_or(Timestamp::ZERO).to_string()
}

fn parse_whole(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

// Decimal fraction of a second, up to nanosecond precision ("5" = 500ms)
fn parse_fraction(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 9 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = field.parse().ok()?;
    Some(value * 10u32.pow(9 - field.len() as u32))
}
