//! Time utilities: parsing HH:MM, minute arithmetic, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Minutes since midnight. All interval arithmetic in the core is done
/// on this representation; cross-midnight spans are not supported.
pub fn minutes_since_midnight(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// `end − start`, clamped to zero. An inverted span yields 0, not a
/// negative-wrapped value.
pub fn span_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    (minutes_since_midnight(end) - minutes_since_midnight(start)).max(0)
}

/// The shared lunch-aware interval rule:
/// - no lunch boundary → `max(0, end − start)` when both present, else 0;
/// - both lunch boundaries → `max(0, lunch_start − start) + max(0, end − lunch_end)`,
///   each half clamped independently (requires start and end too, else 0).
pub fn lunch_aware_minutes(
    start: Option<NaiveTime>,
    lunch_start: Option<NaiveTime>,
    lunch_end: Option<NaiveTime>,
    end: Option<NaiveTime>,
) -> i64 {
    match (lunch_start, lunch_end) {
        (Some(ls), Some(le)) => match (start, end) {
            (Some(s), Some(e)) => span_minutes(s, ls) + span_minutes(le, e),
            _ => 0,
        },
        // A half-filled lunch break is ignored entirely.
        _ => match (start, end) {
            (Some(s), Some(e)) => span_minutes(s, e),
            _ => 0,
        },
    }
}

pub fn format_time_opt(t: Option<NaiveTime>) -> String {
    match t {
        Some(t) => t.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}
