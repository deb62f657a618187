use crate::models::overtime_event::OvertimeEvent;
use crate::utils::time::minutes_since_midnight;
use chrono::{NaiveDate, NaiveTime};

/// Result of an overlap check. `blocked == false` ⇒ `reason` is None.
#[derive(Debug, Clone)]
pub struct OverlapCheck {
    pub blocked: bool,
    pub reason: Option<String>,
}

impl OverlapCheck {
    fn clear() -> Self {
        Self {
            blocked: false,
            reason: None,
        }
    }

    fn blocked(reason: String) -> Self {
        Self {
            blocked: true,
            reason: Some(reason),
        }
    }
}

/// Compare the half-open interval `[start, end)` against every existing
/// overtime event on the same date that carries its own time range.
///
/// Two intervals conflict iff `start₁ < end₂ && end₁ > start₂`:
/// strict overlap, touching endpoints do not conflict. The first
/// conflict found wins; its range is named in the reason.
pub fn check(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    existing: &[OvertimeEvent],
) -> OverlapCheck {
    let s1 = minutes_since_midnight(start);
    let e1 = minutes_since_midnight(end);

    for ev in existing.iter().filter(|ev| ev.date == date) {
        if let Some((ev_start, ev_end)) = ev.range() {
            let s2 = minutes_since_midnight(ev_start);
            let e2 = minutes_since_midnight(ev_end);

            if s1 < e2 && e1 > s2 {
                return OverlapCheck::blocked(format!(
                    "range {}–{} on {} overlaps recorded recovery {}–{}",
                    start.format("%H:%M"),
                    end.format("%H:%M"),
                    date.format("%Y-%m-%d"),
                    ev_start.format("%H:%M"),
                    ev_end.format("%H:%M"),
                ));
            }
        }
    }

    OverlapCheck::clear()
}
