use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One manual ledger adjustment. Negative minutes consume balance
/// (recovery); positive minutes are a manual credit. The optional
/// time range is used only for overlap checking and full-day
/// attribution, never for recomputing earned minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeEvent {
    pub id: i64,
    pub date: NaiveDate,          // ⇔ ot_events.date (TEXT "YYYY-MM-DD")
    pub minutes: i64,             // ⇔ ot_events.minutes (signed)
    pub start: Option<NaiveTime>, // ⇔ ot_events.start (TEXT "HH:MM")
    pub end: Option<NaiveTime>,   // ⇔ ot_events.end
    pub note: String,             // ⇔ ot_events.note
    pub created_at: String,       // ⇔ ot_events.created_at (TEXT, ISO8601)
}

impl OvertimeEvent {
    pub fn new(
        id: i64,
        date: NaiveDate,
        minutes: i64,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
        note: String,
    ) -> Self {
        Self {
            id,
            date,
            minutes,
            start,
            end,
            note,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_consumption(&self) -> bool {
        self.minutes < 0
    }

    /// Both boundaries, when the event carries a time range.
    pub fn range(&self) -> Option<(NaiveTime, NaiveTime)> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((s, e)),
            _ => None,
        }
    }
}
