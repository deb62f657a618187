use super::day_status::DayStatus;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One calendar day's entry. At most one record exists per date;
/// a new save for an existing date replaces the prior record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    pub id: i64,
    pub date: NaiveDate,                 // ⇔ entries.date (TEXT "YYYY-MM-DD", UNIQUE)
    pub status: DayStatus,               // ⇔ entries.status
    pub start: Option<NaiveTime>,        // ⇔ entries.start (TEXT "HH:MM")
    pub lunch_start: Option<NaiveTime>,  // ⇔ entries.lunch_start
    pub lunch_end: Option<NaiveTime>,    // ⇔ entries.lunch_end
    pub end: Option<NaiveTime>,          // ⇔ entries.end
    pub notes: String,                   // ⇔ entries.notes
    pub updated_at: String,              // ⇔ entries.updated_at (TEXT, ISO8601)
}

impl DayRecord {
    /// High-level constructor for records created by the CLI.
    /// Stamps `updated_at` with now() in ISO8601; `id = 0` means
    /// "not yet persisted" (assigned by SQLite on insert).
    pub fn new(
        id: i64,
        date: NaiveDate,
        status: DayStatus,
        start: Option<NaiveTime>,
        lunch_start: Option<NaiveTime>,
        lunch_end: Option<NaiveTime>,
        end: Option<NaiveTime>,
        notes: String,
    ) -> Self {
        Self {
            id,
            date,
            status,
            start,
            lunch_start,
            lunch_end,
            end,
            notes,
            updated_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
