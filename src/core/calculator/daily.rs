use crate::models::day_record::DayRecord;
use crate::utils::time::lunch_aware_minutes;

/// Worked minutes for one day record.
///
/// Never fails: a malformed record (work day missing start/end, or a
/// half-filled lunch break) contributes 0 rather than erroring. Callers
/// are expected to pre-validate before save; this function is the
/// arithmetic of record, not the validator.
pub fn worked_minutes(rec: &DayRecord) -> i64 {
    // Non-work days never contribute, regardless of the time fields.
    if !rec.status.is_work() {
        return 0;
    }

    lunch_aware_minutes(rec.start, rec.lunch_start, rec.lunch_end, rec.end)
}
