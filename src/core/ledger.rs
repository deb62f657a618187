//! Pure ledger mutations. The ledger is an explicit value passed in and
//! out; the caller owns persistence and identity.
//!
//! Signed convention: only negative event minutes count as consumption
//! and feed `used_minutes`. Positive manual credits are recorded in the
//! event list but do not touch `used_minutes` (and do not raise
//! `earned_minutes`, which is owned by the weekly engine).

use crate::core::calculator::engine;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::ledger::Ledger;
use crate::models::overtime_event::OvertimeEvent;
use crate::models::schedule::ScheduleConfig;
use chrono::NaiveDate;

/// Append a manual event. A consumption (negative minutes) increases
/// `used_minutes` by its magnitude.
pub fn add_event(ledger: &mut Ledger, event: OvertimeEvent) {
    if event.is_consumption() {
        ledger.used_minutes += event.minutes.abs();
    }
    ledger.events.push(event);
}

/// Remove an event by id, reversing its effect on `used_minutes`
/// (clamped at zero). Returns the removed event.
pub fn remove_event(ledger: &mut Ledger, id: i64) -> AppResult<OvertimeEvent> {
    let idx = ledger
        .events
        .iter()
        .position(|ev| ev.id == id)
        .ok_or(AppError::EventNotFound(id))?;

    let event = ledger.events.remove(idx);
    if event.is_consumption() {
        ledger.used_minutes = (ledger.used_minutes - event.minutes.abs()).max(0);
    }

    Ok(event)
}

/// Recompute `earned_minutes` from the entry list. Idempotent: calling
/// twice with the same inputs yields the same ledger. The balance is
/// always derived (`Ledger::balance_minutes`), never assigned.
pub fn recalculate(
    mut ledger: Ledger,
    entries: &[DayRecord],
    schedule: &ScheduleConfig,
    today: NaiveDate,
) -> Ledger {
    ledger.earned_minutes = engine::compute_earned_minutes(entries, schedule, today);
    ledger
}
