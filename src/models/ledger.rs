use super::overtime_event::OvertimeEvent;
use serde::{Deserialize, Serialize};

/// The overtime bank. `earned_minutes` is derived from the day
/// entries by the weekly engine; `used_minutes` accumulates the
/// consumption events. The balance is never stored independently
/// of its inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    pub earned_minutes: i64,
    pub used_minutes: i64,
    #[serde(default)]
    pub events: Vec<OvertimeEvent>,
}

impl Ledger {
    pub fn new(earned_minutes: i64, used_minutes: i64, events: Vec<OvertimeEvent>) -> Self {
        Self {
            earned_minutes,
            used_minutes,
            events,
        }
    }

    /// Invariant: balance == earned − used, always.
    pub fn balance_minutes(&self) -> i64 {
        self.earned_minutes - self.used_minutes
    }
}
