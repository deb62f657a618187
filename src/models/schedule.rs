use crate::utils::time::lunch_aware_minutes;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Schedule layout: one shared daily template, or seven per-weekday slots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleMode {
    Uniform,
    PerDay,
}

impl ScheduleMode {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ScheduleMode::Uniform => "uniform",
            ScheduleMode::PerDay => "per-day",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "uniform" => Some(ScheduleMode::Uniform),
            "per-day" => Some(ScheduleMode::PerDay),
            _ => None,
        }
    }
}

/// Recurring start / lunch / end times for one day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayTemplate {
    pub start: Option<NaiveTime>,
    pub lunch_start: Option<NaiveTime>,
    pub lunch_end: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl DayTemplate {
    pub fn new(
        start: Option<NaiveTime>,
        lunch_start: Option<NaiveTime>,
        lunch_end: Option<NaiveTime>,
        end: Option<NaiveTime>,
    ) -> Self {
        Self {
            start,
            lunch_start,
            lunch_end,
            end,
        }
    }

    /// Configured duration in minutes, lunch-aware, same interval rule
    /// as the daily calculator. Integer minutes throughout.
    pub fn duration_minutes(&self) -> i64 {
        lunch_aware_minutes(self.start, self.lunch_start, self.lunch_end, self.end)
    }
}

/// One of the seven per-weekday slots (index 0 = Monday).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekdaySlot {
    pub enabled: bool,
    pub template: DayTemplate,
}

/// The active weekly schedule configuration.
/// Invariant (enforced at save time by the validator, not continuously):
/// the sum of the enabled days' durations must equal
/// `weekly_target_hours × 60` minutes exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleConfig {
    pub weekly_target_hours: f64,
    pub work_days_per_week: u32,
    pub mode: ScheduleMode,
    pub uniform: DayTemplate,
    /// Fixed 7-slot array indexed by weekday (0 = Monday), so
    /// exhaustiveness is checkable. Only read in per-day mode.
    pub per_day: [WeekdaySlot; 7],
}

impl Default for ScheduleConfig {
    /// 40h over 5 days, 09:00–13:00 / 14:00–18:00. Sums to the target
    /// exactly, so a fresh database always starts valid.
    fn default() -> Self {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0);
        let uniform = DayTemplate::new(t(9, 0), t(13, 0), t(14, 0), t(18, 0));

        let mut per_day = [WeekdaySlot::default(); 7];
        for slot in per_day.iter_mut().take(5) {
            slot.enabled = true;
            slot.template = uniform;
        }

        Self {
            weekly_target_hours: 40.0,
            work_days_per_week: 5,
            mode: ScheduleMode::Uniform,
            uniform,
            per_day,
        }
    }
}

impl ScheduleConfig {
    /// Weekly target in integer minutes.
    pub fn weekly_target_minutes(&self) -> i64 {
        (self.weekly_target_hours * 60.0).round() as i64
    }

    /// Nominal single-day target in minutes (fractional: a 37h30 week
    /// over 5 days is 450.0). Guard: zero work days → target 0, never
    /// NaN/Infinity.
    pub fn daily_target_minutes(&self) -> f64 {
        if self.work_days_per_week == 0 {
            return 0.0;
        }
        self.weekly_target_minutes() as f64 / self.work_days_per_week as f64
    }

    /// Nominal daily target rounded to whole minutes. Used to normalize
    /// full-day recovery consumption.
    pub fn daily_target_minutes_rounded(&self) -> i64 {
        self.daily_target_minutes().round() as i64
    }

    /// Durations of the days the validator must sum over:
    /// per-day mode yields the enabled slots, uniform mode repeats the
    /// shared template `work_days_per_week` times.
    pub fn enabled_day_minutes(&self) -> Vec<i64> {
        match self.mode {
            ScheduleMode::Uniform => {
                let d = self.uniform.duration_minutes();
                vec![d; self.work_days_per_week as usize]
            }
            ScheduleMode::PerDay => self
                .per_day
                .iter()
                .filter(|slot| slot.enabled)
                .map(|slot| slot.template.duration_minutes())
                .collect(),
        }
    }
}
