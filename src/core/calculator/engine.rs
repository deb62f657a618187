//! Weekly earned-minutes engine.
//!
//! Folds the day entries into ISO weeks (keyed by Monday) and sums each
//! week's delta versus an adjusted target. The in-progress week and
//! completed weeks are judged by different rules, applied as a tagged
//! branch inside the fold so exactly one rule fires per week key.
//!
//! Manual overtime events are NOT an input here: earned minutes derive
//! only from day records. Events touch `used_minutes` via the ledger.

use crate::core::calculator::daily;
use crate::models::day_record::DayRecord;
use crate::models::schedule::ScheduleConfig;
use crate::utils::date::monday_of;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default)]
struct WeekAcc {
    minutes: i64,
    absence_days: i64,
    work_dates: BTreeSet<NaiveDate>,
}

/// Total earned minutes across all logged weeks. Can be negative when
/// completed weeks fell short of their target.
///
/// `today` is an explicit parameter (not read from the clock) so the
/// computation is deterministic: the week containing `today` is the
/// in-progress week, every other week is judged as completed.
pub fn compute_earned_minutes(
    entries: &[DayRecord],
    schedule: &ScheduleConfig,
    today: NaiveDate,
) -> i64 {
    let daily_target = schedule.daily_target_minutes();
    // Zero work days means an undefined daily target: every weekly
    // target collapses to 0 rather than propagating NaN/Infinity.
    let weekly_target = if schedule.work_days_per_week == 0 {
        0
    } else {
        schedule.weekly_target_minutes()
    };
    let week_len = schedule.work_days_per_week as i64;

    // 1) Partition entries into ISO weeks.
    let mut weeks: BTreeMap<NaiveDate, WeekAcc> = BTreeMap::new();
    for rec in entries {
        let acc = weeks.entry(monday_of(rec.date)).or_default();

        acc.minutes += daily::worked_minutes(rec);
        if rec.status.is_absence() {
            acc.absence_days += 1;
        }
        if rec.status.is_work() {
            acc.work_dates.insert(rec.date);
        }
    }

    let current_week = monday_of(today);

    // 2) Fold each week's delta against its adjusted target.
    let mut earned = 0i64;
    for (week_key, acc) in &weeks {
        let adjusted_target = if *week_key == current_week {
            // In-progress week: the target shrinks to the days actually
            // accounted for so far (logged or declared absent), capped
            // at the nominal week length. Days not yet reached are not
            // penalized.
            let slots = (acc.work_dates.len() as i64 + acc.absence_days).min(week_len);
            (slots as f64 * daily_target).round() as i64
        } else {
            // Completed week: full nominal target minus a per-absence-day
            // credit. Unlogged days count as shortfall here.
            (weekly_target as f64 - acc.absence_days as f64 * daily_target)
                .max(0.0)
                .round() as i64
        };

        earned += acc.minutes - adjusted_target;
    }

    earned
}
