use crate::models::schedule::ScheduleConfig;
use crate::utils::mins2readable;

/// Outcome of validating a schedule against its weekly target.
/// Carries the computed total and the target so the caller can show
/// the exact discrepancy.
#[derive(Debug, Clone)]
pub struct ScheduleCheck {
    pub valid: bool,
    pub total_minutes: i64,
    pub target_minutes: i64,
    pub error: Option<String>,
}

/// Validate that the configured schedule sums exactly to the declared
/// weekly target. No tolerance: the engine derives a single daily
/// target from `weekly_target_hours / work_days_per_week` independently
/// of the templates, so the target must be realizable exactly by the
/// recurring schedule. All sums in integer minutes, never float hours.
pub fn validate(config: &ScheduleConfig) -> ScheduleCheck {
    let target_minutes = config.weekly_target_minutes();
    let days = config.enabled_day_minutes();

    let mut total_minutes = 0i64;
    for (i, d) in days.iter().enumerate() {
        if *d > 1440 {
            return ScheduleCheck {
                valid: false,
                total_minutes: *d,
                target_minutes,
                error: Some(format!(
                    "day {} of the schedule lasts {} minutes, more than a full day",
                    i + 1,
                    d
                )),
            };
        }
        total_minutes += d;
    }

    if total_minutes != target_minutes {
        return ScheduleCheck {
            valid: false,
            total_minutes,
            target_minutes,
            error: Some(format!(
                "schedule sums to {} but the weekly target is {}",
                mins2readable(total_minutes, false, false),
                mins2readable(target_minutes, false, false),
            )),
        };
    }

    ScheduleCheck {
        valid: true,
        total_minutes,
        target_minutes,
        error: None,
    }
}
