use serde::{Deserialize, Serialize};

/// Classification of a calendar day.
/// Only `Work` days contribute worked minutes; the four absence
/// statuses grant a target credit in completed weeks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Work,
    School,
    Vacation,
    Sick,
    Holiday,
    Off,
    Recovery,
}

impl DayStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DayStatus::Work => "work",
            DayStatus::School => "school",
            DayStatus::Vacation => "vacation",
            DayStatus::Sick => "sick",
            DayStatus::Holiday => "holiday",
            DayStatus::Off => "off",
            DayStatus::Recovery => "recovery",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "work" => Some(DayStatus::Work),
            "school" => Some(DayStatus::School),
            "vacation" => Some(DayStatus::Vacation),
            "sick" => Some(DayStatus::Sick),
            "holiday" => Some(DayStatus::Holiday),
            "off" => Some(DayStatus::Off),
            "recovery" => Some(DayStatus::Recovery),
            _ => None,
        }
    }

    /// Parse a user-supplied code (full name or unique prefix used by the CLI).
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "w" | "work" => Some(DayStatus::Work),
            "sc" | "school" => Some(DayStatus::School),
            "v" | "vac" | "vacation" => Some(DayStatus::Vacation),
            "si" | "sick" => Some(DayStatus::Sick),
            "h" | "holiday" => Some(DayStatus::Holiday),
            "o" | "off" => Some(DayStatus::Off),
            "r" | "rec" | "recovery" => Some(DayStatus::Recovery),
            _ => None,
        }
    }

    pub fn is_work(&self) -> bool {
        matches!(self, DayStatus::Work)
    }

    /// Absence statuses earn a per-day target credit in completed weeks.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            DayStatus::School | DayStatus::Vacation | DayStatus::Sick | DayStatus::Holiday
        )
    }
}
