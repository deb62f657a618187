use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;

/// Write day records as pretty-printed JSON.
pub fn write_json(path: &str, records: &[DayRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
