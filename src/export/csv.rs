use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::day_status::DayStatus;
use crate::utils::time::parse_time;
use chrono::NaiveDate;
use csv::{Reader, Writer};

const HEADER: [&str; 8] = [
    "date",
    "status",
    "start",
    "lunch_start",
    "lunch_end",
    "end",
    "notes",
    "updated_at",
];

fn time_cell(t: Option<chrono::NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

/// Write day records to CSV.
pub fn write_csv(path: &str, records: &[DayRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(HEADER)
        .map_err(|e| AppError::Export(e.to_string()))?;

    for rec in records {
        wtr.write_record(&[
            rec.date_str(),
            rec.status.to_db_str().to_string(),
            time_cell(rec.start),
            time_cell(rec.lunch_start),
            time_cell(rec.lunch_end),
            time_cell(rec.end),
            rec.notes.clone(),
            rec.updated_at.clone(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Read day records back from CSV (the import side of the same format).
/// Empty time cells mean "not set"; a missing `updated_at` loses every
/// merge against existing local rows.
pub fn read_csv(path: &str) -> AppResult<Vec<DayRecord>> {
    let mut rdr = Reader::from_path(path).map_err(|e| AppError::Import(e.to_string()))?;

    let mut out = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(|e| AppError::Import(e.to_string()))?;

        let field = |i: usize| row.get(i).unwrap_or("").trim().to_string();

        let date_str = field(0);
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(date_str.clone()))?;

        let status_str = field(1);
        let status = DayStatus::from_db_str(&status_str)
            .ok_or_else(|| AppError::InvalidStatus(status_str.clone()))?;

        let time_field = |i: usize| -> AppResult<Option<chrono::NaiveTime>> {
            let s = field(i);
            if s.is_empty() {
                return Ok(None);
            }
            parse_time(&s)
                .map(Some)
                .ok_or_else(|| AppError::InvalidTime(s))
        };

        out.push(DayRecord {
            id: 0,
            date,
            status,
            start: time_field(2)?,
            lunch_start: time_field(3)?,
            lunch_end: time_field(4)?,
            end: time_field(5)?,
            notes: field(6),
            updated_at: field(7),
        });
    }

    Ok(out)
}
