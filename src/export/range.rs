use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse a period / --range expression into inclusive date bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(
                "start and end must have the same format".into(),
            ));
        }

        let (d1, _) = parse_single(start)?;
        let (_, d2) = parse_single(end)?;
        Ok((d1, d2))
    } else {
        parse_single(r.trim())
    }
}

/// One period token → its (first day, last day).
fn parse_single(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // Tokens are matched on byte length and sliced below; a multibyte
    // character would make the slices fall mid-character.
    if !p.is_ascii() {
        return Err(AppError::InvalidDate(p.to_string()));
    }

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = p[0..4]
                .parse()
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let m: u32 = p[5..7]
                .parse()
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let last = month_last_day(y, m).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidDate(format!(
            "unsupported period format: {}",
            p
        ))),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
