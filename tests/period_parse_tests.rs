use chrono::NaiveDate;
use ovlogger::errors::AppError;
use ovlogger::export::range::parse_range;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

#[test]
fn year_token_spans_the_whole_year() {
    assert_eq!(parse_range("2024").unwrap(), (d("2024-01-01"), d("2024-12-31")));
}

#[test]
fn month_token_knows_leap_february() {
    assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
    assert_eq!(parse_range("2023-02").unwrap(), (d("2023-02-01"), d("2023-02-28")));
}

#[test]
fn day_token_is_a_single_day() {
    assert_eq!(parse_range("2024-09-02").unwrap(), (d("2024-09-02"), d("2024-09-02")));
}

#[test]
fn colon_ranges_take_outer_bounds() {
    assert_eq!(
        parse_range("2024-01:2024-03").unwrap(),
        (d("2024-01-01"), d("2024-03-31"))
    );
    assert_eq!(
        parse_range("2024-09-02:2024-09-10").unwrap(),
        (d("2024-09-02"), d("2024-09-10"))
    );
}

#[test]
fn mixed_format_range_is_rejected() {
    let err = parse_range("2024:2024-03").unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
}

#[test]
fn unsupported_shape_is_rejected() {
    let err = parse_range("last-week").unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
}

#[test]
fn non_ascii_token_errors_instead_of_panicking() {
    // 7 bytes but only 6 characters: byte-sliced naively this would
    // split the multibyte character
    let err = parse_range("2024é0").unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));

    let err = parse_range("2024é0:2024é1").unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
}
