use super::*;
use shared::protocol::PLACEHOLDER_TIME;

fn query(km: Option<&str>, brev_dist: Option<&str>, start_date: Option<&str>) -> CalcTimesQuery {
    CalcTimesQuery {
        km: km.map(str::to_string),
        brev_dist: brev_dist.map(str::to_string),
        start_date: start_date.map(str::to_string),
    }
}

const START: Option<&str> = Some("2021-01-01T07:00");

#[test]
fn valid_request_formats_open_and_close() {
    let result = calc_times(
        &query(Some("120"), Some("200"), START),
        CalcDefaults::default(),
    );
    assert_eq!(result.ecode, ErrorCode::Ok);
    assert_eq!(result.open, "2021-01-01T10:32");
    assert_eq!(result.close, "2021-01-01T15:00");
}

#[test]
fn times_stay_in_the_start_offset() {
    let result = calc_times(
        &query(Some("890"), Some("1000"), Some("2024-06-01T05:00:00-07:00")),
        CalcDefaults::default(),
    );
    assert_eq!(result.open, "2024-06-02T10:09");
    assert_eq!(result.close, "2024-06-03T22:23");
}

#[test]
fn each_failure_kind_has_its_own_code() {
    let cases = [
        (query(Some("-1"), Some("200"), START), ErrorCode::OutOfRange),
        (query(Some("1201"), Some("200"), START), ErrorCode::OutOfRange),
        (
            query(Some("400"), Some("200"), START),
            ErrorCode::ControlBeyondBrevet,
        ),
        (
            query(Some("150"), Some("199"), START),
            ErrorCode::UnsupportedBrevet,
        ),
        (
            query(Some("apple"), Some("200"), START),
            ErrorCode::InvalidInput,
        ),
        (
            query(Some("100"), Some("200.5"), START),
            ErrorCode::InvalidInput,
        ),
        (query(Some("100"), Some("200"), None), ErrorCode::InvalidInput),
        (
            query(Some("100"), Some("200"), Some("yesterday")),
            ErrorCode::InvalidInput,
        ),
    ];

    for (query, expected) in cases {
        let result = calc_times(&query, CalcDefaults::default());
        assert_eq!(result.ecode, expected, "{query:?}");
        assert_eq!(result.open, PLACEHOLDER_TIME);
        assert_eq!(result.close, PLACEHOLDER_TIME);
    }
}

#[test]
fn integer_brevet_lengths_reach_the_core_checks() {
    let cases = [
        (query(Some("1201"), Some("-5"), START), ErrorCode::OutOfRange),
        (
            query(Some("100"), Some("-200"), START),
            ErrorCode::UnsupportedBrevet,
        ),
        (
            query(Some("100"), Some("5000000000"), START),
            ErrorCode::UnsupportedBrevet,
        ),
    ];

    for (query, expected) in cases {
        let result = calc_times(&query, CalcDefaults::default());
        assert_eq!(result.ecode, expected, "{query:?}");
    }
}

#[test]
fn missing_distances_fall_back_to_defaults() {
    // 999 km never fits the default 200 km brevet.
    let result = calc_times(&query(None, None, START), CalcDefaults::default());
    assert_eq!(result.ecode, ErrorCode::ControlBeyondBrevet);

    let defaults = CalcDefaults {
        control_km: 0.0,
        brevet_km: 300,
    };
    let result = calc_times(&query(Some(" "), None, START), defaults);
    assert_eq!(result.ecode, ErrorCode::Ok);
    assert_eq!(result.open, "2021-01-01T07:00");
    assert_eq!(result.close, "2021-01-01T08:00");
}

#[test]
fn error_codes_cover_every_error_kind() {
    assert_eq!(
        error_code(&ControlTimeError::OutOfRange(-3.0)),
        ErrorCode::OutOfRange
    );
    assert_eq!(
        error_code(&ControlTimeError::InputType("x".into())),
        ErrorCode::InvalidInput
    );
}
