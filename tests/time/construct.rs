use clocktime::{Mode, Time, TimeInput};

use crate::Result;

#[test]
fn from_string_defaults_to_clock() -> Result {
    let t = Time::new("12:30:45.123")?;
    assert!(t.is_clock());
    assert_eq!(t.hours(), 12);
    assert_eq!(t.minutes(), 30);
    assert_eq!(t.seconds(), 45);
    assert_eq!(t.milliseconds(), 123);
    assert_eq!(t.format("HH:mm:ss.fff"), "12:30:45.123");
    Ok(())
}

#[test]
fn from_string_optional_fields() -> Result {
    assert_eq!(Time::new("7")?, Time::clock(7 * 3_600_000));
    assert_eq!(Time::new("07:05")?, Time::clock(7 * 3_600_000 + 300_000));
    assert_eq!(Time::new(&String::from("0:0:1"))?, Time::clock(1_000));
    Ok(())
}

#[test]
fn from_millis_wraps_clock() -> Result {
    assert_eq!(Time::new(86_400_000)?, Time::midnight());
    assert_eq!(Time::new(-1)?.to_string(), "23:59:59");
    let t = Time::new(3 * 86_400_000_i64 + 60_000)?;
    assert_eq!(t.to_string(), "00:01:00");
    Ok(())
}

#[test]
fn from_millis_keeps_duration() -> Result {
    let d = Time::new_with_mode(3 * 86_400_000_i64, Mode::Duration)?;
    assert_eq!(d.hours(), 72);
    assert!(d.is_duration());

    let d = Time::new_with_mode(-1, Mode::Duration)?;
    assert_eq!(d.to_milliseconds(), -1);
    assert!(d.is_negative());
    Ok(())
}

#[test]
fn from_time_copies_or_renormalizes() -> Result {
    let d = Time::duration(-3_600_000);

    // Without a mode, the source mode is kept.
    let copy = Time::new(&d)?;
    assert_eq!(copy, d);
    assert!(copy.is_duration());

    // With a mode, the raw total is renormalized.
    let clock = Time::new_with_mode(&d, Mode::Clock)?;
    assert_eq!(clock.to_string(), "23:00:00");
    assert!(clock.is_clock());

    // The source is untouched.
    assert_eq!(d.to_milliseconds(), -3_600_000);
    Ok(())
}

#[test]
fn negative_duration_string() -> Result {
    let d = Time::parse("-00:01:30", Mode::Duration)?;
    assert_eq!(d.to_seconds(), -90.0);
    assert_eq!(d.to_full_seconds(), -90);
    assert_eq!(d.minutes(), 1);
    assert_eq!(d.seconds(), 30);
    Ok(())
}

#[test]
fn duration_hours_are_unbounded() -> Result {
    let d = Time::parse("25:00", Mode::Duration)?;
    assert_eq!(d.hours(), 25);
    let d = Time::parse("100000:59:59.999", Mode::Duration)?;
    assert_eq!(d.hours(), 100_000);
    assert_eq!(d.milliseconds(), 999);
    Ok(())
}

#[test]
fn clock_hour_out_of_range() {
    let err = Time::parse("25:00", Mode::Clock).unwrap_err();
    assert!(err.is_range());
    assert!(err.to_string().contains("invalid hours: 25"));
}

#[test]
fn clock_cannot_be_negative() {
    let err = Time::parse("-1:00", Mode::Clock).unwrap_err();
    assert!(err.is_range());
    assert!(err.to_string().contains("clock time cannot be negative"));
}

#[test]
fn empty_fields_are_not_zero() {
    let err = "12:".parse::<Time>().unwrap_err();
    assert!(err.is_format());
    assert_eq!(
        err.to_string(),
        "failed to parse \"12:\" as clock time: invalid time format: \
         non-numeric value for minutes (found empty field)",
    );
    let err = Time::parse("1:00:", Mode::Duration).unwrap_err();
    assert!(err.to_string().ends_with(
        "non-numeric value for seconds (found empty field)"
    ));
}

#[test]
fn malformed_strings() {
    let strings = [
        "1:2:3:4",
        "abc:def",
        "",
        "12:",
        "12::00",
        "12:30:45.",
        "12:30.5",
        "12h30",
        " 12:30",
        "12:30 ",
        "+12:30",
    ];
    for string in strings {
        let err = string.parse::<Time>().unwrap_err();
        assert!(err.is_format(), "{string:?} should be a format error: {err}");
    }
}

#[test]
fn field_with_its_own_sign_is_out_of_range() {
    for string in ["12:-1", "12:30:-5", "--1"] {
        let err = Time::parse(string, Mode::Duration).unwrap_err();
        assert!(err.is_range(), "{string:?} should be a range error: {err}");
    }
}

#[test]
fn missing_input() {
    let err = Time::new(None::<&str>).unwrap_err();
    assert!(err.is_type());
    assert_eq!(err.to_string(), "time input must not be null or missing");

    let err = Time::new(TimeInput::Missing).unwrap_err();
    assert!(err.is_type());
}

#[test]
fn factories() -> Result {
    assert!(Time::midnight().is_midnight()?);
    assert_eq!(Time::noon().to_string(), "12:00:00");
    assert_eq!(Time::default(), Time::midnight());

    let dt = jiff::civil::date(2024, 2, 29).at(6, 7, 8, 9_000_000);
    assert_eq!(Time::from_date(dt).format("HH:mm:ss.fff"), "06:07:08.009");

    let zdt = dt.to_zoned(jiff::tz::TimeZone::UTC).unwrap();
    assert_eq!(Time::from(&zdt), Time::from_date(dt));
    Ok(())
}

#[test]
fn now() {
    let _ = crate::Logger::init();

    let t = Time::now();
    assert!(t.is_clock());
    assert!(!t.is_negative());
}
