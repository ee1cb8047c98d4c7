use clocktime::{Mode, Time};

use crate::Result;

#[test]
fn round_trips_full_precision() -> Result {
    let t: Time = "12:30:45.123".parse()?;
    assert_eq!(t.format("HH:mm:ss.fff"), "12:30:45.123");
    Ok(())
}

#[test]
fn padded_and_unpadded() -> Result {
    let t: Time = "01:02:03.004".parse()?;
    let cases = [
        ("HH:mm:ss.fff", "01:02:03.004"),
        ("H:m:s.f", "1:2:3.4"),
        ("HHmm", "0102"),
        ("H.mm", "1.02"),
        ("fff", "004"),
        ("f", "4"),
        ("", ""),
        ("--", "--"),
    ];
    for (pattern, expected) in cases {
        assert_eq!(t.format(pattern), expected, "pattern {pattern:?}");
    }
    Ok(())
}

#[test]
fn display_is_hours_minutes_seconds() -> Result {
    let t: Time = "07:08:09.999".parse()?;
    assert_eq!(t.to_string(), "07:08:09");
    assert_eq!(format!("{t}"), t.format("HH:mm:ss"));
    Ok(())
}

#[test]
fn negative_durations_are_prefixed() -> Result {
    let d = Time::duration(-1_100);
    assert_eq!(d.hours(), 0);
    assert_eq!(d.minutes(), 0);
    assert_eq!(d.seconds(), 1);
    assert_eq!(d.milliseconds(), 100);
    assert_eq!(d.to_string(), "-00:00:01");
    assert_eq!(d.format("s.fff"), "-1.100");

    let d = Time::parse("-36:15", Mode::Duration)?;
    assert_eq!(d.format("HH:mm"), "-36:15");
    Ok(())
}

#[test]
fn numeric_coercion() -> Result {
    let d = Time::parse("-00:00:01.5", Mode::Duration)?;
    assert_eq!(i64::from(d), -1_500);
    let t: Time = "00:00:02".parse()?;
    assert_eq!(i64::from(t.clone()), 2_000);
    assert_eq!(t.to_milliseconds(), 2_000);
    Ok(())
}

#[test]
fn debug_shows_mode_and_total() {
    assert_eq!(
        format!("{:?}", Time::clock(1_000)),
        "Time { mode: Clock, millis: 1000 }",
    );
}
