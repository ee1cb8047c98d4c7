use clocktime::{Mode, Time, Unit};

use crate::Result;

#[test]
fn clock_wraps_past_midnight() -> Result {
    let t: Time = "23:00".parse()?;
    let later = t.add((2, Unit::Hour))?;
    assert_eq!(later.to_string(), "01:00:00");
    assert!(later.is_clock());

    let earlier = Time::midnight().sub((1, "minute"))?;
    assert_eq!(earlier.to_string(), "23:59:00");

    // Adding whole days is a no-op for clock times.
    assert_eq!(t.add((240, "hours"))?, t);
    Ok(())
}

#[test]
fn duration_does_not_wrap() -> Result {
    let d = Time::parse("23:00", Mode::Duration)?;
    let later = d.add((2, Unit::Hour))?;
    assert_eq!(later.hours(), 25);
    assert_eq!(later.to_string(), "25:00:00");

    let negative = Time::parse("01:00", Mode::Duration)?.sub((2, "hours"))?;
    assert_eq!(negative.to_string(), "-01:00:00");
    assert_eq!(negative.to_full_hours(), -1);
    Ok(())
}

#[test]
fn default_unit_is_milliseconds() -> Result {
    let t = Time::midnight();
    assert_eq!(t.add(1_500)?.format("ss.fff"), "01.500");
    assert_eq!(t.sub(1)?.format("HH:mm:ss.fff"), "23:59:59.999");
    Ok(())
}

#[test]
fn every_unit_alias() -> Result {
    let t = Time::duration(0);
    let cases = [
        ("hour", 3_600_000),
        ("hours", 3_600_000),
        ("minute", 60_000),
        ("minutes", 60_000),
        ("second", 1_000),
        ("seconds", 1_000),
        ("millisecond", 1),
        ("milliseconds", 1),
    ];
    for (name, millis) in cases {
        assert_eq!(t.add((1, name))?.to_milliseconds(), millis, "{name}");
        assert_eq!(t.sub((1, name))?.to_milliseconds(), -millis, "{name}");
    }
    Ok(())
}

#[test]
fn unknown_unit() {
    let t = Time::noon();
    for name in ["day", "Hours", "ms", "", "hr"] {
        let err = t.add((1, name)).unwrap_err();
        assert!(err.is_invalid_unit(), "{name:?} should be rejected");
        assert!(err.to_string().contains(&format!("'{name}'")));
    }
}

#[test]
fn add_time_of_same_mode() -> Result {
    let start: Time = "08:45".parse()?;
    let shift = Time::parse("09:30", Mode::Clock)?;
    assert_eq!(start.add(&shift)?.to_string(), "18:15:00");

    let d1 = Time::parse("20:00", Mode::Duration)?;
    let d2 = Time::parse("10:00", Mode::Duration)?;
    assert_eq!(d1.add(&d2)?.hours(), 30);
    assert_eq!(d2.sub(d1)?.to_string(), "-10:00:00");
    Ok(())
}

#[test]
fn add_time_of_other_mode() {
    let clock = Time::noon();
    let duration = Time::duration(1_000);
    assert!(clock.add(&duration).unwrap_err().is_mode_mismatch());
    assert!(duration.sub(&clock).unwrap_err().is_mode_mismatch());
}

#[test]
fn receiver_is_unchanged() -> Result {
    let t: Time = "10:00".parse()?;
    let _ = t.add((5, Unit::Hour))?;
    let _ = t.sub((5, Unit::Hour))?;
    let _ = t.as_duration();
    assert_eq!(t.to_string(), "10:00:00");
    assert!(t.is_clock());
    Ok(())
}

#[test]
fn duration_overflow() {
    let d = Time::duration(i64::MAX);
    assert!(d.add(1).unwrap_err().is_range());
    assert!(Time::duration(i64::MIN).sub(1).unwrap_err().is_range());
    let err = Time::duration(0).add((i64::MAX, "minutes")).unwrap_err();
    assert!(err.is_range());
}
