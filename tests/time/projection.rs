use clocktime::{Mode, Time, Unit};

use crate::Result;

#[test]
fn clock_to_duration_and_back() -> Result {
    let d = "22:00".parse::<Time>()?.as_duration().add((10, Unit::Hour))?;
    assert!(d.is_duration());
    assert_eq!(d.to_full_hours(), 32);

    let t = d.as_clock();
    assert!(t.is_clock());
    assert_eq!(t.format("HH:mm"), "08:00");
    Ok(())
}

#[test]
fn negative_duration_to_clock() -> Result {
    let d = Time::parse("-00:30", Mode::Duration)?;
    assert_eq!(d.as_clock().to_string(), "23:30:00");
    assert_eq!(d.with_mode(Mode::Clock), d.as_clock());
    assert_eq!(d.with_mode(Mode::Duration), d);
    Ok(())
}

#[test]
fn clock_to_duration_only_retags() {
    let t = Time::clock(45_000_000);
    let d = t.as_duration();
    assert_eq!(d.to_milliseconds(), t.to_milliseconds());
    assert_eq!(d.mode(), Mode::Duration);
    assert_eq!(t.mode(), Mode::Clock);
}

#[test]
fn fractional_and_floor_conversions() -> Result {
    let d = Time::duration(-10_500);
    assert_eq!(d.to_seconds(), -10.5);
    assert_eq!(d.to_full_seconds(), -11);

    let d = Time::parse("1:30", Mode::Duration)?;
    assert_eq!(d.to_hours(), 1.5);
    assert_eq!(d.to_minutes(), 90.0);
    assert_eq!(d.to_seconds(), 5_400.0);
    assert_eq!(d.to_full_hours(), 1);
    assert_eq!(d.to_full_minutes(), 90);

    let d = Time::parse("-1:30", Mode::Duration)?;
    assert_eq!(d.to_hours(), -1.5);
    assert_eq!(d.to_full_hours(), -2);
    Ok(())
}

#[test]
fn midnight_only_for_clocks() -> Result {
    assert!(Time::midnight().is_midnight()?);
    assert!(Time::clock(86_400_000).is_midnight()?);
    assert!(!"00:00:00.001".parse::<Time>()?.is_midnight()?);

    let err = Time::duration(0).is_midnight().unwrap_err();
    assert!(err.is_invalid_operation());
    assert_eq!(
        err.to_string(),
        "checking for midnight is not applicable to durations",
    );
    Ok(())
}
