use clocktime::{Mode, Time, Unit};

use crate::Result;

#[test]
fn ordering_predicates() -> Result {
    let t: Time = "10:00".parse()?;
    assert!(t.is_before("10:00:00.001")?);
    assert!(!t.is_before("10:00")?);
    assert!(t.is_after("09:59:59.999")?);
    assert!(!t.is_after("10:00")?);
    assert!(t.is_same_or_before("10:00")?);
    assert!(t.is_same_or_after("10:00")?);
    assert!(t.is_same("10:00:00.000")?);
    assert!(t.is_same(36_000_000)?);
    assert!(t.is_same(Time::clock(36_000_000))?);
    Ok(())
}

#[test]
fn operands_take_receiver_mode() -> Result {
    // As a duration, "-1:00" is valid and is before zero.
    let d = Time::duration(0);
    assert!(d.is_after("-1:00")?);
    assert!(d.is_after(-1)?);

    // As a clock time, -1 wraps to the end of the day.
    let t = Time::midnight();
    assert!(t.is_before(-1)?);
    assert!(t.is_before("-1:00").unwrap_err().is_range());
    Ok(())
}

#[test]
fn between_is_inclusive() -> Result {
    let t: Time = "09:00".parse()?;
    assert!(t.is_between("09:00", "17:00")?);
    assert!(t.is_between("08:00", "09:00")?);
    assert!(!t.is_between("09:00:00.001", "17:00")?);
    assert!(!t.is_between_exclusive("09:00", "17:00")?);
    assert!(t.is_between_exclusive("08:59", "09:01")?);
    Ok(())
}

#[test]
fn between_checks_both_bounds() {
    let t = Time::noon();
    let d = Time::duration(0);
    assert!(t.is_between(&d, "13:00").unwrap_err().is_mode_mismatch());
    assert!(t.is_between("11:00", &d).unwrap_err().is_mode_mismatch());
    assert!(t.is_between("11:00", None::<&str>).unwrap_err().is_type());
}

#[test]
fn mode_mismatch() {
    let clock = Time::noon();
    let duration = Time::duration(43_200_000);
    assert!(clock.is_same(&duration).unwrap_err().is_mode_mismatch());
    assert!(duration.is_before(&clock).unwrap_err().is_mode_mismatch());
    assert!(clock.diff(&duration).unwrap_err().is_mode_mismatch());
    assert_eq!(
        clock.is_after(duration).unwrap_err().to_string(),
        "cannot compare clock time with duration",
    );
}

#[test]
fn missing_operand() {
    let t = Time::noon();
    let err = t.is_same(None::<Time>).unwrap_err();
    assert!(err.is_type());
}

#[test]
fn diff_in_units() -> Result {
    let t: Time = "12:00".parse()?;
    assert_eq!(t.diff("11:00")?, 3_600_000.0);
    assert_eq!(t.diff((Unit::Hour, "11:00"))?, 1.0);
    assert_eq!(t.diff(("minutes", "11:15"))?, 45.0);
    assert_eq!(t.diff(("seconds", "12:00:01.5"))?, -1.5);
    assert!(t.diff(("days", "11:00")).unwrap_err().is_invalid_unit());
    Ok(())
}

#[test]
fn diff_between_durations() -> Result {
    let d1 = Time::parse("30:00", Mode::Duration)?;
    let d2 = Time::parse("-6:00", Mode::Duration)?;
    assert_eq!(d1.diff((Unit::Hour, &d2))?, 36.0);
    assert_eq!(d2.diff((Unit::Hour, &d1))?, -36.0);

    let max = Time::duration(i64::MAX);
    let min = Time::duration(i64::MIN);
    assert!(max.diff(&min)? > 1.8e19);
    Ok(())
}

#[test]
fn partial_ord_and_eq() -> Result {
    let a: Time = "08:00".parse()?;
    let b: Time = "20:00".parse()?;
    assert!(a < b);
    assert_eq!(a, Time::clock(8 * 3_600_000));
    assert_ne!(a, a.as_duration());
    assert_eq!(a.partial_cmp(&a.as_duration()), None);

    let mut times = vec![b.clone(), a.clone(), Time::midnight()];
    times.sort_by(|x, y| x.partial_cmp(y).unwrap());
    assert_eq!(times, vec![Time::midnight(), a, b]);
    Ok(())
}
