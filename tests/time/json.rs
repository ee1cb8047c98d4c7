use clocktime::{Mode, Time, TimeJson};

use crate::Result;

#[test]
fn clock_components() -> Result {
    let t: Time = "12:30:45.123".parse()?;
    assert_eq!(
        t.to_json(),
        TimeJson {
            hours: 12,
            minutes: 30,
            seconds: 45,
            milliseconds: 123,
            mode: Mode::Clock,
        },
    );
    Ok(())
}

#[test]
fn negative_duration_components_are_signed() -> Result {
    let d = Time::parse("-01:02:03.004", Mode::Duration)?;
    let json = d.to_json();
    assert_eq!(
        (json.hours, json.minutes, json.seconds, json.milliseconds),
        (-1, -2, -3, -4),
    );
    assert_eq!(Time::from_json(json)?, d);
    Ok(())
}

#[test]
fn round_trip_both_modes() -> Result {
    let times = [
        Time::midnight(),
        "23:59:59.999".parse()?,
        Time::duration(0),
        Time::duration(-1),
        Time::duration(90_000_000),
        Time::duration(i64::MAX),
        Time::duration(i64::MIN),
    ];
    for t in times {
        assert_eq!(Time::from_json(t.to_json())?, t, "{t:?}");
    }
    Ok(())
}

#[test]
fn from_json_normalizes_clock() -> Result {
    let json = TimeJson {
        hours: 0,
        minutes: -30,
        seconds: 0,
        milliseconds: 0,
        mode: Mode::Clock,
    };
    assert_eq!(Time::from_json(json)?.to_string(), "23:30:00");
    Ok(())
}

#[test]
fn from_json_overflow() {
    let json = TimeJson {
        hours: i64::MAX,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
        mode: Mode::Duration,
    };
    assert!(Time::from_json(json).unwrap_err().is_range());
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() -> Result {
    let d = Time::parse("-00:00:01.1", Mode::Duration)?;
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(
        json,
        r#"{"hours":0,"minutes":0,"seconds":-1,"milliseconds":-100,"mode":"duration"}"#,
    );
    assert_eq!(serde_json::from_str::<Time>(&json).unwrap(), d);
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn serde_accepts_strings_and_integers() {
    let t: Time = serde_json::from_str(r#""06:00""#).unwrap();
    assert_eq!(t.to_string(), "06:00:00");
    let t: Time = serde_json::from_str("-1").unwrap();
    assert_eq!(t.to_string(), "23:59:59");

    let times: Vec<Option<Time>> =
        serde_json::from_str(r#"[null, "01:00"]"#).unwrap();
    assert_eq!(times, vec![None, Some(Time::clock(3_600_000))]);
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_other_shapes() {
    let err = serde_json::from_str::<Time>("false").unwrap_err();
    assert!(err.to_string().contains("but found boolean"), "{err}");
    let err = serde_json::from_str::<Time>("null").unwrap_err();
    assert!(err.to_string().contains("must not be null"), "{err}");
}
