/*!
Integration with `serde`.

A [`Time`] serializes as its [`TimeJson`] representation. When
deserializing, a `Time` may be given as that same object, as a string in
the form `[-]H[:MM[:SS[.fff]]]` (parsed as a clock time) or as an integer
number of milliseconds (a clock time that wraps around midnight).

```
use clocktime::{Mode, Time};

let d = Time::parse("-01:30", Mode::Duration)?;
let json = serde_json::to_string(&d)?;
assert_eq!(
    json,
    r#"{"hours":-1,"minutes":-30,"seconds":0,"milliseconds":0,"mode":"duration"}"#,
);
assert_eq!(serde_json::from_str::<Time>(&json)?, d);

let t: Time = serde_json::from_str(r#""17:45""#)?;
assert_eq!(t.to_string(), "17:45:00");

let t: Time = serde_json::from_str("3600000")?;
assert_eq!(t.to_string(), "01:00:00");

let err = serde_json::from_str::<Time>("true").unwrap_err();
assert!(err.to_string().contains("but found boolean"));

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use serde::{de, Deserialize, Serialize};

use crate::{error::time::Error as TimeError, Error, Mode, Time, TimeJson};

impl Serialize for Time {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Time {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Time, D::Error> {
        deserializer.deserialize_any(TimeVisitor)
    }
}

struct TimeVisitor;

impl TimeVisitor {
    fn invalid_type<T, E: de::Error>(found: &'static str) -> Result<T, E> {
        Err(de::Error::custom(Error::from(TimeError::InvalidType { found })))
    }
}

impl<'de> de::Visitor<'de> for TimeVisitor {
    type Value = Time;

    fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(
            "a time object, a time string or an integer number of \
             milliseconds",
        )
    }

    #[inline]
    fn visit_str<E: de::Error>(self, value: &str) -> Result<Time, E> {
        value.parse().map_err(de::Error::custom)
    }

    #[inline]
    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Time, E> {
        let Ok(value) = core::str::from_utf8(value) else {
            return TimeVisitor::invalid_type("bytes");
        };
        self.visit_str(value)
    }

    #[inline]
    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Time, E> {
        Ok(Time::clock(value))
    }

    #[inline]
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Time, E> {
        let Ok(value) = i64::try_from(value) else {
            return Err(de::Error::custom(Error::range(
                "milliseconds",
                value,
                i64::MIN,
                i64::MAX,
            )));
        };
        self.visit_i64(value)
    }

    fn visit_map<A: de::MapAccess<'de>>(
        self,
        map: A,
    ) -> Result<Time, A::Error> {
        let json = TimeJson::deserialize(de::value::MapAccessDeserializer::new(
            map,
        ))?;
        Time::from_json(json).map_err(de::Error::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Time, E> {
        Err(de::Error::custom(Error::from(TimeError::MissingInput)))
    }

    fn visit_none<E: de::Error>(self) -> Result<Time, E> {
        self.visit_unit()
    }

    fn visit_some<D: de::Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Time, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Time, E> {
        TimeVisitor::invalid_type("boolean")
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Time, E> {
        TimeVisitor::invalid_type("floating point number")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, _: A) -> Result<Time, A::Error> {
        TimeVisitor::invalid_type("sequence")
    }

    fn visit_enum<A: de::EnumAccess<'de>>(
        self,
        _: A,
    ) -> Result<Time, A::Error> {
        TimeVisitor::invalid_type("enum")
    }
}

impl Serialize for Mode {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mode {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Mode, D::Error> {
        struct ModeVisitor;

        impl<'de> de::Visitor<'de> for ModeVisitor {
            type Value = Mode;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("one of \"clock\" or \"duration\"")
            }

            #[inline]
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Mode, E> {
                match value {
                    "clock" => Ok(Mode::Clock),
                    "duration" => Ok(Mode::Duration),
                    unknown => Err(de::Error::unknown_variant(
                        unknown,
                        &["clock", "duration"],
                    )),
                }
            }
        }

        deserializer.deserialize_str(ModeVisitor)
    }
}
