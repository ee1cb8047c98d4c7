use crate::{error::unit::Error as E, util::b, Error};

/// A unit of time supported by [`Time`](crate::Time) arithmetic and
/// conversions.
///
/// Units can be named directly, or parsed from their singular or plural
/// English names via `FromStr`. Parsing is case sensitive:
///
/// ```
/// use clocktime::Unit;
///
/// assert_eq!("hour".parse::<Unit>()?, Unit::Hour);
/// assert_eq!("minutes".parse::<Unit>()?, Unit::Minute);
/// assert!("Hours".parse::<Unit>().is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Unit {
    /// A millisecond is the smallest granularity of time supported.
    Millisecond = 0,
    /// A second is always 1,000 milliseconds.
    Second = 1,
    /// A minute is always 60 seconds. (Leap seconds do not exist here.)
    Minute = 2,
    /// An hour is always 60 minutes.
    Hour = 3,
}

/// Every accepted unit name, and the unit it maps to.
///
/// Lookups scan this table, so unknown names are rejected before any
/// multiplier is consulted.
static NAMES: &[(&str, Unit)] = &[
    ("hour", Unit::Hour),
    ("hours", Unit::Hour),
    ("minute", Unit::Minute),
    ("minutes", Unit::Minute),
    ("second", Unit::Second),
    ("seconds", Unit::Second),
    ("millisecond", Unit::Millisecond),
    ("milliseconds", Unit::Millisecond),
];

impl Unit {
    /// Returns the number of milliseconds in one of this unit.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Unit;
    ///
    /// assert_eq!(Unit::Hour.millis(), 3_600_000);
    /// assert_eq!(Unit::Millisecond.millis(), 1);
    /// ```
    #[inline]
    pub fn millis(self) -> i64 {
        match self {
            Unit::Hour => b::MILLIS_PER_HOUR,
            Unit::Minute => b::MILLIS_PER_MIN,
            Unit::Second => b::MILLIS_PER_SEC,
            Unit::Millisecond => 1,
        }
    }

    /// Converts `amount` of this unit to milliseconds.
    ///
    /// This returns an error when the result overflows an `i64`.
    pub(crate) fn to_millis(self, amount: i64) -> Result<i64, Error> {
        amount
            .checked_mul(self.millis())
            .ok_or_else(|| Error::overflow(self.plural()))
    }

    /// Converts a number of milliseconds to this unit without rounding.
    ///
    /// This accepts an `i128` so that the difference between any two
    /// `i64` totals can be converted without overflow.
    pub(crate) fn convert(self, millis: i128) -> f64 {
        millis as f64 / self.millis() as f64
    }

    /// A human readable singular description of this unit of time.
    pub(crate) fn singular(&self) -> &'static str {
        match *self {
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
        }
    }

    /// A human readable plural description of this unit of time.
    pub(crate) fn plural(&self) -> &'static str {
        match *self {
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
            Unit::Millisecond => "milliseconds",
        }
    }
}

impl core::str::FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Unit, Error> {
        NAMES
            .iter()
            .find(|&&(name, _)| name == s)
            .map(|&(_, unit)| unit)
            .ok_or_else(|| E::Unknown { given: s.into() }.into())
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.singular())
    }
}
