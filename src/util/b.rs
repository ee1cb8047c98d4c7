/*!
A module for constants and various base utilities.

Every field bound and unit multiplier used by the parser, the breakdown
of a `Time` into its components and the unit conversions lives here, so
that there is exactly one definition of "how many milliseconds are in an
hour."
*/

use crate::Error;

pub(crate) const SECS_PER_MIN: i64 = 60;
pub(crate) const MINS_PER_HOUR: i64 = 60;
pub(crate) const HOURS_PER_CIVIL_DAY: i64 = 24;

pub(crate) const MILLIS_PER_SEC: i64 = 1_000;
pub(crate) const MILLIS_PER_MIN: i64 = SECS_PER_MIN * MILLIS_PER_SEC;
pub(crate) const MILLIS_PER_HOUR: i64 = MINS_PER_HOUR * MILLIS_PER_MIN;
/// The number of milliseconds in a civil day. That is, a day with exactly
/// 24 hours and no leap seconds.
pub(crate) const MILLIS_PER_CIVIL_DAY: i64 =
    HOURS_PER_CIVIL_DAY * MILLIS_PER_HOUR;

macro_rules! define_bounds {
    ($((
        $name:ident,
        $what:expr,
        $min:expr,
        $max:expr $(,)?
    )),* $(,)?) => {
        $(
            pub(crate) struct $name(());

            impl Bounds for $name {
                const WHAT: &'static str = $what;
                const MIN: i64 = $min;
                const MAX: i64 = $max;
            }

            impl $name {
                #[inline]
                pub(crate) fn check(n: i64) -> Result<i64, Error> {
                    <$name as Bounds>::check(n)
                }
            }
        )*
    }
}

define_bounds! {
    (ClockHour, "hours", 0, 23),
    // Durations may carry any number of hours. Only the sign is checked
    // here, since the overall sign of a duration is given by a leading `-`
    // and never by the hour field itself.
    (DurationHour, "hours", 0, i64::MAX),
    (Minute, "minutes", 0, 59),
    (Second, "seconds", 0, 59),
}

/// An interface for defining boundaries on integer values.
pub(crate) trait Bounds: Sized {
    /// A short human readable description of the values represented by these
    /// bounds.
    const WHAT: &'static str;

    /// The minimum boundary value.
    const MIN: i64;

    /// The maximum boundary value.
    const MAX: i64;

    /// Returns the given integer unchanged if it is within these bounds.
    ///
    /// # Errors
    ///
    /// This returns a range error naming `WHAT`, the value given and the
    /// allowed range when `n` is out of bounds.
    #[inline]
    fn check(n: i64) -> Result<i64, Error> {
        if !(Self::MIN <= n && n <= Self::MAX) {
            return Err(Error::range(Self::WHAT, n, Self::MIN, Self::MAX));
        }
        Ok(n)
    }
}

/// A representation of a numeric sign.
///
/// Its `Display` impl emits the ASCII minus sign, `-` when this
/// is negative. It emits the empty string in all other cases.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[repr(i8)]
pub(crate) enum Sign {
    #[default]
    Zero = 0,
    Positive = 1,
    Negative = -1,
}

impl Sign {
    pub(crate) fn from_i64(n: i64) -> Sign {
        match n.signum() {
            0 => Sign::Zero,
            1 => Sign::Positive,
            _ => Sign::Negative,
        }
    }

    pub(crate) fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    pub(crate) fn as_i64(self) -> i64 {
        i64::from(self as i8)
    }
}

impl core::ops::Mul<i64> for Sign {
    type Output = i64;
    fn mul(self, n: i64) -> i64 {
        self.as_i64() * n
    }
}

impl core::ops::Mul<Sign> for i64 {
    type Output = i64;
    fn mul(self, n: Sign) -> i64 {
        self * n.as_i64()
    }
}

impl core::fmt::Display for Sign {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.is_negative() {
            f.write_str("-")
        } else {
            Ok(())
        }
    }
}
