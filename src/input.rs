use crate::{
    error::{time::Error as E, Error},
    Mode, Time, Unit,
};

/// A value that can be coerced into a [`Time`].
///
/// This is the argument type of [`Time::new`] and of every comparison
/// routine on `Time`. It is usually not named explicitly. Instead, one of
/// its `From` impls is used:
///
/// * `&str` and `&String` parse a `[-]H[:MM[:SS[.fff]]]` string.
/// * Integers are a raw number of milliseconds.
/// * `Time` and `&Time` are used as is.
/// * `Option<T>` where `T` is any of the above. `None` corresponds to
/// [`TimeInput::Missing`] and is always rejected.
///
/// Strings and integers take on the mode of the receiver when used in a
/// comparison, while a `Time` must already have the receiver's mode.
///
/// # Example
///
/// ```
/// use clocktime::Time;
///
/// let t = Time::parse("12:00", clocktime::Mode::Clock)?;
/// assert!(t.is_after("11:59")?);
/// assert!(t.is_before(13 * 60 * 60 * 1000)?);
/// assert!(t.is_same(&Time::noon())?);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub enum TimeInput<'a> {
    /// A string in the form `[-]H[:MM[:SS[.fff]]]`.
    Str(&'a str),
    /// A raw number of milliseconds.
    Millis(i64),
    /// An existing time value.
    Time(Time),
    /// The absence of a value. Coercing this always fails.
    Missing,
}

impl<'a> TimeInput<'a> {
    /// Coerces this input into a `Time` with the given mode.
    ///
    /// Strings and integers are interpreted in `mode`. An existing `Time`
    /// must already be in `mode`.
    pub(crate) fn coerce(self, mode: Mode) -> Result<Time, Error> {
        match self {
            TimeInput::Str(s) => Time::parse(s, mode),
            TimeInput::Millis(millis) => Ok(Time::from_millis(millis, mode)),
            TimeInput::Time(time) => {
                check_mode(mode, time.mode())?;
                Ok(time)
            }
            TimeInput::Missing => Err(E::MissingInput.into()),
        }
    }
}

impl<'a> From<&'a str> for TimeInput<'a> {
    fn from(s: &'a str) -> TimeInput<'a> {
        TimeInput::Str(s)
    }
}

impl<'a> From<&'a String> for TimeInput<'a> {
    fn from(s: &'a String) -> TimeInput<'a> {
        TimeInput::Str(s.as_str())
    }
}

impl<'a> From<Time> for TimeInput<'a> {
    fn from(time: Time) -> TimeInput<'a> {
        TimeInput::Time(time)
    }
}

impl<'a, 'b> From<&'b Time> for TimeInput<'a> {
    fn from(time: &'b Time) -> TimeInput<'a> {
        TimeInput::Time(time.clone())
    }
}

impl<'a, T: Into<TimeInput<'a>>> From<Option<T>> for TimeInput<'a> {
    fn from(input: Option<T>) -> TimeInput<'a> {
        input.map_or(TimeInput::Missing, Into::into)
    }
}

/// An amount of time to add to, or subtract from, a [`Time`].
///
/// This is the argument type of [`Time::add`] and [`Time::sub`]. It is
/// constructed through one of its `From` impls:
///
/// * An integer is a number of milliseconds.
/// * `(integer, Unit)` is an amount of the given unit.
/// * `(integer, &str)` is an amount of the unit named by the string. The
/// name is parsed with `Unit`'s `FromStr` impl, so an unrecognized name
/// is an error when the arithmetic is performed.
/// * `Time` and `&Time` add or subtract the raw millisecond total of
/// another value. Its mode must match the receiver's.
///
/// # Example
///
/// ```
/// use clocktime::{Time, Unit};
///
/// let t: Time = "12:00".parse()?;
/// assert_eq!(t.add((2, Unit::Hour))?.to_string(), "14:00:00");
/// assert_eq!(t.add((30, "minutes"))?.to_string(), "12:30:00");
/// assert_eq!(t.sub(5_000)?.to_string(), "11:59:55");
/// assert_eq!(t.add(&"01:30".parse::<Time>()?)?.to_string(), "13:30:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TimeArithmetic<'a> {
    kind: ArithmeticKind<'a>,
}

#[derive(Clone, Copy, Debug)]
enum ArithmeticKind<'a> {
    Units(i64, Unit),
    Named(i64, &'a str),
    Time { millis: i64, mode: Mode },
}

impl<'a> TimeArithmetic<'a> {
    /// Resolves this amount to a signed number of milliseconds, given the
    /// mode of the value it's being applied to.
    pub(crate) fn to_millis(self, mode: Mode) -> Result<i64, Error> {
        match self.kind {
            ArithmeticKind::Units(amount, unit) => unit.to_millis(amount),
            ArithmeticKind::Named(amount, name) => {
                name.parse::<Unit>()?.to_millis(amount)
            }
            ArithmeticKind::Time { millis, mode: other } => {
                check_mode(mode, other)?;
                Ok(millis)
            }
        }
    }
}

impl<'a> From<Time> for TimeArithmetic<'a> {
    fn from(time: Time) -> TimeArithmetic<'a> {
        TimeArithmetic::from(&time)
    }
}

impl<'a, 'b> From<&'b Time> for TimeArithmetic<'a> {
    fn from(time: &'b Time) -> TimeArithmetic<'a> {
        let kind = ArithmeticKind::Time {
            millis: time.to_milliseconds(),
            mode: time.mode(),
        };
        TimeArithmetic { kind }
    }
}

/// The units and operand for computing the difference between two times.
///
/// This is the argument type of [`Time::diff`]. A bare operand (anything
/// that converts into a [`TimeInput`]) reports the difference in
/// milliseconds. A tuple of `(Unit, operand)` or `(&str, operand)`
/// reports it in the given unit.
///
/// # Example
///
/// ```
/// use clocktime::{Time, Unit};
///
/// let t: Time = "12:01".parse()?;
/// assert_eq!(t.diff("12:00")?, 60_000.0);
/// assert_eq!(t.diff((Unit::Second, "12:00"))?, 60.0);
/// assert_eq!(t.diff(("hours", "12:31"))?, -0.5);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct TimeDifference<'a> {
    unit: UnitName<'a>,
    input: TimeInput<'a>,
}

#[derive(Clone, Copy, Debug)]
enum UnitName<'a> {
    Unit(Unit),
    Named(&'a str),
}

impl<'a> TimeDifference<'a> {
    /// Returns the unit to report the difference in and the operand to
    /// compare against.
    pub(crate) fn into_parts(self) -> Result<(Unit, TimeInput<'a>), Error> {
        let unit = match self.unit {
            UnitName::Unit(unit) => unit,
            UnitName::Named(name) => name.parse()?,
        };
        Ok((unit, self.input))
    }
}

impl<'a> From<TimeInput<'a>> for TimeDifference<'a> {
    fn from(input: TimeInput<'a>) -> TimeDifference<'a> {
        TimeDifference { unit: UnitName::Unit(Unit::Millisecond), input }
    }
}

impl<'a> From<&'a str> for TimeDifference<'a> {
    fn from(s: &'a str) -> TimeDifference<'a> {
        TimeDifference::from(TimeInput::from(s))
    }
}

impl<'a> From<&'a String> for TimeDifference<'a> {
    fn from(s: &'a String) -> TimeDifference<'a> {
        TimeDifference::from(TimeInput::from(s))
    }
}

impl<'a> From<Time> for TimeDifference<'a> {
    fn from(time: Time) -> TimeDifference<'a> {
        TimeDifference::from(TimeInput::from(time))
    }
}

impl<'a, 'b> From<&'b Time> for TimeDifference<'a> {
    fn from(time: &'b Time) -> TimeDifference<'a> {
        TimeDifference::from(TimeInput::from(time))
    }
}

impl<'a, T: Into<TimeInput<'a>>> From<Option<T>> for TimeDifference<'a> {
    fn from(input: Option<T>) -> TimeDifference<'a> {
        TimeDifference::from(TimeInput::from(input))
    }
}

impl<'a, T: Into<TimeInput<'a>>> From<(Unit, T)> for TimeDifference<'a> {
    fn from((unit, input): (Unit, T)) -> TimeDifference<'a> {
        TimeDifference { unit: UnitName::Unit(unit), input: input.into() }
    }
}

impl<'a, T: Into<TimeInput<'a>>> From<(&'a str, T)> for TimeDifference<'a> {
    fn from((name, input): (&'a str, T)) -> TimeDifference<'a> {
        TimeDifference { unit: UnitName::Named(name), input: input.into() }
    }
}

/// Implements the integer conversions for all of the argument types.
///
/// Every integer type that converts losslessly to an `i64` is supported.
/// Supporting more than one integer type means an unsuffixed literal falls
/// back to `i32`, which makes `t.add(5_000)` work as one would expect.
macro_rules! impl_integer_inputs {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> From<$ty> for TimeInput<'a> {
                fn from(millis: $ty) -> TimeInput<'a> {
                    TimeInput::Millis(i64::from(millis))
                }
            }

            impl<'a> From<$ty> for TimeDifference<'a> {
                fn from(millis: $ty) -> TimeDifference<'a> {
                    TimeDifference::from(TimeInput::from(millis))
                }
            }

            impl<'a> From<$ty> for TimeArithmetic<'a> {
                fn from(millis: $ty) -> TimeArithmetic<'a> {
                    let amount = i64::from(millis);
                    let kind =
                        ArithmeticKind::Units(amount, Unit::Millisecond);
                    TimeArithmetic { kind }
                }
            }

            impl<'a> From<($ty, Unit)> for TimeArithmetic<'a> {
                fn from((amount, unit): ($ty, Unit)) -> TimeArithmetic<'a> {
                    let kind = ArithmeticKind::Units(i64::from(amount), unit);
                    TimeArithmetic { kind }
                }
            }

            impl<'a> From<($ty, &'a str)> for TimeArithmetic<'a> {
                fn from(
                    (amount, name): ($ty, &'a str),
                ) -> TimeArithmetic<'a> {
                    let kind = ArithmeticKind::Named(i64::from(amount), name);
                    TimeArithmetic { kind }
                }
            }
        )*
    }
}

impl_integer_inputs!(i8, i16, i32, i64, u8, u16, u32);

/// Returns a mode mismatch error unless `found` is `expected`.
pub(crate) fn check_mode(expected: Mode, found: Mode) -> Result<(), Error> {
    if expected != found {
        return Err(E::ModeMismatch { expected, found }.into());
    }
    Ok(())
}
