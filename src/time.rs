use std::sync::OnceLock;

use crate::{
    error::{time::Error as E, Error},
    fmt::{format::Formatter, parse::TimeParser},
    input::{TimeArithmetic, TimeDifference, TimeInput},
    util::b::{self, Sign},
    Mode, Unit,
};

/// A time of day or an elapsed duration, with millisecond precision.
///
/// A `Time` is a signed number of milliseconds together with a [`Mode`].
/// In [`Mode::Clock`], the total is the offset from midnight and is always
/// in the range `00:00:00.000..=23:59:59.999`. Anything outside that range
/// wraps around, so one hour before midnight is `23:00`. In
/// [`Mode::Duration`], the total is never wrapped. It may exceed 24 hours
/// and may be negative.
///
/// A `Time` is immutable. Arithmetic and mode conversions always return a
/// new value and never change the mode of their receiver.
///
/// # Creating a `Time`
///
/// Times can be parsed from strings in the form `[-]H[:MM[:SS[.fff]]]`,
/// built from a number of milliseconds or taken from the current time:
///
/// ```
/// use clocktime::{Mode, Time};
///
/// let t: Time = "12:30:45.123".parse()?;
/// assert_eq!(t.to_string(), "12:30:45");
/// assert_eq!(t.format("HH:mm:ss.fff"), "12:30:45.123");
///
/// let d = Time::parse("-00:01:30", Mode::Duration)?;
/// assert_eq!(d.to_seconds(), -90.0);
///
/// let t = Time::clock(-60 * 60 * 1000);
/// assert_eq!(t.to_string(), "23:00:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`Time::new`] and [`Time::new_with_mode`] accept any [`TimeInput`].
///
/// # Comparisons
///
/// `Time` implements `Eq` and `Hash` over its mode and total. Its
/// `PartialOrd` impl returns `None` when the modes differ, since a time
/// of day and a duration are not comparable. The `is_*` comparison
/// routines accept strings and integers too, and report a mode mismatch
/// as an error:
///
/// ```
/// use clocktime::{Mode, Time};
///
/// let t: Time = "10:00".parse()?;
/// assert!(t.is_before("10:30")?);
/// assert!(t < Time::noon());
///
/// let d = Time::parse("10:00", Mode::Duration)?;
/// assert!(t.partial_cmp(&d).is_none());
/// assert!(t.is_before(&d).unwrap_err().is_mode_mismatch());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Components
///
/// The hour, minute, second and millisecond components of a `Time` are
/// computed on first access and then cached. For a negative duration, the
/// components are magnitudes. The sign is only available from the total:
///
/// ```
/// use clocktime::Time;
///
/// let d = Time::duration(-1_100);
/// assert_eq!(d.seconds(), 1);
/// assert_eq!(d.milliseconds(), 100);
/// assert!(d.is_negative());
/// assert_eq!(d.to_string(), "-00:00:01");
/// ```
#[derive(Clone)]
pub struct Time {
    millis: i64,
    mode: Mode,
    parts: OnceLock<Parts>,
}

/// The components of a time.
///
/// These are always computed together, so a partially populated set of
/// components is never observable.
#[derive(Clone, Copy, Debug)]
struct Parts {
    hours: i64,
    minutes: i8,
    seconds: i8,
    milliseconds: i16,
}

impl Parts {
    /// Breaks the magnitude of `millis` down into its components.
    fn new(millis: i64) -> Parts {
        let magnitude = millis.unsigned_abs();
        let millis_per_hour = b::MILLIS_PER_HOUR as u64;
        let millis_per_min = b::MILLIS_PER_MIN as u64;
        let millis_per_sec = b::MILLIS_PER_SEC as u64;

        let hours = magnitude / millis_per_hour;
        let rem = magnitude % millis_per_hour;
        let minutes = rem / millis_per_min;
        let rem = rem % millis_per_min;
        let seconds = rem / millis_per_sec;
        let milliseconds = rem % millis_per_sec;
        Parts {
            // `u64::MAX / 3_600_000` is well within `i64`.
            hours: hours as i64,
            minutes: minutes as i8,
            seconds: seconds as i8,
            milliseconds: milliseconds as i16,
        }
    }
}

/// Constructors.
impl Time {
    /// Creates a new clock time from any supported input.
    ///
    /// Strings are parsed in clock mode and integers are a number of
    /// milliseconds that wraps around midnight. An existing `Time` is
    /// returned as is, including its mode.
    ///
    /// # Errors
    ///
    /// This returns an error when a string is malformed or out of range,
    /// or when the input is missing.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// assert_eq!(Time::new("09:15")?.to_string(), "09:15:00");
    /// assert_eq!(Time::new(90_000_000)?.to_string(), "01:00:00");
    /// assert!(Time::new(None::<&str>).unwrap_err().is_type());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new<'a>(input: impl Into<TimeInput<'a>>) -> Result<Time, Error> {
        match input.into() {
            TimeInput::Time(time) => Ok(time),
            input => input.coerce(Mode::Clock),
        }
    }

    /// Creates a new time in the given mode from any supported input.
    ///
    /// Unlike [`Time::new`], an existing `Time` is converted to `mode`.
    /// Converting a duration to a clock time wraps it into a single day.
    ///
    /// # Errors
    ///
    /// This returns an error when a string is malformed or out of range
    /// for `mode`, or when the input is missing.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::{Mode, Time};
    ///
    /// let d = Time::new_with_mode("-1:30", Mode::Duration)?;
    /// assert_eq!(d.to_full_minutes(), -90);
    ///
    /// let t = Time::new_with_mode(&d, Mode::Clock)?;
    /// assert_eq!(t.to_string(), "22:30:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new_with_mode<'a>(
        input: impl Into<TimeInput<'a>>,
        mode: Mode,
    ) -> Result<Time, Error> {
        match input.into() {
            TimeInput::Time(time) => Ok(time.with_mode(mode)),
            input => input.coerce(mode),
        }
    }

    /// Parses a string in the form `[-]H[:MM[:SS[.fff]]]` in the given
    /// mode.
    ///
    /// The minutes and seconds fields are optional and default to zero.
    /// Minutes and seconds must be less than 60. In clock mode, hours must
    /// be less than 24 and a leading `-` is not allowed. The optional
    /// fraction on the seconds field is truncated to milliseconds.
    ///
    /// Every field that is present must have at least one digit. An empty
    /// field is never read as zero, so `"12:"` is an error instead of
    /// `12:00`.
    ///
    /// Implementing [`FromStr`](core::str::FromStr) is equivalent to
    /// parsing with [`Mode::Clock`].
    ///
    /// # Errors
    ///
    /// This returns a format error when the string has more than three
    /// fields or a field is empty or isn't a number, and a range error when a field is
    /// out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::{Mode, Time};
    ///
    /// let d = Time::parse("25:00", Mode::Duration)?;
    /// assert_eq!(d.hours(), 25);
    ///
    /// let err = Time::parse("25:00", Mode::Clock).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "failed to parse \"25:00\" as clock time: \
    ///      invalid hours: 25 is not in the required range of 0..=23",
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse(input: &str, mode: Mode) -> Result<Time, Error> {
        let millis = TimeParser::new(mode).parse(input)?;
        Ok(Time::from_millis(millis, mode))
    }

    /// Creates a time from a number of milliseconds in the given mode.
    ///
    /// In clock mode, the total wraps into a single day.
    #[inline]
    pub fn from_millis(millis: i64, mode: Mode) -> Time {
        Time { millis: mode.normalize(millis), mode, parts: OnceLock::new() }
    }

    /// Creates a clock time from a number of milliseconds since midnight.
    ///
    /// The total wraps, so any `i64` is accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// assert_eq!(Time::clock(0), Time::midnight());
    /// assert_eq!(Time::clock(86_400_000), Time::midnight());
    /// assert_eq!(Time::clock(-1).to_string(), "23:59:59");
    /// ```
    #[inline]
    pub fn clock(millis: i64) -> Time {
        Time::from_millis(millis, Mode::Clock)
    }

    /// Creates a duration from a number of milliseconds.
    #[inline]
    pub fn duration(millis: i64) -> Time {
        Time::from_millis(millis, Mode::Duration)
    }

    /// Returns the clock time `00:00:00.000`.
    #[inline]
    pub fn midnight() -> Time {
        Time::clock(0)
    }

    /// Returns the clock time `12:00:00.000`.
    #[inline]
    pub fn noon() -> Time {
        Time::clock(12 * b::MILLIS_PER_HOUR)
    }

    /// Returns the current wall clock time in the system's time zone.
    ///
    /// The system time zone is found by `jiff`. Precision beyond
    /// milliseconds is discarded.
    pub fn now() -> Time {
        let zdt = jiff::Zoned::now();
        debug!(
            "current time in {tz} is {zdt}",
            tz = zdt.time_zone().iana_name().unwrap_or("an unnamed time zone"),
        );
        Time::from(&zdt)
    }

    /// Returns the clock time of the given civil datetime.
    ///
    /// Only the hour, minute, second and millisecond are used.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    /// use jiff::civil::date;
    ///
    /// let dt = date(2024, 7, 11).at(17, 30, 5, 250_999_999);
    /// let t = Time::from_date(dt);
    /// assert_eq!(t.format("HH:mm:ss.fff"), "17:30:05.250");
    /// ```
    pub fn from_date(dt: jiff::civil::DateTime) -> Time {
        Time::from(dt.time())
    }
}

/// Accessors.
impl Time {
    /// Returns the mode of this time.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true if this is a time of day.
    #[inline]
    pub fn is_clock(&self) -> bool {
        self.mode.is_clock()
    }

    /// Returns true if this is a duration.
    #[inline]
    pub fn is_duration(&self) -> bool {
        self.mode.is_duration()
    }

    /// Returns true if this is a negative duration.
    ///
    /// Clock times are never negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.millis < 0
    }

    /// Returns the raw signed total of this time, in milliseconds.
    ///
    /// This is the same as `i64::from(time)`.
    #[inline]
    pub fn to_milliseconds(&self) -> i64 {
        self.millis
    }

    /// Returns the hour component.
    ///
    /// For clock times, this is in the range `0..=23`. For durations this
    /// is never wrapped, so a 25 hour duration returns `25`.
    #[inline]
    pub fn hours(&self) -> i64 {
        self.parts().hours
    }

    /// Returns the minute component, in the range `0..=59`.
    #[inline]
    pub fn minutes(&self) -> i8 {
        self.parts().minutes
    }

    /// Returns the second component, in the range `0..=59`.
    #[inline]
    pub fn seconds(&self) -> i8 {
        self.parts().seconds
    }

    /// Returns the millisecond component, in the range `0..=999`.
    #[inline]
    pub fn milliseconds(&self) -> i16 {
        self.parts().milliseconds
    }

    /// Returns the total of this time in fractional hours.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// assert_eq!(Time::duration(-9_000_000).to_hours(), -2.5);
    /// ```
    #[inline]
    pub fn to_hours(&self) -> f64 {
        Unit::Hour.convert(i128::from(self.millis))
    }

    /// Returns the total of this time in fractional minutes.
    #[inline]
    pub fn to_minutes(&self) -> f64 {
        Unit::Minute.convert(i128::from(self.millis))
    }

    /// Returns the total of this time in fractional seconds.
    #[inline]
    pub fn to_seconds(&self) -> f64 {
        Unit::Second.convert(i128::from(self.millis))
    }

    /// Returns the number of whole hours in this time.
    ///
    /// This rounds toward negative infinity, so negative durations
    /// round away from zero.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// assert_eq!(Time::duration(9_000_000).to_full_hours(), 2);
    /// assert_eq!(Time::duration(-9_000_000).to_full_hours(), -3);
    /// ```
    #[inline]
    pub fn to_full_hours(&self) -> i64 {
        self.millis.div_euclid(b::MILLIS_PER_HOUR)
    }

    /// Returns the number of whole minutes in this time, rounding toward
    /// negative infinity.
    #[inline]
    pub fn to_full_minutes(&self) -> i64 {
        self.millis.div_euclid(b::MILLIS_PER_MIN)
    }

    /// Returns the number of whole seconds in this time, rounding toward
    /// negative infinity.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// let d = Time::duration(-10_500);
    /// assert_eq!(d.to_seconds(), -10.5);
    /// assert_eq!(d.to_full_seconds(), -11);
    /// ```
    #[inline]
    pub fn to_full_seconds(&self) -> i64 {
        self.millis.div_euclid(b::MILLIS_PER_SEC)
    }

    /// Returns true when this clock time is exactly midnight.
    ///
    /// # Errors
    ///
    /// Midnight has no meaning for a duration, so this returns an error
    /// when called on one.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// assert!(Time::midnight().is_midnight()?);
    /// assert!(!Time::clock(1).is_midnight()?);
    /// assert!(Time::duration(0).is_midnight().is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_midnight(&self) -> Result<bool, Error> {
        if self.is_duration() {
            return Err(E::MidnightOnDuration.into());
        }
        Ok(self.millis == 0)
    }

    fn parts(&self) -> &Parts {
        self.parts.get_or_init(|| Parts::new(self.millis))
    }
}

/// Arithmetic.
impl Time {
    /// Returns this time plus the given amount.
    ///
    /// The amount is an integer number of milliseconds, a tuple of an
    /// integer and a [`Unit`] (or a unit name), or another `Time` of the
    /// same mode. See [`TimeArithmetic`]. The result has the mode of
    /// `self`, and clock times wrap around midnight.
    ///
    /// # Errors
    ///
    /// This returns an error when a unit name isn't recognized, when
    /// adding a `Time` of a different mode or when a duration overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::{Mode, Time, Unit};
    ///
    /// let t: Time = "23:00".parse()?;
    /// assert_eq!(t.add((2, Unit::Hour))?.to_string(), "01:00:00");
    ///
    /// let d = Time::parse("23:00", Mode::Duration)?;
    /// assert_eq!(d.add((2, "hours"))?.hours(), 25);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn add<'a>(
        &self,
        amount: impl Into<TimeArithmetic<'a>>,
    ) -> Result<Time, Error> {
        let delta = amount.into().to_millis(self.mode)?;
        self.offset(self.reduce(delta), i64::checked_add, "sum")
    }

    /// Returns this time minus the given amount.
    ///
    /// This accepts the same amounts as [`Time::add`].
    ///
    /// # Errors
    ///
    /// This returns an error when a unit name isn't recognized, when
    /// subtracting a `Time` of a different mode or when a duration
    /// overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::{Mode, Time};
    ///
    /// let t: Time = "00:30".parse()?;
    /// assert_eq!(t.sub((45, "minutes"))?.to_string(), "23:45:00");
    ///
    /// let d = Time::parse("00:30", Mode::Duration)?;
    /// assert_eq!(d.sub((45, "minutes"))?.to_string(), "-00:15:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn sub<'a>(
        &self,
        amount: impl Into<TimeArithmetic<'a>>,
    ) -> Result<Time, Error> {
        let delta = amount.into().to_millis(self.mode)?;
        self.offset(self.reduce(delta), i64::checked_sub, "difference")
    }

    /// Reduces a delta to the part that affects this time.
    ///
    /// Clock times only depend on a delta modulo one day.
    fn reduce(&self, delta: i64) -> i64 {
        match self.mode {
            Mode::Clock => delta % b::MILLIS_PER_CIVIL_DAY,
            Mode::Duration => delta,
        }
    }

    fn offset(
        &self,
        delta: i64,
        op: fn(i64, i64) -> Option<i64>,
        what: &'static str,
    ) -> Result<Time, Error> {
        let millis =
            op(self.millis, delta).ok_or_else(|| Error::overflow(what))?;
        Ok(Time::from_millis(millis, self.mode))
    }
}

/// Comparisons.
///
/// Every comparison coerces its operands into the mode of `self`. See
/// [`TimeInput`] for the inputs accepted.
impl Time {
    /// Returns true if this time is strictly before the given time.
    ///
    /// # Errors
    ///
    /// This returns an error when the input can't be coerced into a time
    /// with the mode of `self`.
    pub fn is_before<'a>(
        &self,
        other: impl Into<TimeInput<'a>>,
    ) -> Result<bool, Error> {
        Ok(self.millis < self.coerce(other)?.millis)
    }

    /// Returns true if this time is strictly after the given time.
    ///
    /// # Errors
    ///
    /// This returns an error when the input can't be coerced into a time
    /// with the mode of `self`.
    pub fn is_after<'a>(
        &self,
        other: impl Into<TimeInput<'a>>,
    ) -> Result<bool, Error> {
        Ok(self.millis > self.coerce(other)?.millis)
    }

    /// Returns true if this time is before or equal to the given time.
    ///
    /// # Errors
    ///
    /// This returns an error when the input can't be coerced into a time
    /// with the mode of `self`.
    pub fn is_same_or_before<'a>(
        &self,
        other: impl Into<TimeInput<'a>>,
    ) -> Result<bool, Error> {
        Ok(self.millis <= self.coerce(other)?.millis)
    }

    /// Returns true if this time is after or equal to the given time.
    ///
    /// # Errors
    ///
    /// This returns an error when the input can't be coerced into a time
    /// with the mode of `self`.
    pub fn is_same_or_after<'a>(
        &self,
        other: impl Into<TimeInput<'a>>,
    ) -> Result<bool, Error> {
        Ok(self.millis >= self.coerce(other)?.millis)
    }

    /// Returns true if this time is equal to the given time.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// let t = Time::noon();
    /// assert!(t.is_same("12:00")?);
    /// assert!(t.is_same(43_200_000)?);
    /// // Integers wrap in clock mode.
    /// assert!(t.is_same(43_200_000 + 86_400_000)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_same<'a>(
        &self,
        other: impl Into<TimeInput<'a>>,
    ) -> Result<bool, Error> {
        Ok(self.millis == self.coerce(other)?.millis)
    }

    /// Returns true if this time is in the range `start..=end`.
    ///
    /// When `start` is after `end`, this always returns false. That is,
    /// clock time ranges do not wrap around midnight.
    ///
    /// # Errors
    ///
    /// This returns an error when either bound can't be coerced into a
    /// time with the mode of `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// let t: Time = "09:00".parse()?;
    /// assert!(t.is_between("09:00", "17:00")?);
    /// assert!(!t.is_between_exclusive("09:00", "17:00")?);
    /// assert!(!t.is_between("22:00", "10:00")?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_between<'a, 'b>(
        &self,
        start: impl Into<TimeInput<'a>>,
        end: impl Into<TimeInput<'b>>,
    ) -> Result<bool, Error> {
        let (start, end) = (self.coerce(start)?, self.coerce(end)?);
        Ok(start.millis <= self.millis && self.millis <= end.millis)
    }

    /// Returns true if this time is in the range `start..end`, excluding
    /// `start` too.
    ///
    /// # Errors
    ///
    /// This returns an error when either bound can't be coerced into a
    /// time with the mode of `self`.
    pub fn is_between_exclusive<'a, 'b>(
        &self,
        start: impl Into<TimeInput<'a>>,
        end: impl Into<TimeInput<'b>>,
    ) -> Result<bool, Error> {
        let (start, end) = (self.coerce(start)?, self.coerce(end)?);
        Ok(start.millis < self.millis && self.millis < end.millis)
    }

    /// Returns `self - other` in the requested unit.
    ///
    /// A bare operand reports milliseconds. A tuple of a [`Unit`] (or a
    /// unit name) and an operand reports the given unit. The result is
    /// not rounded. See [`TimeDifference`].
    ///
    /// # Errors
    ///
    /// This returns an error when the unit name isn't recognized or when
    /// the operand can't be coerced into a time with the mode of `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::{Time, Unit};
    ///
    /// let t: Time = "10:30".parse()?;
    /// assert_eq!(t.diff("10:00")?, 1_800_000.0);
    /// assert_eq!(t.diff((Unit::Hour, "10:00"))?, 0.5);
    /// assert_eq!(t.diff(("minutes", "11:00"))?, -30.0);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn diff<'a>(
        &self,
        other: impl Into<TimeDifference<'a>>,
    ) -> Result<f64, Error> {
        let (unit, other) = other.into().into_parts()?;
        let other = other.coerce(self.mode)?;
        let delta = i128::from(self.millis) - i128::from(other.millis);
        Ok(unit.convert(delta))
    }

    fn coerce<'a>(
        &self,
        input: impl Into<TimeInput<'a>>,
    ) -> Result<Time, Error> {
        input.into().coerce(self.mode)
    }
}

/// Mode conversion and printing.
impl Time {
    /// Returns this time as a clock time.
    ///
    /// A duration wraps into a single day. A clock time is returned
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::{Time, Unit};
    ///
    /// let d = "22:00".parse::<Time>()?.as_duration().add((10, Unit::Hour))?;
    /// assert_eq!(d.to_full_hours(), 32);
    /// assert_eq!(d.as_clock().format("HH:mm"), "08:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn as_clock(&self) -> Time {
        self.with_mode(Mode::Clock)
    }

    /// Returns this time as a duration.
    ///
    /// This never changes the total, since every clock time is also a
    /// valid duration.
    #[inline]
    pub fn as_duration(&self) -> Time {
        self.with_mode(Mode::Duration)
    }

    /// Returns this time in the given mode.
    #[inline]
    pub fn with_mode(&self, mode: Mode) -> Time {
        if mode == self.mode {
            return self.clone();
        }
        Time::from_millis(self.millis, mode)
    }

    /// Formats this time with the given pattern.
    ///
    /// The directives `HH`, `mm` and `ss` write the hour, minute and
    /// second padded to two digits, while `H`, `m` and `s` write them
    /// without padding. `fff` writes the millisecond padded to three
    /// digits and `f` writes it without padding. All other text is copied
    /// as is. A negative duration is prefixed with `-`.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::{Mode, Time};
    ///
    /// let t: Time = "09:05:03.07".parse()?;
    /// assert_eq!(t.format("HH:mm:ss.fff"), "09:05:03.070");
    /// assert_eq!(t.format("H.m.s"), "9.5.3");
    ///
    /// let d = Time::parse("-26:00", Mode::Duration)?;
    /// assert_eq!(d.format("H:mm"), "-26:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn format(&self, pattern: &str) -> String {
        let mut buf = String::new();
        // Writing to a `String` cannot fail.
        let _ = Formatter::new(pattern).format(self, &mut buf);
        buf
    }

    /// Returns the components of this time, with their sign, and its mode.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::{Mode, Time};
    ///
    /// let d = Time::parse("-01:30", Mode::Duration)?;
    /// let json = d.to_json();
    /// assert_eq!((json.hours, json.minutes), (-1, -30));
    /// assert_eq!(Time::from_json(json)?, d);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_json(&self) -> TimeJson {
        let sign = Sign::from_i64(self.millis);
        let parts = self.parts();
        TimeJson {
            hours: sign * parts.hours,
            minutes: sign * i64::from(parts.minutes),
            seconds: sign * i64::from(parts.seconds),
            milliseconds: sign * i64::from(parts.milliseconds),
            mode: self.mode,
        }
    }

    /// Creates a time from its components.
    ///
    /// The components are summed without being bounds checked, and the
    /// total is then wrapped if the mode is [`Mode::Clock`].
    ///
    /// # Errors
    ///
    /// This returns an error when the total overflows.
    pub fn from_json(json: TimeJson) -> Result<Time, Error> {
        let TimeJson { hours, minutes, seconds, milliseconds, mode } = json;
        let millis = [
            (hours, Unit::Hour),
            (minutes, Unit::Minute),
            (seconds, Unit::Second),
            (milliseconds, Unit::Millisecond),
        ]
        .into_iter()
        .try_fold(0i64, |total, (amount, unit)| {
            total
                .checked_add(unit.to_millis(amount)?)
                .ok_or_else(|| Error::overflow("sum"))
        })?;
        Ok(Time::from_millis(millis, mode))
    }
}

/// The components of a [`Time`] along with its mode.
///
/// This is the structured representation returned by [`Time::to_json`].
/// With the `serde` feature enabled, it serializes as an object like
/// `{"hours":12,"minutes":30,"seconds":0,"milliseconds":0,"mode":"clock"}`.
///
/// For a negative duration, every component carries the sign, so the
/// components always sum to the total of the time.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeJson {
    /// The signed hour component.
    pub hours: i64,
    /// The signed minute component.
    pub minutes: i64,
    /// The signed second component.
    pub seconds: i64,
    /// The signed millisecond component.
    pub milliseconds: i64,
    /// The mode of the time.
    pub mode: Mode,
}

impl Default for Time {
    fn default() -> Time {
        Time::midnight()
    }
}

impl Eq for Time {}

impl PartialEq for Time {
    #[inline]
    fn eq(&self, other: &Time) -> bool {
        self.mode == other.mode && self.millis == other.millis
    }
}

impl core::hash::Hash for Time {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.mode.hash(state);
        self.millis.hash(state);
    }
}

/// Times of different modes are not comparable.
impl PartialOrd for Time {
    #[inline]
    fn partial_cmp(&self, other: &Time) -> Option<core::cmp::Ordering> {
        if self.mode != other.mode {
            return None;
        }
        Some(self.millis.cmp(&other.millis))
    }
}

impl core::fmt::Debug for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Time")
            .field("mode", &self.mode)
            .field("millis", &self.millis)
            .finish()
    }
}

/// Writes the time as `HH:mm:ss`, with a leading `-` for negative
/// durations.
impl core::fmt::Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        Formatter::new("HH:mm:ss").format(self, f)
    }
}

/// Parses a clock time. See [`Time::parse`].
impl core::str::FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Time, Error> {
        Time::parse(s, Mode::Clock)
    }
}

impl From<Time> for i64 {
    #[inline]
    fn from(time: Time) -> i64 {
        time.millis
    }
}

impl From<jiff::civil::Time> for Time {
    fn from(time: jiff::civil::Time) -> Time {
        let millis = i64::from(time.hour()) * b::MILLIS_PER_HOUR
            + i64::from(time.minute()) * b::MILLIS_PER_MIN
            + i64::from(time.second()) * b::MILLIS_PER_SEC
            + i64::from(time.millisecond());
        Time::clock(millis)
    }
}

impl<'a> From<&'a jiff::Zoned> for Time {
    fn from(zdt: &'a jiff::Zoned) -> Time {
        Time::from(zdt.time())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Time {
    fn arbitrary(g: &mut quickcheck::Gen) -> Time {
        let millis: i64 = quickcheck::Arbitrary::arbitrary(g);
        let is_clock: bool = quickcheck::Arbitrary::arbitrary(g);
        let mode = if is_clock { Mode::Clock } else { Mode::Duration };
        Time::from_millis(millis, mode)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Time>> {
        let mode = self.mode;
        let millis = quickcheck::Arbitrary::shrink(&self.millis);
        Box::new(millis.map(move |ms| Time::from_millis(ms, mode)))
    }
}
