use crate::{
    error::{parse::Error as E, Error, ErrorContext},
    util::b::{self, Sign},
    Mode,
};

/// A parser for `[-]H[:MM[:SS[.fff]]]` strings.
///
/// The parser is configured with the mode of the value being built, since
/// the mode decides whether a leading sign is allowed and how large the
/// hour field may be. Parsing produces the raw signed total in
/// milliseconds. Normalizing it is left to the caller.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TimeParser {
    mode: Mode,
}

impl TimeParser {
    pub(crate) const fn new(mode: Mode) -> TimeParser {
        TimeParser { mode }
    }

    /// Parses the given input into a signed number of milliseconds.
    ///
    /// Every error returned is contextualized with the input and the mode
    /// it was parsed in.
    pub(crate) fn parse(&self, input: &str) -> Result<i64, Error> {
        self.parse_millis(input.as_bytes()).with_context(|| E::FailedParse {
            input: input.into(),
            mode: self.mode,
        })
    }

    fn parse_millis(&self, input: &[u8]) -> Result<i64, Error> {
        let Parsed { value: sign, input } = self.parse_sign(input)?;
        let found = input.split(|&b| b == b':').count();
        if found > 3 {
            return Err(E::TooManyParts { found }.into());
        }

        let mut fields = input.split(|&b| b == b':');
        // `split` always yields at least one item, even for empty input.
        let hours = fields.next().unwrap_or_default();
        let hours = self.parse_hours(hours)?;
        let minutes = match fields.next() {
            None => 0,
            Some(minutes) => parse_minutes(minutes)?,
        };
        let millis = match fields.next() {
            None => 0,
            Some(seconds) => parse_seconds(seconds)?,
        };

        let total = hours
            .checked_mul(b::MILLIS_PER_HOUR)
            .and_then(|total| {
                total.checked_add(minutes * b::MILLIS_PER_MIN)
            })
            .and_then(|total| total.checked_add(millis))
            .ok_or_else(|| Error::overflow("hours"))?;
        Ok(sign * total)
    }

    /// Parses an optional leading `-`.
    ///
    /// This fails for clock times, since they are never negative.
    fn parse_sign<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, Sign>, Error> {
        let Some((&b'-', rest)) = input.split_first() else {
            return Ok(Parsed { value: Sign::Positive, input });
        };
        if self.mode.is_clock() {
            return Err(E::NegativeClock.into());
        }
        Ok(Parsed { value: Sign::Negative, input: rest })
    }

    fn parse_hours(&self, field: &[u8]) -> Result<i64, Error> {
        let hours = parse_integer("hours", field)?;
        match self.mode {
            Mode::Clock => b::ClockHour::check(hours),
            Mode::Duration => b::DurationHour::check(hours),
        }
    }
}

/// The result of parsing a value off the front of some input.
#[derive(Debug)]
struct Parsed<'i, V> {
    value: V,
    input: &'i [u8],
}

fn parse_minutes(field: &[u8]) -> Result<i64, Error> {
    b::Minute::check(parse_integer("minutes", field)?)
}

/// Parses a seconds field, with its optional fraction, into milliseconds.
fn parse_seconds(field: &[u8]) -> Result<i64, Error> {
    let (whole, fraction) = match field.iter().position(|&b| b == b'.') {
        None => (field, None),
        Some(i) => (&field[..i], Some(&field[i + 1..])),
    };
    let seconds = b::Second::check(parse_integer("seconds", whole)?)?;
    let millis = match fraction {
        None => 0,
        Some(fraction) => parse_fraction(fraction)?,
    };
    // Seconds are bounded, so this can never overflow.
    Ok(seconds * b::MILLIS_PER_SEC + millis)
}

/// Parses the digits after a `.` as a decimal fraction of a second, in
/// milliseconds.
///
/// Digits beyond millisecond precision are validated but otherwise
/// ignored. That is, the fraction is truncated, not rounded.
fn parse_fraction(digits: &[u8]) -> Result<i64, Error> {
    if digits.is_empty() {
        return Err(E::EmptyFraction.into());
    }
    let mut millis = 0;
    let mut scale = 100;
    for &byte in digits {
        let digit = parse_digit("seconds", byte)?;
        millis += digit * scale;
        scale /= 10;
    }
    Ok(millis)
}

/// Parses a field as a decimal integer, with an optional leading `-`.
///
/// A negative field is accepted here so that it gets reported by the
/// bounds check for that field, instead of as a malformed number.
fn parse_integer(what: &'static str, field: &[u8]) -> Result<i64, Error> {
    if field.contains(&b'.') {
        return Err(E::UnexpectedFraction { what }.into());
    }
    let (sign, digits) = match field.split_first() {
        Some((&b'-', rest)) => (Sign::Negative, rest),
        _ => (Sign::Positive, field),
    };
    if digits.is_empty() {
        return Err(E::EmptyField { what }.into());
    }
    let mut n: i64 = 0;
    for &byte in digits {
        let digit = parse_digit(what, byte)?;
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(|| Error::overflow(what))?;
    }
    Ok(sign * n)
}

fn parse_digit(what: &'static str, byte: u8) -> Result<i64, Error> {
    if !byte.is_ascii_digit() {
        return Err(E::InvalidDigit { what, byte }.into());
    }
    Ok(i64::from(byte - b'0'))
}
