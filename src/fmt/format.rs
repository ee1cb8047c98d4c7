use core::fmt::Write;

use crate::{util::b::Sign, Time};

/// A single directive in a format pattern.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Token {
    Hours { padded: bool },
    Minutes { padded: bool },
    Seconds { padded: bool },
    Millis { padded: bool },
}

/// Every directive, in the order they are tried.
///
/// At each position in a pattern, the first entry that is a prefix of the
/// remaining pattern wins. A longer spelling always precedes its shorter
/// spelling, so `HH` is never read as two `H` directives. There is no
/// `ff` directive. It is read as two `f` directives.
static TOKENS: &[(&str, Token)] = &[
    ("HH", Token::Hours { padded: true }),
    ("H", Token::Hours { padded: false }),
    ("mm", Token::Minutes { padded: true }),
    ("m", Token::Minutes { padded: false }),
    ("ss", Token::Seconds { padded: true }),
    ("s", Token::Seconds { padded: false }),
    ("fff", Token::Millis { padded: true }),
    ("f", Token::Millis { padded: false }),
];

/// A formatter for `Time` values driven by a pattern string.
///
/// The pattern may contain any of the directives `H`, `HH`, `m`, `mm`,
/// `s`, `ss`, `f` and `fff`. All other text is copied to the output
/// unchanged. When the time is a negative duration, the output is
/// prefixed with a `-`, and the components themselves are always written
/// as non-negative magnitudes.
#[derive(Debug)]
pub(crate) struct Formatter<'p> {
    pattern: &'p str,
}

impl<'p> Formatter<'p> {
    pub(crate) const fn new(pattern: &'p str) -> Formatter<'p> {
        Formatter { pattern }
    }

    pub(crate) fn format<W: Write>(
        &self,
        time: &Time,
        mut wtr: W,
    ) -> core::fmt::Result {
        write!(wtr, "{}", Sign::from_i64(time.to_milliseconds()))?;
        let mut rest = self.pattern;
        while let Some(ch) = rest.chars().next() {
            match lookup(rest) {
                Some((directive, token)) => {
                    write_token(time, token, &mut wtr)?;
                    rest = &rest[directive.len()..];
                }
                None => {
                    wtr.write_char(ch)?;
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }
        Ok(())
    }
}

fn lookup(pattern: &str) -> Option<(&'static str, Token)> {
    TOKENS
        .iter()
        .find(|&&(directive, _)| pattern.starts_with(directive))
        .copied()
}

fn write_token<W: Write>(
    time: &Time,
    token: Token,
    wtr: &mut W,
) -> core::fmt::Result {
    match token {
        Token::Hours { padded: true } => write!(wtr, "{:02}", time.hours()),
        Token::Hours { padded: false } => write!(wtr, "{}", time.hours()),
        Token::Minutes { padded: true } => {
            write!(wtr, "{:02}", time.minutes())
        }
        Token::Minutes { padded: false } => write!(wtr, "{}", time.minutes()),
        Token::Seconds { padded: true } => {
            write!(wtr, "{:02}", time.seconds())
        }
        Token::Seconds { padded: false } => write!(wtr, "{}", time.seconds()),
        Token::Millis { padded: true } => {
            write!(wtr, "{:03}", time.milliseconds())
        }
        Token::Millis { padded: false } => {
            write!(wtr, "{}", time.milliseconds())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(time: &Time, pattern: &str) -> String {
        let mut buf = String::new();
        Formatter::new(pattern).format(time, &mut buf).unwrap();
        buf
    }

    #[test]
    fn directives() {
        let t = Time::clock(45_045_123);
        assert_eq!(format(&t, "HH:mm:ss.fff"), "12:30:45.123");
        assert_eq!(format(&t, "H:m:s.f"), "12:30:45.123");

        let t = Time::clock(3_723_004);
        assert_eq!(format(&t, "HH:mm:ss.fff"), "01:02:03.004");
        assert_eq!(format(&t, "H:m:s.f"), "1:2:3.4");
        assert_eq!(format(&t, "ff"), "44");
        assert_eq!(format(&t, "HHH"), "011");
    }

    #[test]
    fn literals_are_copied() {
        let t = Time::clock(3_723_004);
        assert_eq!(format(&t, ""), "");
        assert_eq!(format(&t, "at HH o'clock"), "at 01 o'clock");
        assert_eq!(format(&t, "Hh → mm!"), "1h → 02!");
    }

    #[test]
    fn negative_duration_prefix() {
        let t = Time::duration(-1_100);
        assert_eq!(format(&t, "HH:mm:ss"), "-00:00:01");
        assert_eq!(format(&t, "s.fff"), "-1.100");

        let t = Time::duration(-90_000);
        assert_eq!(format(&t, "HH:mm:ss"), "-00:01:30");
    }

    #[test]
    fn duration_hours_are_not_wrapped() {
        let t = Time::duration(90_000_000);
        assert_eq!(format(&t, "HH:mm"), "25:00");
        let t = Time::duration(360_000_000_000);
        assert_eq!(format(&t, "H"), "100000");
    }
}
