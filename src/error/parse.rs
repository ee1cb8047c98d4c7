use crate::{error, util::escape::Byte, Mode};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    EmptyField { what: &'static str },
    EmptyFraction,
    FailedParse { input: Box<str>, mode: Mode },
    InvalidDigit { what: &'static str, byte: u8 },
    NegativeClock,
    TooManyParts { found: usize },
    UnexpectedFraction { what: &'static str },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Parse(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            EmptyField { what } => write!(
                f,
                "invalid time format: non-numeric value for {what} \
                 (found empty field)",
            ),
            EmptyFraction => f.write_str(
                "invalid time format: expected at least one fractional \
                 digit after `.`",
            ),
            FailedParse { ref input, mode } => {
                write!(f, "failed to parse {input:?} as {mode:#}")
            }
            InvalidDigit { what, byte } => write!(
                f,
                "invalid time format: non-numeric value for {what} \
                 (found {byte:?})",
                byte = Byte(byte),
            ),
            NegativeClock => f.write_str(
                "clock time cannot be negative \
                 (a leading `-` is only allowed for durations)",
            ),
            TooManyParts { found } => write!(
                f,
                "invalid time format: too many parts (found {found} \
                 colon-delimited parts, but at most 3 are allowed)",
            ),
            UnexpectedFraction { what } => write!(
                f,
                "invalid time format: fractional values are only allowed \
                 for seconds, but found one for {what}",
            ),
        }
    }
}
