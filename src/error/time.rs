use crate::{error, Mode};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    InvalidType { found: &'static str },
    MidnightOnDuration,
    MissingInput,
    ModeMismatch { expected: Mode, found: Mode },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Time(err).into()
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
            InvalidType { found } => write!(
                f,
                "time input must be a string, an integer number of \
                 milliseconds or a time value, but found {found}",
            ),
            MidnightOnDuration => f.write_str(
                "checking for midnight is not applicable to durations",
            ),
            MissingInput => {
                f.write_str("time input must not be null or missing")
            }
            ModeMismatch { expected, found } => write!(
                f,
                "cannot compare {expected:#} with {found:#}",
            ),
        }
    }
}
