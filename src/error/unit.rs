use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Unknown { given: Box<str> },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Unit(err).into()
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
            Unknown { ref given } => write!(
                f,
                "invalid time unit: '{given}' (expected one of \
                 'hour', 'minute', 'second' or 'millisecond', \
                 or their plurals)",
            ),
        }
    }
}
