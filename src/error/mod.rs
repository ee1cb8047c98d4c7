use std::sync::Arc;

pub(crate) mod parse;
pub(crate) mod time;
pub(crate) mod unit;

/// An error that can occur in this crate.
///
/// Every fallible operation in this crate reports failure with this type.
/// The kinds of failure are:
///
/// * Type errors, where the input given to a constructor or comparison is
/// missing or has an unsupported shape. See [`Error::is_type`].
/// * Format errors, where a string has too many colon-delimited parts or
/// contains non-numeric fields. See [`Error::is_format`].
/// * Range errors, where a field is outside its legal bounds, a clock time
/// string carries a negative sign or arithmetic overflows. See
/// [`Error::is_range`].
/// * Mode mismatches, where a clock time is mixed with a duration. See
/// [`Error::is_mode_mismatch`].
/// * Invalid unit names. See [`Error::is_invalid_unit`].
/// * Invalid operations, like asking whether a duration is midnight. See
/// [`Error::is_invalid_operation`].
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait, the
/// [`core::fmt::Debug`] trait and the [`core::fmt::Display`] trait, this
/// error type only provides the `Error::is_*` predicates above. The
/// predicates always look at the root cause of an error, so an error that
/// has been given additional context is still classified by what actually
/// went wrong.
///
/// # Design
///
/// This crate follows the "One True God Error Type Pattern," where only one
/// error type exists for a variety of different operations. Finer grained
/// error types exist internally, but they are not exported. This keeps the
/// public API small and lets error messages evolve.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheap to clone and to keep its
    /// size at one word. (A `Box` would achieve that last goal too.)
    inner: Arc<ErrorInner>,
}

#[derive(Clone, Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Returns true when this error originated from an input of an
    /// unsupported shape, or from a missing input.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// let t = Time::midnight();
    /// let missing: Option<&str> = None;
    /// assert!(t.is_before(missing).unwrap_err().is_type());
    /// ```
    pub fn is_type(&self) -> bool {
        use self::{time::Error as TimeError, ErrorKind::*};
        matches!(
            *self.root().kind(),
            Time(TimeError::MissingInput | TimeError::InvalidType { .. })
        )
    }

    /// Returns true when this error originated from a string that is not
    /// a well formed `[-]H[:MM[:SS[.fff]]]` time.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// assert!("1:2:3:4".parse::<Time>().unwrap_err().is_format());
    /// assert!("abc:def".parse::<Time>().unwrap_err().is_format());
    /// ```
    pub fn is_format(&self) -> bool {
        use self::{parse::Error as ParseError, ErrorKind::*};
        matches!(
            *self.root().kind(),
            Parse(
                ParseError::TooManyParts { .. }
                    | ParseError::EmptyField { .. }
                    | ParseError::InvalidDigit { .. }
                    | ParseError::EmptyFraction
                    | ParseError::UnexpectedFraction { .. }
            )
        )
    }

    /// Returns true when this error originated as a result of a value being
    /// out of its supported range.
    ///
    /// This includes a negative sign on a clock time string, since clock
    /// times only exist in the range `00:00:00.000..=23:59:59.999`.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// assert!("25:00".parse::<Time>().unwrap_err().is_range());
    /// assert!("-1:00".parse::<Time>().unwrap_err().is_range());
    /// assert!(Time::duration(i64::MAX).add(1).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        use self::{parse::Error as ParseError, ErrorKind::*};
        matches!(
            *self.root().kind(),
            Range(_) | Overflow(_) | Parse(ParseError::NegativeClock)
        )
    }

    /// Returns true when this error originated from mixing a clock time
    /// with a duration.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::{Mode, Time};
    ///
    /// let clock = Time::parse("1:00", Mode::Clock)?;
    /// let duration = Time::parse("1:00", Mode::Duration)?;
    /// assert!(clock.add(&duration).unwrap_err().is_mode_mismatch());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_mode_mismatch(&self) -> bool {
        use self::{time::Error as TimeError, ErrorKind::*};
        matches!(*self.root().kind(), Time(TimeError::ModeMismatch { .. }))
    }

    /// Returns true when this error originated from an unrecognized unit
    /// name.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// let t = Time::noon();
    /// assert!(t.add((1, "fortnight")).unwrap_err().is_invalid_unit());
    /// ```
    pub fn is_invalid_unit(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Unit(_))
    }

    /// Returns true when this error originated from an operation that is
    /// not defined for the mode of the value it was called on.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Time;
    ///
    /// let d = Time::duration(0);
    /// assert!(d.is_midnight().unwrap_err().is_invalid_operation());
    /// ```
    pub fn is_invalid_operation(&self) -> bool {
        use self::{time::Error as TimeError, ErrorKind::*};
        matches!(*self.root().kind(), Time(TimeError::MidnightOnDuration))
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "hours")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }

    /// Creates a new error indicating that computing `what` overflowed the
    /// range of a signed 64-bit number of milliseconds.
    ///
    /// This is like `Error::range`, but the error message doesn't include
    /// the offending value, since it could not be represented.
    #[inline(never)]
    #[cold]
    pub(crate) fn overflow(what: &'static str) -> Error {
        Error::from(ErrorKind::Overflow(OverflowError { what }))
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        // A freshly created consequent is never shared, so this doesn't
        // clone in practice.
        let inner = Arc::make_mut(&mut err.inner);
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        inner.cause = Some(self);
        err
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(ref cause) = err.inner.cause {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause. That is, the error closest to the point where something
    /// has gone wrong.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Clone, Debug)]
enum ErrorKind {
    Overflow(OverflowError),
    Parse(self::parse::Error),
    Range(RangeError),
    Time(self::time::Error),
    Unit(self::unit::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Overflow(ref err) => core::fmt::Display::fmt(err, f),
            Parse(ref err) => core::fmt::Display::fmt(err, f),
            Range(ref err) => core::fmt::Display::fmt(err, f),
            Time(ref err) => core::fmt::Display::fmt(err, f),
            Unit(ref err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Clone, Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> RangeError {
        RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "invalid {what}: {given} is not in the required range \
             of {min}..={max}",
        )
    }
}

/// An error that occurs when arithmetic on milliseconds overflows.
///
/// Unlike `RangeError`, this only includes a static description of the
/// value that overflowed.
#[derive(Clone, Debug)]
struct OverflowError {
    what: &'static str,
}

impl core::fmt::Display for OverflowError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let OverflowError { what } = *self;
        write!(f, "{what} overflowed the supported range of milliseconds")
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `Error::context` work without needing
/// to rely on public `From` impls for the internal error types.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
///
/// This trick was borrowed from `anyhow`.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the error in this result with the consequent built by
    /// the given closure. The original error becomes the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    /// The closure means the consequent, which may allocate, is only built
    /// on the error path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    #[inline(always)]
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}
