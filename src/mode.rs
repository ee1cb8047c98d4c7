use crate::util::b;

/// The interpretation of the millisecond total inside a [`Time`].
///
/// Every `Time` carries a mode that is fixed when it is created. The mode
/// decides how the raw millisecond total is canonicalized (see
/// [`Mode::normalize`]) and which operations are allowed. Operations that
/// combine two `Time` values require both to have the same mode.
///
/// The default mode is [`Mode::Clock`].
///
/// [`Time`]: crate::Time
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    /// A time of day.
    ///
    /// Values always wrap into a single 24-hour cycle, so they are in the
    /// range `00:00:00.000..=23:59:59.999`.
    #[default]
    Clock,
    /// An elapsed span of time.
    ///
    /// Values are never wrapped. They may exceed 24 hours and may be
    /// negative.
    Duration,
}

impl Mode {
    /// Canonicalizes a raw millisecond total according to this mode.
    ///
    /// For [`Mode::Clock`], this computes the Euclidean remainder of
    /// `millis` by the number of milliseconds in a day. The result is always
    /// in the range `0..86_400_000`, including for negative inputs. For
    /// [`Mode::Duration`], `millis` is returned unchanged.
    ///
    /// Every `Time` constructor goes through this routine, so it is the one
    /// place that defines wraparound.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::Mode;
    ///
    /// // One day and one hour wraps to one hour.
    /// assert_eq!(Mode::Clock.normalize(90_000_000), 3_600_000);
    /// // Minus one hour wraps to 23:00.
    /// assert_eq!(Mode::Clock.normalize(-3_600_000), 82_800_000);
    /// // Durations are left alone.
    /// assert_eq!(Mode::Duration.normalize(-3_600_000), -3_600_000);
    /// ```
    #[inline]
    pub fn normalize(self, millis: i64) -> i64 {
        match self {
            Mode::Clock => {
                let normalized = millis.rem_euclid(b::MILLIS_PER_CIVIL_DAY);
                if normalized != millis {
                    trace!(
                        "wrapped clock time from {millis}ms \
                         to {normalized}ms"
                    );
                }
                normalized
            }
            Mode::Duration => millis,
        }
    }

    /// Returns true if this is [`Mode::Clock`].
    #[inline]
    pub fn is_clock(self) -> bool {
        matches!(self, Mode::Clock)
    }

    /// Returns true if this is [`Mode::Duration`].
    #[inline]
    pub fn is_duration(self) -> bool {
        matches!(self, Mode::Duration)
    }

    /// The tag used for this mode in the JSON representation of a `Time`.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Mode::Clock => "clock",
            Mode::Duration => "duration",
        }
    }
}

/// Writes `clock` or `duration`.
///
/// The alternate form (`{:#}`) writes a description suitable for prose:
/// `clock time` or `duration`.
impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() && self.is_clock() {
            f.write_str("clock time")
        } else {
            f.write_str(self.as_str())
        }
    }
}
