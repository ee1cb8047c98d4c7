/*!
Clocktime provides a single value type, [`Time`], for times of day and for
signed durations with millisecond precision.

Every `Time` has a [`Mode`]. A clock time is an offset from midnight that
wraps around into a single 24-hour cycle, so adding two hours to `23:00`
gives `01:00`. A duration is an elapsed span of time that is never wrapped,
so the same addition gives `25:00` and subtracting two hours from `01:00`
gives `-01:00`. Both modes share one API for parsing, arithmetic,
comparison and formatting, and operations never mix modes silently.

# Example

```
use clocktime::{Mode, Time, Unit};

// Parsing defaults to clock times.
let t: Time = "23:00".parse()?;
assert_eq!(t.add((2, Unit::Hour))?.to_string(), "01:00:00");

// Durations are unbounded and may be negative.
let d = Time::parse("23:00", Mode::Duration)?;
assert_eq!(d.add((2, "hours"))?.hours(), 25);
assert_eq!(Time::parse("-00:01:30", Mode::Duration)?.to_seconds(), -90.0);

// Comparisons accept strings and milliseconds directly.
assert!(t.is_between("22:00", "23:30")?);
assert_eq!(t.diff((Unit::Minute, "22:15"))?, 45.0);

// Custom formatting.
let t: Time = "09:05:03.07".parse()?;
assert_eq!(t.format("H:mm:ss.fff"), "9:05:03.070");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Parsing

Strings have the form `[-]H[:MM[:SS[.fff]]]`. Hours are required and the
remaining fields default to zero. In clock mode, hours must be less than
24 and a leading `-` is rejected. In duration mode, hours are unbounded and
a leading `-` makes the duration negative. Minutes and seconds must be
less than 60. A fraction on the seconds field is truncated to
milliseconds.

# Errors

All fallible operations return the crate's [`Error`] type. It carries a
human readable description of what went wrong, and can be classified with
predicates like [`Error::is_range`] and [`Error::is_mode_mismatch`].

# Crate features

* **logging** - When enabled, the `log` crate is used to emit messages at
the `trace` level when a clock time wraps around midnight, and at the
`debug` level when looking up the current local time.
* **serde** (enabled by default) - When enabled, [`Time`] and
[`TimeJson`] implement `Serialize` and `Deserialize` from the `serde`
crate.
*/

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

pub use crate::{
    error::Error,
    input::{TimeArithmetic, TimeDifference, TimeInput},
    mode::Mode,
    time::{Time, TimeJson},
    unit::Unit,
};

#[macro_use]
mod logging;

mod error;
mod fmt;
mod input;
mod mode;
mod time;
mod unit;
mod util;
