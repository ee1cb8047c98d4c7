/*!
Parsing and printing of [`Time`](crate::Time) values.

Times are parsed from strings in the form `[-]H[:MM[:SS[.fff]]]`. The
hours are required and the remaining fields default to zero. A leading `-`
is only allowed for durations. The fraction is a decimal fraction of a
second and is truncated to millisecond precision.

Times are printed with a pattern made of the directives `H`, `HH`, `m`,
`mm`, `s`, `ss`, `f` and `fff`. See [`Time::format`](crate::Time::format).

With the `serde` feature enabled, `Time` and [`TimeJson`](crate::TimeJson)
implement `serde`'s `Serialize` and `Deserialize` traits.
*/

pub(crate) mod format;
pub(crate) mod parse;
#[cfg(feature = "serde")]
mod serde;
