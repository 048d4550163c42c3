//! Errors raised when constructing or converting dates.

use crate::temporal::DateField;

/// An error constructing a [`Date`](crate::Date) or one of its components.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
  /// A numeric field (such as a month number) was outside of its domain.
  #[error("{field} must be within {min}..={max}, got {value}")]
  InvalidField { field: &'static str, value: i64, min: i64, max: i64 },

  /// The fields do not describe a day of the proleptic Gregorian calendar that this crate can
  /// represent.
  #[error("{year}-{month:02}-{day:02} is not a valid date: {reason}")]
  InvalidDate { year: i64, month: u8, day: u8, reason: &'static str },

  /// A [`TemporalAccessor`](crate::TemporalAccessor) did not expose a field it was asked for.
  #[error("{0} is not supported")]
  UnsupportedField(DateField),

  /// A value of another date type could not be converted.
  #[error("cannot convert {from} to a date")]
  Conversion {
    from: &'static str,
    #[source]
    cause: Box<Error>,
  },
}

impl Error {
  /// Wrap this error as the cause of a failed conversion from the given type.
  pub(crate) fn converting<T: ?Sized>(self) -> Self {
    Self::Conversion { from: std::any::type_name::<T>(), cause: Box::new(self) }
  }
}

/// A `Result` whose error is this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use std::error::Error as _;

  use assert2::check;

  use super::*;

  #[test]
  fn test_display() {
    let err = Error::InvalidField { field: "month", value: 13, min: 1, max: 12 };
    check!(err.to_string() == "month must be within 1..=12, got 13");
    let err = Error::InvalidDate { year: 2019, month: 2, day: 29, reason: "not a leap year" };
    check!(err.to_string() == "2019-02-29 is not a valid date: not a leap year");
    let err = Error::UnsupportedField(DateField::DayOfMonth);
    check!(err.to_string() == "day of month is not supported");
  }

  #[test]
  fn test_conversion_source() {
    let cause = Error::InvalidField { field: "year", value: 10_000, min: -9999, max: 9999 };
    let err = cause.clone().converting::<str>();
    check!(err.to_string() == "cannot convert str to a date");
    check!(err.source().map(|s| s.to_string()) == Some(cause.to_string()));
  }
}
