//! Conversion between [`Date`] and other crates' date types.
//!
//! Any type that describes a proleptic Gregorian calendar date by year, 1-based month number, and
//! day of month can take part by implementing [`ExternalDate`]. Implementations for
//! `chrono::NaiveDate` and `jiff::civil::Date` are available behind the `chrono` and `jiff`
//! features.

use crate::Date;
use crate::Error;
use crate::Month;
use crate::Result;
use crate::temporal::DateAccessor;

/// A date type from outside this crate, addressed by its year, month number, and day of month.
pub trait ExternalDate: Sized {
  /// The year.
  fn year_value(&self) -> i32;

  /// The month number, starting from 1.
  fn month_value(&self) -> u8;

  /// The day of the month, starting from 1.
  fn day_of_month(&self) -> u8;

  /// Construct a value from a year, month number (starting from 1), and day of month.
  ///
  /// ## Panic
  ///
  /// Implementations must accept every date between [`Date::MIN`] and [`Date::MAX`] and may
  /// panic on anything else.
  fn from_fields(year: i32, month: u8, day: u8) -> Self;
}

impl Date {
  /// Convert this date to an equivalent value of another date type.
  ///
  /// ## Examples
  ///
  /// ```
  /// # #[cfg(feature = "chrono")] {
  /// use chrono::Datelike;
  /// use chrono::NaiveDate;
  /// use island::date;
  ///
  /// let naive: NaiveDate = date! { 2019-03-01 }.to_external();
  /// assert_eq!((naive.year(), naive.month(), naive.day()), (2019, 3, 1));
  /// # }
  /// ```
  pub fn to_external<E: ExternalDate>(&self) -> E {
    to_external(*self)
  }

  /// Convert a value of another date type to an equivalent `Date`.
  ///
  /// ## Errors
  ///
  /// Returns [`Error::Conversion`] if the value does not describe a date this crate can
  /// represent (for instance, a year outside of
  /// [`MIN_YEAR`](Date::MIN_YEAR)`..=`[`MAX_YEAR`](Date::MAX_YEAR)).
  pub fn from_external<E: ExternalDate>(value: &E) -> Result<Self> {
    from_external(value)
  }

  /// A read-only view of this date that answers field and date queries.
  pub const fn to_temporal_accessor(&self) -> DateAccessor {
    to_temporal_accessor(*self)
  }
}

/// Convert a date to an equivalent value of another date type.
pub fn to_external<E: ExternalDate>(date: Date) -> E {
  E::from_fields(date.year().into(), date.month_number(), date.day())
}

/// Convert a value of another date type to an equivalent [`Date`].
pub fn from_external<E: ExternalDate>(value: &E) -> Result<Date> {
  let (year, month, day) = (value.year_value(), value.month_value(), value.day_of_month());
  from_fields(year.into(), month, day).map_err(|err| {
    #[cfg(feature = "log")]
    log::debug!(year = year, month = month, day = day; "Rejected external date: {err}");
    err.converting::<E>()
  })
}

/// A read-only view of the date that answers field and date queries.
pub const fn to_temporal_accessor(date: Date) -> DateAccessor {
  DateAccessor::new(date)
}

/// Validate raw fields read from outside this crate.
pub(crate) fn from_fields(year: i64, month: u8, day: u8) -> Result<Date> {
  let month = Month::from_number(month)?;
  match i16::try_from(year) {
    Ok(year) => Date::new(year, month, day),
    Err(_) => {
      Err(Error::InvalidDate { year, month: month.number(), day, reason: "year out of range" })
    },
  }
}
