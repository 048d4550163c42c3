//! The `island-date` crate provides a `Date` struct (and corresponding macro) storing a single
//! day of the proleptic Gregorian calendar, along with lossless conversions to and from other
//! crates' date types.
//!
//! `Date` can store any valid calendar date between the years -9999 and 9999, inclusive. Every
//! date in that range can be handed to the supported external date types without loss.
//!
//! ## Examples
//!
//! Making a date:
//!
//! ```
//! use island::Date;
//! use island::Month;
//!
//! let date = Date::new(2019, Month::March, 1)?;
//! assert_eq!(date.month().number(), 3);
//! # Ok::<(), island::Error>(())
//! ```
//!
//! You can also use the `date!` macro to get a syntax resembling a date literal:
//!
//! ```
//! use island::date;
//!
//! let date = date! { 2019-03-01 };
//! ```
//!
//! Converting to another crate's date type:
//!
//! ```
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use island::date;
//!
//! let naive: NaiveDate = date! { 2019-03-01 }.to_external();
//! assert_eq!(naive, NaiveDate::from_ymd_opt(2019, 3, 1).unwrap());
//! # }
//! ```

use std::fmt;
use std::fmt::Write;

/// Construct a date from a `YYYY-MM-DD` literal.
///
/// ## Examples
///
/// ```
/// # use island::date;
/// # use island::Month;
/// let d = date! { 2024-01-01 };
/// assert_eq!(d.year(), 2024);
/// assert_eq!(d.month(), Month::January);
/// assert_eq!(d.day(), 1);
/// ```
///
/// ## Panic
///
/// The macro panics (at compile time, in a `const` context) if the literal is not a valid date.
#[macro_export]
macro_rules! date {
  ($y:literal-$m:literal-$d:literal) => {{
    #[allow(clippy::zero_prefixed_literal)]
    {
      $crate::Date::constant($y, $m, $d)
    }
  }};
}

#[cfg(feature = "chrono")]
mod chrono;
pub mod clock;
pub mod convert;
#[cfg(feature = "diesel-pg")]
mod db;
#[cfg(feature = "duckdb")]
mod duckdb;
mod error;
#[cfg(feature = "jiff")]
mod jiff;
mod month;
#[cfg(feature = "serde")]
mod serde;
pub mod temporal;
mod utils;
mod weekday;

pub use convert::ExternalDate;
pub use error::Error;
pub use error::Result;
pub use month::Month;
pub use temporal::TemporalAccessor;
pub use weekday::Weekday;

/// A representation of a single date.
///
/// Dates compare by year, then month, then day.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "diesel-pg", derive(diesel::AsExpression, diesel::FromSqlRow))]
#[cfg_attr(feature = "diesel-pg", diesel(sql_type = ::diesel::sql_types::Date))]
pub struct Date {
  year: i16,
  month: Month,
  day: u8,
}

impl Date {
  /// The earliest supported year.
  pub const MIN_YEAR: i16 = -9999;
  /// The latest supported year.
  pub const MAX_YEAR: i16 = 9999;

  /// The minimum date that can be represented.
  pub const MIN: Self = Date::constant(Self::MIN_YEAR, 1, 1);
  /// The maximum date that can be represented.
  pub const MAX: Self = Date::constant(Self::MAX_YEAR, 12, 31);

  /// Construct a new `Date` from the provided year, month, and day.
  ///
  /// ## Examples
  ///
  /// ```
  /// use island::Date;
  /// use island::Month;
  ///
  /// let date = Date::new(2020, Month::February, 29)?;
  /// assert_eq!(date.day(), 29);
  /// assert!(Date::new(2019, Month::February, 29).is_err());
  /// # Ok::<(), island::Error>(())
  /// ```
  ///
  /// ## Errors
  ///
  /// Returns [`Error::InvalidDate`] if the day does not occur in the given month (e.g. "April 31"
  /// or "February 29" in a common year), or if the year is outside of
  /// [`MIN_YEAR`](Self::MIN_YEAR)`..=`[`MAX_YEAR`](Self::MAX_YEAR).
  pub fn new(year: i16, month: Month, day: u8) -> Result<Self> {
    let invalid =
      |reason| Error::InvalidDate { year: year.into(), month: month.number(), day, reason };
    if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
      return Err(invalid("year out of range"));
    }
    if day == 0 || day > utils::days_in_month(year.into(), month) {
      return Err(invalid(match (month, day) {
        (Month::February, 29) => "February 29 only occurs in leap years",
        _ => "day out of range for month",
      }));
    }
    Ok(Self { year, month, day })
  }

  /// Construct a new `Date` from the provided year, month number (starting from 1), and day.
  ///
  /// ## Errors
  ///
  /// Returns [`Error::InvalidDate`] if the month number is not within `1..=12`, and otherwise
  /// fails the same way as [`Date::new`].
  pub fn from_ymd(year: i16, month: u8, day: u8) -> Result<Self> {
    let number = month;
    let month = Month::from_number(number).map_err(|_| Error::InvalidDate {
      year: year.into(),
      month: number,
      day,
      reason: "month out of range",
    })?;
    Self::new(year, month, day)
  }

  /// Construct a new `Date` from the provided year and day of the year (starting from 1).
  ///
  /// ## Examples
  ///
  /// ```
  /// use island::date;
  /// use island::Date;
  ///
  /// assert_eq!(Date::from_day_of_year(2019, 60)?, date! { 2019-03-01 });
  /// assert_eq!(Date::from_day_of_year(2020, 60)?, date! { 2020-02-29 });
  /// assert!(Date::from_day_of_year(2019, 366).is_err());
  /// # Ok::<(), island::Error>(())
  /// ```
  ///
  /// ## Errors
  ///
  /// Returns [`Error::InvalidDate`] if the day is not within the year (0, 366 in a common year, or
  /// anything past 366), or if the year is outside of
  /// [`MIN_YEAR`](Self::MIN_YEAR)`..=`[`MAX_YEAR`](Self::MAX_YEAR).
  pub fn from_day_of_year(year: i16, day: u16) -> Result<Self> {
    if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
      let reason = "year out of range";
      return Err(Error::InvalidDate { year: year.into(), month: 1, day: 1, reason });
    }
    let bounds = utils::bounds(year.into());
    if day == 0 || day > utils::days_in_year(year.into()) {
      // Report the day as falling before January or after December.
      let (month, overflow) = match day {
        0 => (1, 0),
        _ => (12, u8::try_from(day - bounds[11]).unwrap_or(u8::MAX)),
      };
      return Err(Error::InvalidDate {
        year: year.into(),
        month,
        day: overflow,
        reason: match day {
          366 => "day 366 only occurs in leap years",
          _ => "day of year out of range",
        },
      });
    }
    let index = bounds.iter().rposition(|&start| start < day).unwrap_or(0);
    Self::new(year, Month::ALL[index], (day - bounds[index]) as u8)
  }

  /// Construct a new `Date` in a `const` context. This backs the [`date!`] macro.
  ///
  /// ## Panic
  ///
  /// This function panics if it receives "out-of-bounds" values (e.g. "March 32" or "February
  /// 30"). Use [`Date::new`] or [`Date::from_ymd`] to handle these as errors instead.
  pub const fn constant(year: i16, month: u8, day: u8) -> Self {
    assert!(year >= Self::MIN_YEAR && year <= Self::MAX_YEAR, "Year out-of-bounds");
    assert!(month >= 1 && month <= 12, "Month out-of-bounds");
    let month = Month::ALL[month as usize - 1];
    if matches!(month, Month::February) && day == 29 {
      assert!(utils::is_leap_year(year as i32), "February 29 only occurs on leap years");
    }
    assert!(day >= 1 && day <= utils::days_in_month(year as i32, month), "Day out-of-bounds");
    Self { year, month, day }
  }

  /// Construct the `Date` that is the given number of days after January 1, 1970.
  ///
  /// ## Examples
  ///
  /// ```
  /// use island::date;
  /// use island::Date;
  ///
  /// assert_eq!(Date::from_epoch_days(0)?, date! { 1970-01-01 });
  /// assert_eq!(Date::from_epoch_days(15_451)?, date! { 2012-04-21 });
  /// assert_eq!(Date::from_epoch_days(-1)?, date! { 1969-12-31 });
  /// # Ok::<(), island::Error>(())
  /// ```
  ///
  /// ## Errors
  ///
  /// Returns [`Error::InvalidField`] if the result would fall outside of
  /// [`Date::MIN`]`..=`[`Date::MAX`].
  pub fn from_epoch_days(days: i64) -> Result<Self> {
    let (min, max) = (Self::MIN.epoch_days() as i64, Self::MAX.epoch_days() as i64);
    if !(min..=max).contains(&days) {
      return Err(Error::InvalidField { field: "epoch day", value: days, min, max });
    }
    let (year, month, day) = utils::civil_from_days(days);
    Ok(Self::constant(year as i16, month, day))
  }
}

impl Date {
  /// Returns the year number in the calendar date.
  #[inline]
  pub const fn year(&self) -> i16 {
    self.year
  }

  /// Returns the month.
  #[inline]
  pub const fn month(&self) -> Month {
    self.month
  }

  /// Returns the month number, starting from 1.
  ///
  /// The return value ranges from 1 to 12.
  #[inline]
  pub const fn month_number(&self) -> u8 {
    self.month.number()
  }

  /// Returns the day of the month, starting from 1.
  ///
  /// The return value ranges from 1 to 31. (The last day of the month differs by months.)
  #[inline]
  pub const fn day(&self) -> u8 {
    self.day
  }

  /// The day of the current year. Range: `[1, 366]`
  #[inline]
  pub const fn day_of_year(&self) -> u16 {
    utils::bounds(self.year as i32)[self.month as usize - 1] + self.day as u16
  }

  /// Whether this date falls in a leap year.
  #[inline]
  pub const fn is_in_leap_year(&self) -> bool {
    utils::is_leap_year(self.year as i32)
  }

  /// The number of days in this date's month.
  #[inline]
  pub const fn length_of_month(&self) -> u8 {
    utils::days_in_month(self.year as i32, self.month)
  }

  /// The number of days in this date's year.
  #[inline]
  pub const fn length_of_year(&self) -> u16 {
    utils::days_in_year(self.year as i32)
  }

  /// The number of days between January 1, 1970 and this date (negative for earlier dates).
  ///
  /// ## Examples
  ///
  /// ```
  /// # use island::date;
  /// assert_eq!(date! { 1969-12-31 }.epoch_days(), -1);
  /// assert_eq!(date! { 1970-01-01 }.epoch_days(), 0);
  /// assert_eq!(date! { 2012-04-21 }.epoch_days(), 15_451);
  /// ```
  pub const fn epoch_days(&self) -> i32 {
    utils::days_from_civil(self.year as i32, self.month as u8, self.day) as i32
  }
}

impl Date {
  /// Return a copy of this date in the given year.
  ///
  /// ## Errors
  ///
  /// Fails the same way as [`Date::new`], for instance moving February 29 to a common year.
  pub fn with_year(&self, year: i16) -> Result<Self> {
    Self::new(year, self.month, self.day)
  }

  /// Return a copy of this date in the given month.
  ///
  /// ## Errors
  ///
  /// Fails the same way as [`Date::new`], for instance moving the 31st to a 30-day month.
  pub fn with_month(&self, month: Month) -> Result<Self> {
    Self::new(self.year, month, self.day)
  }

  /// Return a copy of this date on the given day of the month.
  ///
  /// ## Errors
  ///
  /// Fails the same way as [`Date::new`].
  pub fn with_day(&self, day: u8) -> Result<Self> {
    Self::new(self.year, self.month, day)
  }
}

/// Return true if the year is a leap year in the proleptic Gregorian calendar.
///
/// ```
/// assert!(island::is_leap_year(2000));
/// assert!(!island::is_leap_year(1900));
/// ```
pub const fn is_leap_year(year: i32) -> bool {
  utils::is_leap_year(year)
}

/// The number of days in the given month of the given year.
///
/// ```
/// use island::Month;
/// assert_eq!(island::days_in_month(2019, Month::February), 28);
/// assert_eq!(island::days_in_month(2020, Month::February), 29);
/// ```
pub const fn days_in_month(year: i32, month: Month) -> u8 {
  utils::days_in_month(year, month)
}

impl fmt::Debug for Date {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}

impl fmt::Display for Date {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.year < 0 {
      f.write_char('-')?;
    }
    write!(f, "{:04}-{:02}-{:02}", self.year.unsigned_abs(), self.month.number(), self.day)
  }
}
