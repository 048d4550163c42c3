//! Read-only, queryable views of a date.
//!
//! A [`TemporalAccessor`] exposes calendar fields without revealing the type behind them.
//! [`Date::to_temporal_accessor`] produces one; [`TemporalQuery`] implementations such as
//! [`local_date`] read a value back out of any accessor.
//!
//! ```
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use island::TemporalAccessor;
//! use island::date;
//! use island::temporal::local_date;
//!
//! let accessor = date! { 2020-05-20 }.to_temporal_accessor();
//! let naive = accessor.query(local_date::<NaiveDate>());
//! assert_eq!(naive, NaiveDate::from_ymd_opt(2020, 5, 20));
//! # }
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::Date;
use crate::Error;
use crate::ExternalDate;
use crate::Result;
use crate::convert;

/// A calendar field that a [`TemporalAccessor`] may expose.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DateField {
  /// The proleptic year.
  Year,
  /// The month number, from 1 to 12.
  MonthOfYear,
  /// The day of the month, from 1 to 31.
  DayOfMonth,
  /// The day of the year, from 1 to 366.
  DayOfYear,
  /// The ISO-8601 weekday number, from 1 (Monday) to 7 (Sunday).
  DayOfWeek,
  /// The number of days since January 1, 1970.
  EpochDay,
}

impl fmt::Display for DateField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Year => "year",
      Self::MonthOfYear => "month of year",
      Self::DayOfMonth => "day of month",
      Self::DayOfYear => "day of year",
      Self::DayOfWeek => "day of week",
      Self::EpochDay => "epoch day",
    })
  }
}

/// Read-only access to the calendar fields of some date-like value.
pub trait TemporalAccessor {
  /// The value of the given field, or `None` if this accessor does not expose it.
  fn get(&self, field: DateField) -> Option<i64>;

  /// Whether this accessor exposes the given field.
  fn is_supported(&self, field: DateField) -> bool {
    self.get(field).is_some()
  }

  /// Run a query against this accessor.
  fn query<Q: TemporalQuery>(&self, query: Q) -> Option<Q::Output>
  where
    Self: Sized,
  {
    query.query_from(self)
  }
}

/// A strategy for extracting a value from a [`TemporalAccessor`].
pub trait TemporalQuery {
  type Output;

  /// Extract the value, or `None` if the accessor cannot provide it.
  fn query_from(&self, temporal: &dyn TemporalAccessor) -> Option<Self::Output>;
}

/// Query for the calendar date as another crate's date type.
pub struct LocalDateQuery<E>(PhantomData<fn() -> E>);

/// Query for the calendar date as another crate's date type.
pub const fn local_date<E: ExternalDate>() -> LocalDateQuery<E> {
  LocalDateQuery(PhantomData)
}

impl<E: ExternalDate> TemporalQuery for LocalDateQuery<E> {
  type Output = E;

  fn query_from(&self, temporal: &dyn TemporalAccessor) -> Option<E> {
    CalendarDateQuery.query_from(temporal).map(|date| date.to_external())
  }
}

/// Query for the calendar date as a [`Date`].
#[derive(Copy, Clone, Debug, Default)]
pub struct CalendarDateQuery;

/// Query for the calendar date as a [`Date`].
pub const fn calendar_date() -> CalendarDateQuery {
  CalendarDateQuery
}

impl TemporalQuery for CalendarDateQuery {
  type Output = Date;

  fn query_from(&self, temporal: &dyn TemporalAccessor) -> Option<Date> {
    Date::from_temporal(temporal).ok()
  }
}

/// The [`TemporalAccessor`] view of a [`Date`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DateAccessor {
  date: Date,
}

impl DateAccessor {
  pub(crate) const fn new(date: Date) -> Self {
    Self { date }
  }
}

impl TemporalAccessor for DateAccessor {
  fn get(&self, field: DateField) -> Option<i64> {
    let date = &self.date;
    Some(match field {
      DateField::Year => date.year().into(),
      DateField::MonthOfYear => date.month_number().into(),
      DateField::DayOfMonth => date.day().into(),
      DateField::DayOfYear => date.day_of_year().into(),
      DateField::DayOfWeek => date.weekday().number().into(),
      DateField::EpochDay => date.epoch_days().into(),
    })
  }
}

impl Date {
  /// Read a `Date` out of any [`TemporalAccessor`] exposing the year, month, and day fields.
  ///
  /// ## Errors
  ///
  /// Returns [`Error::Conversion`] if the accessor does not expose those fields, or if they do
  /// not describe a valid date.
  pub fn from_temporal(temporal: &dyn TemporalAccessor) -> Result<Self> {
    let read = |field| temporal.get(field).ok_or(Error::UnsupportedField(field));
    let parts = || -> Result<Self> {
      let year = read(DateField::Year)?;
      let month = read(DateField::MonthOfYear)?;
      let day = read(DateField::DayOfMonth)?;
      let narrow = |field: &'static str, value: i64, max: i64| {
        u8::try_from(value).map_err(|_| Error::InvalidField { field, value, min: 1, max })
      };
      convert::from_fields(year, narrow("month", month, 12)?, narrow("day", day, 31)?)
    };
    parts().map_err(|err| {
      #[cfg(feature = "log")]
      log::debug!("Rejected temporal accessor: {err}");
      err.converting::<dyn TemporalAccessor>()
    })
  }
}
