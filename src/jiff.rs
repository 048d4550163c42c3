//! Conversion to and from `jiff::civil::Date`.

use jiff::civil;

use crate::Date;
use crate::Error;
use crate::ExternalDate;
use crate::temporal::DateField;
use crate::temporal::TemporalAccessor;

const EPOCH: civil::Date = civil::date(1970, 1, 1);

impl ExternalDate for civil::Date {
  fn year_value(&self) -> i32 {
    self.year().into()
  }

  fn month_value(&self) -> u8 {
    self.month() as u8
  }

  fn day_of_month(&self) -> u8 {
    self.day() as u8
  }

  /// ## Panic
  ///
  /// Panics on a date outside of `civil::Date::MIN..=civil::Date::MAX`, which covers every `Date`.
  fn from_fields(year: i32, month: u8, day: u8) -> Self {
    i16::try_from(year)
      .ok()
      .and_then(|year| civil::Date::new(year, month as i8, day as i8).ok())
      .expect("civil::Date covers every date between Date::MIN and Date::MAX")
  }
}

impl TemporalAccessor for civil::Date {
  fn get(&self, field: DateField) -> Option<i64> {
    match field {
      DateField::Year => Some(self.year().into()),
      DateField::MonthOfYear => Some(self.month().into()),
      DateField::DayOfMonth => Some(self.day().into()),
      DateField::DayOfYear => Some(self.day_of_year().into()),
      DateField::DayOfWeek => Some(self.weekday().to_monday_one_offset().into()),
      DateField::EpochDay => self.since(EPOCH).ok().map(|span| span.get_days().into()),
    }
  }
}

impl From<Date> for civil::Date {
  fn from(date: Date) -> Self {
    date.to_external()
  }
}

impl TryFrom<civil::Date> for Date {
  type Error = Error;

  fn try_from(value: civil::Date) -> Result<Self, Self::Error> {
    Date::from_external(&value)
  }
}
