//! Conversion to and from `chrono::NaiveDate`.

use chrono::Datelike;
use chrono::NaiveDate;

use crate::Date;
use crate::Error;
use crate::ExternalDate;
use crate::temporal::DateField;
use crate::temporal::TemporalAccessor;

/// `NaiveDate::num_days_from_ce` for 1970-01-01.
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

impl ExternalDate for NaiveDate {
  fn year_value(&self) -> i32 {
    Datelike::year(self)
  }

  fn month_value(&self) -> u8 {
    Datelike::month(self) as u8
  }

  fn day_of_month(&self) -> u8 {
    Datelike::day(self) as u8
  }

  /// ## Panic
  ///
  /// Panics on a date outside of `NaiveDate::MIN..=NaiveDate::MAX`, which covers every `Date`.
  fn from_fields(year: i32, month: u8, day: u8) -> Self {
    NaiveDate::from_ymd_opt(year, month.into(), day.into())
      .expect("NaiveDate covers every date between Date::MIN and Date::MAX")
  }
}

impl TemporalAccessor for NaiveDate {
  fn get(&self, field: DateField) -> Option<i64> {
    Some(match field {
      DateField::Year => Datelike::year(self).into(),
      DateField::MonthOfYear => Datelike::month(self).into(),
      DateField::DayOfMonth => Datelike::day(self).into(),
      DateField::DayOfYear => self.ordinal().into(),
      DateField::DayOfWeek => self.weekday().number_from_monday().into(),
      DateField::EpochDay => i64::from(self.num_days_from_ce()) - EPOCH_DAYS_FROM_CE,
    })
  }
}

impl From<Date> for NaiveDate {
  fn from(date: Date) -> Self {
    date.to_external()
  }
}

impl TryFrom<NaiveDate> for Date {
  type Error = Error;

  fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
    Date::from_external(&value)
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;
  use crate::Month;
  use crate::temporal::local_date;

  fn naive(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
  }

  #[test]
  fn test_to_naive_date() {
    let date = Date::new(2019, Month::March, 1).unwrap();
    let naive_date: NaiveDate = date.to_external();
    check!(naive_date.year() == i32::from(date.year()));
    check!(naive_date.month() == u32::from(date.month().number()));
    check!(naive_date.day() == u32::from(date.day()));
    check!(NaiveDate::from(date) == naive(2019, 3, 1));
  }

  #[test]
  fn test_from_naive_date() {
    let naive_date = naive(2019, 3, 1);
    let date = Date::from_external(&naive_date).unwrap();
    check!(date.year() == 2019);
    check!(date.month().number() == 3);
    check!(date.day() == 1);
    check!(Date::try_from(naive_date) == Ok(date! { 2019-03-01 }));
  }

  #[test]
  fn test_temporal_accessor() {
    let accessor = Date::new(2020, Month::May, 20).unwrap().to_temporal_accessor();
    check!(accessor.query(local_date::<NaiveDate>()) == Some(naive(2020, 5, 20)));
  }

  #[test]
  fn test_round_trip() {
    check!(NaiveDate::from(Date::MIN) == naive(-9999, 1, 1));
    check!(NaiveDate::from(Date::MAX) == naive(9999, 12, 31));
    let mut days = Date::MIN.epoch_days();
    while days <= Date::MAX.epoch_days() {
      let date = Date::from_epoch_days(days.into()).unwrap();
      let naive_date = NaiveDate::from(date);
      check!(Date::try_from(naive_date) == Ok(date));
      check!(naive_date.get(DateField::EpochDay) == Some(i64::from(days)));
      days += 997;
    }
  }

  #[test]
  fn test_property_equivalence() {
    for naive_date in [naive(2019, 5, 3), naive(1970, 1, 1), naive(1952, 2, 29)] {
      let date = Date::try_from(naive_date).unwrap();
      check!(naive_date.weekday().number_from_monday() == u32::from(date.weekday().number()));
      check!(naive_date.ordinal() == u32::from(date.day_of_year()));
      check!(naive_date.get(DateField::EpochDay) == Some(i64::from(date.epoch_days())));
      check!(Date::from_temporal(&naive_date) == Ok(date));
    }
  }

  #[test]
  fn test_out_of_range() {
    for naive_date in [naive(10_000, 1, 1), naive(-10_000, 12, 31)] {
      let result = Date::try_from(naive_date);
      let Err(Error::Conversion { from, cause }) = result else {
        panic!("Expected a conversion error");
      };
      check!(from == std::any::type_name::<NaiveDate>());
      check!(matches!(*cause, Error::InvalidDate { reason: "year out of range", .. }));
    }
  }
}
