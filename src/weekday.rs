use std::fmt::Display;

use crate::Date;

impl Date {
  /// Return the weekday corresponding to the given date.
  #[inline]
  pub const fn weekday(&self) -> Weekday {
    // 1970-01-01 was a Thursday.
    match (self.epoch_days() + 3).rem_euclid(7) {
      0 => Weekday::Monday,
      1 => Weekday::Tuesday,
      2 => Weekday::Wednesday,
      3 => Weekday::Thursday,
      4 => Weekday::Friday,
      5 => Weekday::Saturday,
      6 => Weekday::Sunday,
      #[cfg(not(tarpaulin_include))]
      _ => panic!("Unreachable: rem_euclid(7) is always within `0..7`"),
    }
  }
}

/// A representation of the day of the week.
///
/// Weekdays are numbered according to ISO-8601, from Monday (1) to Sunday (7).
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
  Monday = 1,
  Tuesday = 2,
  Wednesday = 3,
  Thursday = 4,
  Friday = 5,
  Saturday = 6,
  Sunday = 7,
}

impl Weekday {
  /// The ISO-8601 number of this weekday (Monday is 1, Sunday is 7).
  #[inline]
  pub const fn number(self) -> u8 {
    self as u8
  }
}

impl Display for Weekday {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    macro_rules! display {
      ($($e:ident),*) => {
        f.write_str(match self {
          $(Self::$e => stringify!($e)),*
        })
      };
    }
    display!(Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday)
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_weekday() {
    let mut days = date! { 2019-12-30 }.epoch_days(); // A Monday.
    for weekday in [
      Weekday::Monday,
      Weekday::Tuesday,
      Weekday::Wednesday,
      Weekday::Thursday,
      Weekday::Friday,
      Weekday::Saturday,
      Weekday::Sunday,
    ]
    .into_iter()
    .cycle()
    .take(800)
    {
      let date = Date::from_epoch_days(days.into()).unwrap();
      check!(date.weekday() == weekday, "Incorrect on: {:?}", date);
      days += 1;
    }

    // Also check some dates in other centuries.
    check!(date! { 1700-01-01 }.weekday() == Weekday::Friday);
    check!(date! { 1800-01-01 }.weekday() == Weekday::Wednesday);
    check!(date! { 1900-01-01 }.weekday() == Weekday::Monday);
    check!(date! { 1952-02-29 }.weekday() == Weekday::Friday);
    check!(date! { 1969-12-31 }.weekday() == Weekday::Wednesday);
    check!(date! { 2000-01-01 }.weekday() == Weekday::Saturday);
    check!(date! { 2019-05-03 }.weekday() == Weekday::Friday);
    check!(date! { 2100-01-01 }.weekday() == Weekday::Friday);
    check!(date! { 2400-01-01 }.weekday() == Weekday::Saturday);
  }

  #[test]
  fn test_display() {
    for (weekday, weekday_str, number) in [
      (Weekday::Monday, "Monday", 1),
      (Weekday::Tuesday, "Tuesday", 2),
      (Weekday::Wednesday, "Wednesday", 3),
      (Weekday::Thursday, "Thursday", 4),
      (Weekday::Friday, "Friday", 5),
      (Weekday::Saturday, "Saturday", 6),
      (Weekday::Sunday, "Sunday", 7),
    ] {
      check!(weekday.to_string() == weekday_str);
      check!(weekday.number() == number);
    }
  }
}
