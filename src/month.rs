//! The `Month` enum and its associated `impl`s.

use std::fmt;

use crate::Error;

/// A month of the Gregorian calendar.
///
/// Each variant carries its 1-based number as its discriminant; this number is stable and is
/// what crosses every conversion and serialization boundary.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
  January = 1,
  February = 2,
  March = 3,
  April = 4,
  May = 5,
  June = 6,
  July = 7,
  August = 8,
  September = 9,
  October = 10,
  November = 11,
  December = 12,
}

impl Month {
  /// Every month, in calendar order. `Month::ALL[n - 1]` is the month numbered `n`.
  pub const ALL: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
  ];

  /// Look up the month with the given 1-based number.
  ///
  /// ## Examples
  ///
  /// ```
  /// use island::Month;
  /// assert_eq!(Month::from_number(3)?, Month::March);
  /// assert!(Month::from_number(13).is_err());
  /// # Ok::<(), island::Error>(())
  /// ```
  pub fn from_number(number: u8) -> Result<Self, Error> {
    match number {
      1..=12 => Ok(Self::ALL[number as usize - 1]),
      _ => Err(Error::InvalidField { field: "month", value: number as i64, min: 1, max: 12 }),
    }
  }

  /// The 1-based number of this month (January is 1).
  #[inline]
  pub const fn number(self) -> u8 {
    self as u8
  }

  /// The month after this one, wrapping from December to January.
  pub const fn next(self) -> Self {
    Self::ALL[self as usize % 12]
  }

  /// The month before this one, wrapping from January to December.
  pub const fn previous(self) -> Self {
    Self::ALL[(self as usize + 10) % 12]
  }

  /// The number of days in this month, in a leap year or a common year.
  pub const fn length(self, leap_year: bool) -> u8 {
    match (self, leap_year) {
      (Self::February, true) => 29,
      (Self::February, false) => 28,
      (Self::April | Self::June | Self::September | Self::November, _) => 30,
      _ => 31,
    }
  }

  /// The English name of the month.
  pub const fn name(self) -> &'static str {
    match self {
      Self::January => "January",
      Self::February => "February",
      Self::March => "March",
      Self::April => "April",
      Self::May => "May",
      Self::June => "June",
      Self::July => "July",
      Self::August => "August",
      Self::September => "September",
      Self::October => "October",
      Self::November => "November",
      Self::December => "December",
    }
  }
}

impl TryFrom<u8> for Month {
  type Error = Error;

  fn try_from(number: u8) -> Result<Self, Self::Error> {
    Self::from_number(number)
  }
}

impl From<Month> for u8 {
  fn from(month: Month) -> Self {
    month.number()
  }
}

impl fmt::Display for Month {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
