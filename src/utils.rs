use crate::Month;

/// The day of the year (indexed from 0) on which each month begins.
///
/// Leap years are one value higher starting at index 2.
const BOUNDS: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
const LY_BOUNDS: [u16; 12] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Days between 0000-03-01 and 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

/// Return true if this is a leap year, false otherwise.
pub(crate) const fn is_leap_year(year: i32) -> bool {
  year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The number of days in the given month.
pub(crate) const fn days_in_month(year: i32, month: Month) -> u8 {
  month.length(is_leap_year(year))
}

/// Returns the number of days in the year.
pub(crate) const fn days_in_year(year: i32) -> u16 {
  if is_leap_year(year) { 366 } else { 365 }
}

/// Return bounds adjusted appropriately if this is a leap year.
pub(crate) const fn bounds(year: i32) -> &'static [u16; 12] {
  match is_leap_year(year) {
    true => &LY_BOUNDS,
    false => &BOUNDS,
  }
}

/// The number of days from 1970-01-01 to the given civil date.
///
/// The algorithm is taken from
/// <https://howardhinnant.github.io/date_algorithms.html#days_from_civil>.
pub(crate) const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
  let year = year as i64 - if month <= 2 { 1 } else { 0 };
  let month = month as i64;
  let day = day as i64;
  let era = if year >= 0 { year } else { year - 399 } / 400;
  let year_of_era = year - era * 400;
  let day_of_year = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day - 1;
  let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
  era * 146_097 + day_of_era - EPOCH_SHIFT
}

/// The civil date (year, month number, day) that is the given number of days after 1970-01-01.
///
/// The algorithm is taken from
/// <https://howardhinnant.github.io/date_algorithms.html#civil_from_days>.
pub(crate) const fn civil_from_days(days: i64) -> (i64, u8, u8) {
  let shifted = days + EPOCH_SHIFT;
  let era = if shifted >= 0 { shifted } else { shifted - 146_096 } / 146_097;
  let doe = shifted - era * 146_097; // [0, 146_097)
  let year_of_era = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
  let day_of_year = doe - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
  let mp = (5 * day_of_year + 2) / 153;
  let day = day_of_year - (153 * mp + 2) / 5 + 1;
  let month = if mp < 10 { mp + 3 } else { mp - 9 };
  let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
  (year, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_is_leap_year() {
    check!(is_leap_year(2000));
    check!(!is_leap_year(1900));
    check!(is_leap_year(2020));
    check!(!is_leap_year(2019));
    check!(!is_leap_year(2100));
    check!(is_leap_year(2400));
    check!(is_leap_year(0));
    check!(is_leap_year(-4));
    check!(!is_leap_year(-100));
    check!(is_leap_year(-400));
  }

  #[test]
  fn test_days_in_month() {
    check!(days_in_month(2019, Month::February) == 28);
    check!(days_in_month(2020, Month::February) == 29);
    check!(days_in_month(1900, Month::February) == 28);
    check!(days_in_month(2000, Month::February) == 29);
    check!(days_in_month(2019, Month::April) == 30);
    check!(days_in_month(2019, Month::December) == 31);
    let total: u16 = Month::ALL.iter().map(|&m| days_in_month(2019, m) as u16).sum();
    check!(total == days_in_year(2019));
    let total: u16 = Month::ALL.iter().map(|&m| days_in_month(2020, m) as u16).sum();
    check!(total == days_in_year(2020));
  }

  #[test]
  fn test_bounds() {
    for year in [2019, 2020] {
      let mut start = 0;
      for month in Month::ALL {
        check!(bounds(year)[month as usize - 1] == start);
        start += days_in_month(year, month) as u16;
      }
    }
  }

  #[test]
  fn test_epoch_days() {
    check!(days_from_civil(1970, 1, 1) == 0);
    check!(days_from_civil(1969, 12, 31) == -1);
    check!(days_from_civil(2000, 1, 1) == 10_957);
    check!(days_from_civil(2012, 4, 21) == 15_451);
    check!(civil_from_days(0) == (1970, 1, 1));
    check!(civil_from_days(-1) == (1969, 12, 31));
    check!(civil_from_days(15_451) == (2012, 4, 21));
    check!(civil_from_days(-11_790) == (1937, 9, 21));
    for days in (-3_652_425..3_652_425).step_by(997) {
      let (y, m, d) = civil_from_days(days);
      check!(days_from_civil(y as i32, m, d) == days);
    }
  }
}
