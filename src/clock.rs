//! Sources of the current date.
//!
//! Code that needs "today" should take a [`Clock`] rather than reading the system time itself,
//! so that tests can substitute a [`FixedClock`].

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use crate::Date;
use crate::Result;

/// A source of the current date.
pub trait Clock: Send + Sync {
  /// The current date according to this clock.
  fn today(&self) -> Result<Date>;
}

/// A clock reading the system time, in UTC.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> Result<Date> {
    date_at(now())
  }
}

/// A clock that is stuck on a single date.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
  fn today(&self) -> Result<Date> {
    Ok(self.0)
  }
}

/// The UTC date on which the given system time falls.
fn date_at(time: SystemTime) -> Result<Date> {
  let timestamp = match time.duration_since(UNIX_EPOCH) {
    Ok(elapsed) => elapsed.as_secs() as i64,
    Err(err) => {
      let before = err.duration();
      -(before.as_secs() as i64) - if before.subsec_nanos() > 0 { 1 } else { 0 }
    },
  };
  Date::from_epoch_days(timestamp.div_euclid(86_400))
}

#[cfg(not(test))]
fn now() -> SystemTime {
  SystemTime::now()
}

#[cfg(test)]
use tests::now;
