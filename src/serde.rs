//! Serialization in terms of the year, month number, and day.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as _;

use crate::Date;
use crate::Month;

impl Serialize for Month {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(self.number())
  }
}

impl<'de> Deserialize<'de> for Month {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Month::from_number(u8::deserialize(deserializer)?).map_err(D::Error::custom)
  }
}

/// The serialized shape of a [`Date`].
#[derive(Deserialize, Serialize)]
#[serde(rename = "Date", deny_unknown_fields)]
struct Fields {
  year: i16,
  month: Month,
  day: u8,
}

impl Serialize for Date {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    Fields { year: self.year(), month: self.month(), day: self.day() }.serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for Date {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let Fields { year, month, day } = Fields::deserialize(deserializer)?;
    Date::new(year, month, day).map_err(D::Error::custom)
  }
}
