//! Serialization to/from PostgreSQL

use diesel::deserialize::FromSql;
use diesel::deserialize::Result as DeserializeResult;
use diesel::pg::Pg;
use diesel::pg::PgValue;
use diesel::pg::data_types::PgDate;
use diesel::serialize::Output;
use diesel::serialize::Result as SerializeResult;
use diesel::serialize::ToSql;
use diesel::sql_types;

use crate::Date;

impl ToSql<sql_types::Date, Pg> for Date {
  fn to_sql<'se>(&'se self, out: &mut Output<'se, '_, Pg>) -> SerializeResult {
    let days_since_epoch = self.epoch_days() - PG_EPOCH.epoch_days();
    ToSql::<sql_types::Date, Pg>::to_sql(&PgDate(days_since_epoch), &mut out.reborrow())
  }
}

impl FromSql<sql_types::Date, Pg> for Date {
  fn from_sql(bytes: PgValue<'_>) -> DeserializeResult<Self> {
    let PgDate(offset) = FromSql::<sql_types::Date, Pg>::from_sql(bytes)?;
    let date = Date::from_epoch_days(i64::from(offset) + i64::from(PG_EPOCH.epoch_days()))
      .map_err(|err| err.converting::<PgDate>())?;
    Ok(date)
  }
}

/// PostgreSQL counts dates from the turn of the millennium.
const PG_EPOCH: Date = date! { 2000-01-01 };
