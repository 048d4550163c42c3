//! Integration with DuckDB.

use duckdb::Result;
use duckdb::types::FromSql;
use duckdb::types::FromSqlError;
use duckdb::types::FromSqlResult;
use duckdb::types::ToSql;
use duckdb::types::ToSqlOutput;
use duckdb::types::ValueRef;

use crate::Date;

impl FromSql for Date {
  fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
    match value {
      ValueRef::Date32(days) => Date::from_epoch_days(days.into())
        .map_err(|err| FromSqlError::Other(Box::new(err.converting::<ValueRef<'static>>()))),
      _ => Err(FromSqlError::InvalidType),
    }
  }
}

impl ToSql for Date {
  fn to_sql(&self) -> Result<ToSqlOutput<'_>> {
    Ok(ToSqlOutput::Borrowed(ValueRef::Date32(self.epoch_days())))
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_to_sql() -> Result<()> {
    let dt = date! { 2012-04-21 };
    let output = dt.to_sql()?;
    if let ToSqlOutput::Borrowed(ValueRef::Date32(i)) = output {
      check!(i == 15_451);
    } else {
      check!(false, "Incorrect type");
    }
    Ok(())
  }

  #[test]
  fn test_from_sql() {
    check!(Date::column_result(ValueRef::Date32(15_451)).ok() == Some(date! { 2012-04-21 }));
    check!(Date::column_result(ValueRef::Date32(-1)).ok() == Some(date! { 1969-12-31 }));
    check!(Date::column_result(ValueRef::Date32(i32::MAX)).is_err());
    check!(Date::column_result(ValueRef::Int(15_451)).is_err());
  }

  #[test]
  fn test_query() -> Result<()> {
    let conn = duckdb::Connection::open_in_memory()?;
    let date: Date = conn.query_row("SELECT DATE '1952-02-29'", [], |row| row.get(0))?;
    check!(date == date! { 1952-02-29 });
    Ok(())
  }
}
