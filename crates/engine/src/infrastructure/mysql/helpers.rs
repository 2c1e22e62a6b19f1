//! Row decoding helpers shared by the MySQL repositories.

use sqlx::mysql::MySqlRow;
use sqlx::Row;
use transtar_domain::PassengerName;

use crate::infrastructure::ports::RepoError;

/// Nullable text column.
pub(super) fn opt_text(
    row: &MySqlRow,
    column: &str,
    operation: &'static str,
) -> Result<Option<String>, RepoError> {
    row.try_get::<Option<String>, _>(column)
        .map_err(|e| RepoError::mapping(operation, format!("{column}: {e}")))
}

/// Required column of any decodable type.
pub(super) fn required<'r, T>(
    row: &'r MySqlRow,
    column: &str,
    operation: &'static str,
) -> Result<T, RepoError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get::<T, _>(column)
        .map_err(|e| RepoError::mapping(operation, format!("{column}: {e}")))
}

/// Passenger name from the `first_name` / `last_name` columns.
pub(super) fn passenger(row: &MySqlRow, operation: &'static str) -> Result<PassengerName, RepoError> {
    Ok(PassengerName::new(
        opt_text(row, "first_name", operation)?,
        opt_text(row, "last_name", operation)?,
    ))
}
