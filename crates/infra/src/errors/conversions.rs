//! Conversions from external infrastructure errors into domain errors.

use rusqlite::Error as SqlError;
use serde_json::Error as JsonError;
use slawatch_domain::SlaWatchError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SlaWatchError);

impl From<InfraError> for SlaWatchError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SlaWatchError> for InfraError {
    fn from(value: SlaWatchError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSlaWatchError {
    fn into_slawatch(self) -> SlaWatchError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → SlaWatchError */
/* -------------------------------------------------------------------------- */

impl IntoSlaWatchError for SqlError {
    fn into_slawatch(self) -> SlaWatchError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        SlaWatchError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        SlaWatchError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        SlaWatchError::Database("unique constraint violation".into())
                    }
                    (ErrorCode::NotADatabase, _) => {
                        SlaWatchError::Database("file is not a database".into())
                    }
                    _ => SlaWatchError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => SlaWatchError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                SlaWatchError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                SlaWatchError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => SlaWatchError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => SlaWatchError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_slawatch())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → SlaWatchError */
/* -------------------------------------------------------------------------- */

impl IntoSlaWatchError for r2d2::Error {
    fn into_slawatch(self) -> SlaWatchError {
        SlaWatchError::Database(format!("connection pool error: {self}"))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(value.into_slawatch())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → SlaWatchError */
/* -------------------------------------------------------------------------- */

impl IntoSlaWatchError for JsonError {
    fn into_slawatch(self) -> SlaWatchError {
        if self.is_syntax() || self.is_eof() {
            SlaWatchError::Database(format!("stored value is not valid JSON: {self}"))
        } else {
            SlaWatchError::Internal(format!("serialization failed: {self}"))
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_slawatch())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
