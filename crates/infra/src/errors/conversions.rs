//! Conversions from external infrastructure errors into domain errors.

use mergington_common::storage::StorageError;
use mergington_domain::MergingtonError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MergingtonError);

impl From<InfraError> for MergingtonError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MergingtonError> for InfraError {
    fn from(value: MergingtonError) -> Self {
        InfraError(value)
    }
}

trait IntoMergingtonError {
    fn into_mergington(self) -> MergingtonError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → MergingtonError */
/* -------------------------------------------------------------------------- */

const SQLITE_CONSTRAINT_CHECK: i32 = 275;
const SQLITE_CONSTRAINT_FOREIGNKEY: i32 = 787;
const SQLITE_CONSTRAINT_PRIMARYKEY: i32 = 1555;
const SQLITE_CONSTRAINT_UNIQUE: i32 = 2067;

impl IntoMergingtonError for SqlError {
    fn into_mergington(self) -> MergingtonError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        MergingtonError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        MergingtonError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, SQLITE_CONSTRAINT_PRIMARYKEY) => {
                        MergingtonError::ConstraintViolation("primary key already exists".into())
                    }
                    (ErrorCode::ConstraintViolation, SQLITE_CONSTRAINT_UNIQUE) => {
                        MergingtonError::ConstraintViolation("unique constraint violation".into())
                    }
                    (ErrorCode::ConstraintViolation, SQLITE_CONSTRAINT_FOREIGNKEY) => {
                        MergingtonError::ConstraintViolation(
                            "foreign key constraint violation".into(),
                        )
                    }
                    (ErrorCode::ConstraintViolation, SQLITE_CONSTRAINT_CHECK) => {
                        MergingtonError::ConstraintViolation(format!("check failed: {message}"))
                    }
                    _ => MergingtonError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                MergingtonError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                MergingtonError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => MergingtonError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => MergingtonError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_mergington())
    }
}

/* -------------------------------------------------------------------------- */
/* StorageError → MergingtonError */
/* -------------------------------------------------------------------------- */

impl IntoMergingtonError for StorageError {
    fn into_mergington(self) -> MergingtonError {
        match self {
            StorageError::Rusqlite(err) => err.into_mergington(),
            StorageError::Timeout(secs) => MergingtonError::Database(format!(
                "timed out after {secs}s waiting for a database connection"
            )),
            StorageError::InvalidConfig(message) => MergingtonError::Config(message),
            other => MergingtonError::Database(other.to_string()),
        }
    }
}

impl From<StorageError> for InfraError {
    fn from(value: StorageError) -> Self {
        InfraError(value.into_mergington())
    }
}

/// Map a failed `spawn_blocking` join into an internal error.
pub fn map_join_error(err: JoinError) -> MergingtonError {
    if err.is_cancelled() {
        MergingtonError::Internal("blocking database task cancelled".into())
    } else {
        MergingtonError::Internal(format!("blocking database task failed: {err}"))
    }
}
