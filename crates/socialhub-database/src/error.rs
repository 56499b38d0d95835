//! Mapping of sqlx errors into [`AppError`].

use sqlx::error::ErrorKind as SqlErrorKind;

use socialhub_core::error::{AppError, ErrorKind};

/// Build a `map_err` closure that classifies constraint violations.
///
/// Unique violations become `Conflict` with `conflict_message`, foreign key
/// violations become `NotFound`, everything else is a `Database` error
/// carrying `message`.
pub fn classify(
    message: &'static str,
    conflict_message: &'static str,
) -> impl FnOnce(sqlx::Error) -> AppError {
    move |err| {
        let kind = match &err {
            sqlx::Error::Database(db) => match db.kind() {
                SqlErrorKind::UniqueViolation => Some(ErrorKind::Conflict),
                SqlErrorKind::ForeignKeyViolation => Some(ErrorKind::NotFound),
                _ => None,
            },
            _ => None,
        };
        match kind {
            Some(ErrorKind::Conflict) => {
                AppError::with_source(ErrorKind::Conflict, conflict_message, err)
            }
            Some(ErrorKind::NotFound) => {
                AppError::with_source(ErrorKind::NotFound, "Referenced resource not found", err)
            }
            _ => AppError::with_source(ErrorKind::Database, message, err),
        }
    }
}

/// Shorthand for a plain database failure.
pub fn db(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |err| AppError::with_source(ErrorKind::Database, message, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_stay_database_kind() {
        let err = classify("Failed to create user", "Username already taken")(
            sqlx::Error::RowNotFound,
        );
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "Failed to create user");
    }

    #[test]
    fn test_db_helper_keeps_source() {
        let err = db("Failed to list posts")(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind, ErrorKind::Database);
        assert!(err.source.is_some());
    }
}
