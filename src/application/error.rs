use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!("Unique constraint violation: {}", detail);
                AppError::Conflict(detail)
            }
            _ => AppError::Database(err),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("Bcrypt error: {}", err);
        AppError::Internal("Password hashing failed".to_string())
    }
}

impl AppError {
    /// True when the store rejected a write because of a uniqueness constraint.
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Conflict(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn test_error_display_impl() {
        assert_eq!(
            AppError::NotFound("test".to_string()).to_string(),
            "Not found: test"
        );
        assert_eq!(
            AppError::Validation("test".to_string()).to_string(),
            "Validation error: test"
        );
        assert_eq!(
            AppError::Conflict("test".to_string()).to_string(),
            "Conflict: test"
        );
        assert_eq!(
            AppError::Internal("test".to_string()).to_string(),
            "Internal error: test"
        );
    }

    #[test]
    fn test_plain_db_error_stays_database_variant() {
        let err: AppError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, AppError::Database(_)));
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_record_not_found_is_database_variant() {
        let err: AppError = DbErr::RecordNotFound("service".to_string()).into();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_non_sqlx_exec_error_is_not_conflict() {
        let err: AppError = DbErr::Exec(RuntimeErr::Internal("x".to_string())).into();
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_validation_errors_conversion() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("name", validator::ValidationError::new("length"));
        let app_error: AppError = errors.into();
        match app_error {
            AppError::Validation(msg) => assert!(msg.contains("name")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
