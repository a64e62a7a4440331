//! Translation of SeaORM errors into repository errors.

use sea_orm::{DbErr, SqlErr};

use papyr_core::error::RepoError;

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            return RepoError::Constraint(format!("Entity already exists: {msg}"));
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            return RepoError::Constraint(format!("Referenced entity missing: {msg}"));
        }
        _ => {}
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Custom(msg) | DbErr::Type(msg) | DbErr::Json(msg) => RepoError::Decode(msg),
        other => RepoError::Query(other.to_string()),
    }
}
