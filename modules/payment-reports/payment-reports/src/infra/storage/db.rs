//! Database bootstrap and error conversion helpers.

use std::fmt::Display;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;
use crate::domain::error::DomainError;

/// Convert any displayable error into a `DomainError::Database` tagged with
/// the repository operation that produced it.
#[must_use]
pub fn db_err<E: Display>(operation: &'static str) -> impl FnOnce(E) -> DomainError {
    move |e| DomainError::database(operation, e.to_string())
}

/// Open a connection pool described by `cfg`.
///
/// An in-memory SQLite database lives only as long as one of its
/// connections, so such DSNs are pinned to a single persistent connection.
///
/// # Errors
/// Returns the driver error if the pool cannot be established.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    opts.acquire_timeout(cfg.acquire_timeout)
        .sqlx_logging(cfg.sqlx_logging);

    if is_in_memory_sqlite(&cfg.dsn) {
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(cfg.max_conns)
            .min_connections(cfg.min_conns);
        if let Some(idle) = cfg.idle_timeout {
            opts.idle_timeout(idle);
        }
    }

    tracing::info!(
        dsn = %redact_credentials_in_dsn(Some(&cfg.dsn)),
        max_conns = cfg.max_conns,
        "Connecting to database"
    );
    let db = Database::connect(opts).await?;
    tracing::debug!(backend = ?db.get_database_backend(), "Database connection established");
    Ok(db)
}

fn is_in_memory_sqlite(dsn: &str) -> bool {
    dsn.starts_with("sqlite::memory:") || dsn.contains("mode=memory")
}

/// Replace the password of a URL-style DSN with `***`.
///
/// DSNs that contain credentials but cannot be parsed are fully masked.
#[must_use]
pub fn redact_credentials_in_dsn(dsn: Option<&str>) -> String {
    match dsn {
        Some(dsn) if dsn.contains('@') => match url::Url::parse(dsn) {
            Ok(mut parsed) => {
                if parsed.password().is_some() {
                    let _ = parsed.set_password(Some("***"));
                }
                parsed.to_string()
            }
            Err(_) => "***".to_owned(),
        },
        Some(dsn) => dsn.to_owned(),
        None => "none".to_owned(),
    }
}
