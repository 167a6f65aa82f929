mod models;

pub use models::*;

use anyhow::{Context, Result};
use sqlx::{sqlite::SqliteConnectOptions, ConnectOptions, SqliteConnection};
use std::str::FromStr;

/// Connection factory for the backing store.
///
/// Every request opens its own dedicated connection and releases it when the
/// handler finishes; nothing is pooled, cached, or shared between calls. The
/// factory itself only holds the parsed connect options; the first actual
/// store interaction happens inside the first request, and a store that is
/// unreachable surfaces as a per-call failure, not a startup failure.
#[derive(Debug, Clone)]
pub struct Db {
    options: SqliteConnectOptions,
}

impl Db {
    /// Parse a SQLite connection URL (e.g. `sqlite:warrantr.db`).
    ///
    /// sqlx reads any unrecognized scheme as a relative filename; a URL meant
    /// for a different engine is rejected here rather than parsed as a path.
    pub fn new(url: &str) -> Result<Self> {
        if let Some((scheme, _)) = url.split_once("://") {
            if scheme != "sqlite" {
                anyhow::bail!("Invalid store URL: {url} (unsupported scheme '{scheme}')");
            }
        }
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid store URL: {url}"))?;
        Ok(Self { options })
    }

    /// Open a fresh connection to the store.
    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        self.options.connect().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_foreign_scheme() {
        let err = Db::new("postgres://localhost/warrantr").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'postgres'"));
    }

    #[test]
    fn accepts_sqlite_urls_and_bare_paths() {
        assert!(Db::new("sqlite:warrantr.db").is_ok());
        assert!(Db::new("sqlite:///var/lib/warrantr/warrantr.db").is_ok());
        assert!(Db::new("warrantr.db").is_ok());
    }

    #[tokio::test]
    async fn connect_fails_when_database_is_missing() {
        // No mode=rwc and no such file: the error belongs to the call, the
        // factory itself constructs fine.
        let db = Db::new("sqlite:/definitely/not/here/warrantr.db").unwrap();
        assert!(db.connect().await.is_err());
    }
}
