use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the trip store.
///
/// Everything raised during `TripStore::open` is fatal: no handle is returned
/// and the caller must not retry individual operations. The `Query` and
/// `Mutation` variants are per-call failures and leave the store usable.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create data directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open trip database: {0}")]
    Open(#[source] sqlx::Error),

    #[error("failed to inspect trip table schema: {0}")]
    SchemaInspection(#[source] sqlx::Error),

    #[error("schema migration step '{step}' failed: {source}")]
    Migration {
        step: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("query '{operation}' failed: {source}")]
    Query {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("update '{operation}' for trip {id} failed: {source}")]
    Mutation {
        operation: &'static str,
        id: i64,
        #[source]
        source: sqlx::Error,
    },
}
