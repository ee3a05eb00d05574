use thiserror::Error;

/// Unified error type for the entire moneyview-core library.
/// Fallible public functions return `Result<T, CoreError>`.
///
/// The chart pipeline itself (lookup, filtering, selection) never fails —
/// it degrades to empty results instead. Errors only surface at the
/// ledger-management edges: validation, lookups by id, import/export.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Business Logic ──────────────────────────────────────────────
    #[error("Transaction validation failed: {0}")]
    ValidationError(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    // ── Import / Export ─────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
