//! The error type shared by the ledger store and the command line front end.

/// The errors that may occur while reading, changing or persisting the ledger.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The durable storage could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The ledger could not be encoded for the durable slot.
    #[error("could not encode ledger: {0}")]
    Encode(#[from] serde_json::Error),

    /// User supplied a value that failed validation at the input boundary.
    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_failure() -> Result<String> {
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1u8], "key is not a string");
        Ok(serde_json::to_string(&map)?)
    }

    #[test]
    fn test_encode_error_converts() {
        let result = encode_failure();
        assert!(matches!(result, Err(LedgerError::Encode(_))));
        assert!(result.unwrap_err().to_string().starts_with("could not encode ledger"));
    }

    #[test]
    fn test_storage_error_converts() {
        let error = LedgerError::from(rusqlite::Error::InvalidQuery);
        assert!(matches!(error, LedgerError::Storage(_)));
        assert!(error.to_string().starts_with("storage error"));
    }
}
