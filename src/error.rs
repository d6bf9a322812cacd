//! Driver-level error taxonomy.

/// Errors surfaced by a [`Statement`](crate::Statement) or by the logging
/// proxy on its behalf.
///
/// The proxy never constructs errors of its own except [`Error::Unsupported`];
/// everything else originates in the wrapped statement and is passed through
/// unchanged.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The statement does not implement the requested optional capability.
    ///
    /// This is a fallback signal, not a failure: on receiving it the caller
    /// is expected to re-dispatch through the baseline operation. Compare by
    /// variant, or use [`Error::is_unsupported`].
    #[error("statement does not support this operation")]
    Unsupported,

    /// The connection backing the statement is broken and must be discarded.
    #[error("bad connection")]
    BadConnection,

    /// Any other failure reported by the driver.
    #[error("driver error: {0}")]
    Driver(
        #[from]
        #[source]
        Box<dyn std::error::Error + Send + Sync>,
    ),
}

impl Error {
    /// Build a [`Error::Driver`] from a plain message.
    pub fn driver(message: impl Into<String>) -> Self {
        Error::Driver(message.into().into())
    }

    /// True for the capability-not-supported fallback signal.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_is_distinguishable() {
        assert!(Error::Unsupported.is_unsupported());
        assert!(!Error::BadConnection.is_unsupported());
        assert!(!Error::driver("boom").is_unsupported());
    }

    #[test]
    fn driver_error_preserves_message() {
        let err = Error::driver("syntax error at line 3");
        assert_eq!(err.to_string(), "driver error: syntax error at line 3");
    }
}
