//! Configuration for logging behavior.

/// Configuration options for statement logging.
///
/// # Example
///
/// ```rust
/// use stmt_logging::LogConfig;
///
/// let config = LogConfig::default()
///     .with_argument_logging(false);
/// ```
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Whether to include bound arguments in emitted records.
    /// Default: `true`. Arguments often carry user input; disable this when
    /// records leave a trusted boundary.
    pub log_arguments: bool,

    /// Whether to stamp each record with the operation's elapsed time.
    /// Default: `true`
    pub record_duration: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_arguments: true,
            record_duration: true,
        }
    }
}

impl LogConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable argument logging in records.
    ///
    /// **Security Warning**: Bound arguments often contain user input and
    /// potentially sensitive data. Disable outside controlled environments.
    pub fn with_argument_logging(mut self, enabled: bool) -> Self {
        self.log_arguments = enabled;
        self
    }

    /// Enable or disable elapsed-time recording.
    pub fn with_duration_recording(mut self, enabled: bool) -> Self {
        self.record_duration = enabled;
        self
    }

    /// Create a development-friendly configuration with full logging enabled.
    ///
    /// **Warning**: Do not use in production as it logs all arguments.
    pub fn development() -> Self {
        Self {
            log_arguments: true,
            record_duration: true,
        }
    }

    /// Create a production-safe configuration that keeps argument values out
    /// of records.
    pub fn production() -> Self {
        Self {
            log_arguments: false,
            record_duration: true,
        }
    }
}
