//! # stmt-logging
//!
//! Structured logging instrumentation for SQL driver prepared statements.
//!
//! This crate wraps a driver-supplied prepared statement in a transparent
//! decorator that forwards every operation unchanged and emits one structured
//! log record per data-access call: the operation name, severity, elapsed
//! time, the SQL text, the bound arguments, and any error.
//!
//! ## Features
//!
//! - **Transparent Forwarding**: results, errors, and arguments pass through
//!   byte-for-byte; the wrapper never retries, translates, or mutates
//! - **Capability Detection**: the optional statement contracts
//!   (context-aware execution, named-value checking, per-column conversion)
//!   are probed on the wrapped statement per call and re-exposed only when
//!   supported
//! - **Fallback Signaling**: unsupported context-aware calls return the
//!   [`Error::Unsupported`] sentinel so callers re-dispatch through the
//!   positional path
//! - **Pluggable Sinks**: records go to any [`LogSink`]; the bundled
//!   [`TracingSink`] emits [`tracing`] events out of the box
//! - **Zero Added State**: no caching, no locking, no background work;
//!   exactly as concurrency-safe as the wrapped statement plus the sink
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stmt_logging::{LoggedStatement, TracingSink, Value};
//!
//! // Wrap a statement your driver prepared
//! let sql = "SELECT * FROM users WHERE id = ?";
//! let stmt = conn.prepare(sql)?;
//! let mut stmt = LoggedStatement::wrap(Box::new(stmt), sql, Arc::new(TracingSink));
//!
//! // Use it exactly like the raw statement
//! let rows = stmt.query(&[Value::Int(1)])?;
//! ```
//!
//! ## Record Shape
//!
//! Each record serializes as JSON with the following fields:
//!
//! | Field | Description |
//! |-------|-------------|
//! | `level` | `"info"` on success, `"error"` on failure |
//! | `msg` | Operation name (`StmtExec`, `StmtQuery`, `StmtExecContext`, `StmtQueryContext`) |
//! | `query` | SQL text captured at preparation time |
//! | `args` | Bound arguments in call order (named arguments flattened to values) |
//! | `error` | Error text (only on failure) |
//! | `elapsed_ms` | Operation duration (when duration recording is enabled) |
//!
//! `close` and `parameter_count` are forwarded but deliberately not logged:
//! only operations that touch data produce records.

mod config;
mod context;
mod driver;
mod error;
mod log;
mod statement;
mod value;

pub use config::LogConfig;
pub use context::{CancelToken, Context};
pub use driver::{
    ColumnConverter, ContextExecutor, ContextQueryer, NamedValueChecker, Rows, Statement,
    StatementResult,
};
pub use error::{Error, Result};
pub use log::{Level, LogRecord, LogSink, Operation, TracingSink};
pub use statement::{LoggedStatement, LoggingExt};
pub use value::{DefaultConverter, NamedValue, Value, ValueConverter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Context, Error, LogConfig, LogSink, LoggedStatement, LoggingExt, NamedValue, Statement,
        TracingSink, Value,
    };
}
