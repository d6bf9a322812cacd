//! Logged statement wrapper.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::config::LogConfig;
use crate::context::Context;
use crate::driver::{
    ColumnConverter, ContextExecutor, ContextQueryer, NamedValueChecker, Rows, Statement,
    StatementResult,
};
use crate::error::{Error, Result};
use crate::log::{Level, LogRecord, LogSink, Operation};
use crate::value::{DefaultConverter, NamedValue, Value, ValueConverter};

/// A logging wrapper around a driver-supplied [`Statement`].
///
/// The wrapper implements the full statement contract plus all four extended
/// capabilities, making it a drop-in replacement for the raw statement. Each
/// data-access operation (`execute`, `query` and their context-aware
/// variants) is forwarded unchanged and produces exactly one [`LogRecord`],
/// emitted synchronously before the call returns. Inputs, outputs, and errors
/// are never altered: from the caller's side the wrapper is indistinguishable
/// from the raw statement, apart from the records flowing to the sink.
///
/// # Capability forwarding
///
/// The wrapper re-exposes an extended capability exactly when the wrapped
/// statement supports it: its probe methods answer `Some` iff the statement's
/// do, re-checked on every call. Calling a context-aware operation on a
/// wrapper whose statement lacks the capability returns
/// [`Error::Unsupported`] so the caller can fall back to the positional path.
///
/// # What is not logged
///
/// `close` and `parameter_count` produce no records, and neither do the
/// unsupported-capability and `check_named_value` paths: only operations that
/// actually touch data are logged. A sink that wants lifecycle visibility has
/// to get it elsewhere.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use stmt_logging::{LoggedStatement, TracingSink, Value};
///
/// let sql = "SELECT * FROM users WHERE id = ?";
/// let stmt = conn.prepare(sql)?;
/// let mut stmt = LoggedStatement::wrap(Box::new(stmt), sql, Arc::new(TracingSink));
///
/// // Forwarded to the driver, logged on the way out.
/// let result = stmt.execute(&[Value::Int(7)])?;
/// ```
pub struct LoggedStatement {
    query: String,
    inner: Box<dyn Statement>,
    sink: Arc<dyn LogSink>,
    config: Arc<LogConfig>,
}

impl LoggedStatement {
    /// Create a new logged statement with the given configuration.
    ///
    /// `query` is the SQL text captured at preparation time; it is attached
    /// verbatim to every record this wrapper emits.
    pub fn new(
        inner: Box<dyn Statement>,
        query: impl Into<String>,
        sink: Arc<dyn LogSink>,
        config: LogConfig,
    ) -> Self {
        Self {
            query: query.into(),
            inner,
            sink,
            config: Arc::new(config),
        }
    }

    /// Create a new logged statement with default configuration.
    pub fn wrap(inner: Box<dyn Statement>, query: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self::new(inner, query, sink, LogConfig::default())
    }

    /// The SQL text this statement was prepared with.
    pub fn sql(&self) -> &str {
        &self.query
    }

    /// Get the logging configuration.
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Get a reference to the wrapped statement.
    pub fn inner(&self) -> &dyn Statement {
        self.inner.as_ref()
    }

    /// Consume the wrapper and return the wrapped statement.
    pub fn into_inner(self) -> Box<dyn Statement> {
        self.inner
    }

    /// Build and emit the record for one completed operation.
    fn emit(&self, operation: Operation, args: &[Value], started: Instant, err: Option<&Error>) {
        let record = LogRecord {
            level: if err.is_some() { Level::Error } else { Level::Info },
            operation,
            query: self.query.clone(),
            args: if self.config.log_arguments {
                args.to_vec()
            } else {
                Vec::new()
            },
            error: err.map(ToString::to_string),
            elapsed: self.config.record_duration.then(|| started.elapsed()),
        };
        self.sink.log(&record);
    }
}

impl fmt::Debug for LoggedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggedStatement")
            .field("query", &self.query)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Statement for LoggedStatement {
    fn close(&mut self) -> Result<()> {
        self.inner.close()
    }

    fn parameter_count(&self) -> Option<usize> {
        self.inner.parameter_count()
    }

    fn execute(&mut self, args: &[Value]) -> Result<Box<dyn StatementResult>> {
        let started = Instant::now();
        let result = self.inner.execute(args);
        self.emit(Operation::StmtExec, args, started, result.as_ref().err());
        result
    }

    fn query(&mut self, args: &[Value]) -> Result<Box<dyn Rows>> {
        let started = Instant::now();
        let result = self.inner.query(args);
        self.emit(Operation::StmtQuery, args, started, result.as_ref().err());
        result
    }

    fn as_context_executor(&mut self) -> Option<&mut dyn ContextExecutor> {
        if self.inner.as_context_executor().is_some() {
            Some(self)
        } else {
            None
        }
    }

    fn as_context_queryer(&mut self) -> Option<&mut dyn ContextQueryer> {
        if self.inner.as_context_queryer().is_some() {
            Some(self)
        } else {
            None
        }
    }

    fn as_named_value_checker(&self) -> Option<&dyn NamedValueChecker> {
        if self.inner.as_named_value_checker().is_some() {
            Some(self)
        } else {
            None
        }
    }

    fn as_column_converter(&self) -> Option<&dyn ColumnConverter> {
        if self.inner.as_column_converter().is_some() {
            Some(self)
        } else {
            None
        }
    }
}

impl ContextExecutor for LoggedStatement {
    fn execute_context(
        &mut self,
        cx: &Context,
        args: &[NamedValue],
    ) -> Result<Box<dyn StatementResult>> {
        let started = Instant::now();
        let result = match self.inner.as_context_executor() {
            Some(delegate) => delegate.execute_context(cx, args),
            None => return Err(Error::Unsupported),
        };
        let values: Vec<Value> = args.iter().map(|a| a.value.clone()).collect();
        self.emit(
            Operation::StmtExecContext,
            &values,
            started,
            result.as_ref().err(),
        );
        result
    }
}

impl ContextQueryer for LoggedStatement {
    fn query_context(&mut self, cx: &Context, args: &[NamedValue]) -> Result<Box<dyn Rows>> {
        let started = Instant::now();
        let result = match self.inner.as_context_queryer() {
            Some(delegate) => delegate.query_context(cx, args),
            None => return Err(Error::Unsupported),
        };
        let values: Vec<Value> = args.iter().map(|a| a.value.clone()).collect();
        self.emit(
            Operation::StmtQueryContext,
            &values,
            started,
            result.as_ref().err(),
        );
        result
    }
}

impl NamedValueChecker for LoggedStatement {
    fn check_named_value(&self, value: &mut NamedValue) -> Result<()> {
        match self.inner.as_named_value_checker() {
            Some(checker) => checker.check_named_value(value),
            None => Err(Error::Unsupported),
        }
    }
}

impl ColumnConverter for LoggedStatement {
    fn column_converter(&self, index: usize) -> Box<dyn ValueConverter> {
        match self.inner.as_column_converter() {
            Some(converter) => converter.column_converter(index),
            None => Box::new(DefaultConverter),
        }
    }
}

/// Extension trait for easy wrapping of statements.
pub trait LoggingExt: Statement + Sized + 'static {
    /// Wrap this statement with logging instrumentation.
    fn with_logging(self, query: impl Into<String>, sink: Arc<dyn LogSink>) -> LoggedStatement;

    /// Wrap this statement with custom logging configuration.
    fn with_logging_config(
        self,
        query: impl Into<String>,
        sink: Arc<dyn LogSink>,
        config: LogConfig,
    ) -> LoggedStatement;
}

impl<S: Statement + 'static> LoggingExt for S {
    fn with_logging(self, query: impl Into<String>, sink: Arc<dyn LogSink>) -> LoggedStatement {
        LoggedStatement::wrap(Box::new(self), query, sink)
    }

    fn with_logging_config(
        self,
        query: impl Into<String>,
        sink: Arc<dyn LogSink>,
        config: LogConfig,
    ) -> LoggedStatement {
        LoggedStatement::new(Box::new(self), query, sink, config)
    }
}
