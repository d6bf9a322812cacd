//! The structured record emitted around statement operations and the sink
//! contract that receives it.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::value::Value;

/// Severity of a [`LogRecord`]: `Info` for a successful operation, `Error`
/// for a failed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => f.write_str("info"),
            Level::Error => f.write_str("error"),
        }
    }
}

/// Statement operation names, as they appear in the `msg` field of emitted
/// records.
///
/// The serialized names are a stable schema; sinks may match on them.
/// `StmtClose` and `StmtNumInput` are part of the schema but are not emitted
/// today: lifecycle operations are not logged, only data access is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    StmtClose,
    StmtNumInput,
    StmtExec,
    StmtQuery,
    StmtExecContext,
    StmtQueryContext,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::StmtClose => "StmtClose",
            Operation::StmtNumInput => "StmtNumInput",
            Operation::StmtExec => "StmtExec",
            Operation::StmtQuery => "StmtQuery",
            Operation::StmtExecContext => "StmtExecContext",
            Operation::StmtQueryContext => "StmtQueryContext",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured event describing one statement operation.
///
/// Serializes to the shape
/// `{"level","msg","query","args","error"?,"elapsed_ms"?}`; `error` is
/// present only on failure, `args` only when argument logging is enabled and
/// the call had arguments, `elapsed_ms` only when duration recording is
/// enabled.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub level: Level,
    #[serde(rename = "msg")]
    pub operation: Operation,
    /// The SQL text captured when the statement was prepared.
    pub query: String,
    /// Bound arguments in call order. Named arguments are flattened to their
    /// values; names and ordinals are not part of the payload.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(
        rename = "elapsed_ms",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_elapsed_ms"
    )]
    pub elapsed: Option<Duration>,
}

fn serialize_elapsed_ms<S: Serializer>(
    elapsed: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    // skip_serializing_if keeps None out of the output
    let millis = elapsed.map_or(0.0, |e| e.as_secs_f64() * 1_000.0);
    serializer.serialize_f64(millis)
}

/// Where records go.
///
/// Implementations must be safe for concurrent use: one sink is shared by
/// every statement a connection prepares. The contract is fire and forget.
/// A sink cannot report failure back to the producer, and it must not block
/// longer than a log write reasonably takes.
pub trait LogSink: Send + Sync {
    fn log(&self, record: &LogRecord);
}

/// The out-of-the-box sink: re-emits each record as a [`tracing`] event at
/// the matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, record: &LogRecord) {
        let args = serde_json::to_string(&record.args).unwrap_or_default();
        let elapsed_ms = record.elapsed.map(|e| e.as_secs_f64() * 1_000.0);
        match record.level {
            Level::Info => tracing::info!(
                query = %record.query,
                args = %args,
                elapsed_ms,
                "{}",
                record.operation
            ),
            Level::Error => tracing::error!(
                query = %record.query,
                args = %args,
                elapsed_ms,
                error = record.error.as_deref(),
                "{}",
                record.operation
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Level::Info).unwrap(), json!("info"));
        assert_eq!(serde_json::to_value(Level::Error).unwrap(), json!("error"));
        assert_eq!(Level::Error.to_string(), "error");
    }

    #[test]
    fn operations_serialize_as_schema_names() {
        assert_eq!(
            serde_json::to_value(Operation::StmtExecContext).unwrap(),
            json!("StmtExecContext")
        );
        assert_eq!(Operation::StmtQuery.as_str(), "StmtQuery");
    }

    #[test]
    fn success_record_omits_error() {
        let record = LogRecord {
            level: Level::Info,
            operation: Operation::StmtExec,
            query: "SELECT 1".into(),
            args: vec![Value::Int(1)],
            error: None,
            elapsed: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            json!({"level": "info", "msg": "StmtExec", "query": "SELECT 1", "args": [1]})
        );
    }

    #[test]
    fn failure_record_carries_error_and_elapsed() {
        let record = LogRecord {
            level: Level::Error,
            operation: Operation::StmtQuery,
            query: "SELECT 1".into(),
            args: vec![],
            error: Some("bad connection".into()),
            elapsed: Some(Duration::from_millis(2)),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["error"], json!("bad connection"));
        assert_eq!(json["elapsed_ms"], json!(2.0));
        assert!(json.get("args").is_none());
    }
}
