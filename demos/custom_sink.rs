//! Example of routing records to a user-provided sink.
//!
//! Run with: cargo run --example custom_sink

use std::sync::Arc;

use stmt_logging::prelude::*;
use stmt_logging::{LogRecord, Rows, StatementResult};

/// Writes each record as one JSON line on stdout.
///
/// Any collector that accepts `{"level","msg","query","args",...}` objects
/// can consume this stream directly.
struct JsonLineSink;

impl LogSink for JsonLineSink {
    fn log(&self, record: &LogRecord) {
        if let Ok(line) = serde_json::to_string(record) {
            println!("{line}");
        }
    }
}

struct DemoStatement;

struct DemoResult;

impl StatementResult for DemoResult {
    fn last_insert_id(&self) -> stmt_logging::Result<i64> {
        Ok(7)
    }

    fn rows_affected(&self) -> stmt_logging::Result<u64> {
        Ok(1)
    }
}

impl Statement for DemoStatement {
    fn close(&mut self) -> stmt_logging::Result<()> {
        Ok(())
    }

    fn parameter_count(&self) -> Option<usize> {
        Some(2)
    }

    fn execute(&mut self, args: &[Value]) -> stmt_logging::Result<Box<dyn StatementResult>> {
        if args.len() != 2 {
            return Err(Error::driver("expected 2 parameters"));
        }
        Ok(Box::new(DemoResult))
    }

    fn query(&mut self, _args: &[Value]) -> stmt_logging::Result<Box<dyn Rows>> {
        Err(Error::BadConnection)
    }
}

fn main() {
    let sql = "INSERT INTO users (id, name) VALUES (?, ?)";
    let mut stmt = DemoStatement.with_logging(sql, Arc::new(JsonLineSink));

    // {"level":"info","msg":"StmtExec",...}
    let _ = stmt.execute(&[Value::Int(7), Value::Text("ada".into())]);

    // {"level":"error","msg":"StmtExec","error":"driver error: expected 2 parameters",...}
    let _ = stmt.execute(&[Value::Int(7)]);

    // {"level":"error","msg":"StmtQuery","error":"bad connection",...}
    let _ = stmt.query(&[]);
}
