//! Basic example showing how to use stmt-logging.
//!
//! Run with: cargo run --example basic

use std::sync::Arc;

use stmt_logging::prelude::*;
use stmt_logging::{ContextExecutor, Rows, StatementResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A toy statement standing in for whatever your driver prepares.
struct DemoStatement;

struct DemoResult;

impl StatementResult for DemoResult {
    fn last_insert_id(&self) -> stmt_logging::Result<i64> {
        Ok(1)
    }

    fn rows_affected(&self) -> stmt_logging::Result<u64> {
        Ok(1)
    }
}

struct DemoRows {
    rows: Vec<Vec<Value>>,
}

impl Rows for DemoRows {
    fn columns(&self) -> Vec<String> {
        vec!["id".into(), "name".into()]
    }

    fn next(&mut self) -> stmt_logging::Result<Option<Vec<Value>>> {
        Ok(if self.rows.is_empty() {
            None
        } else {
            Some(self.rows.remove(0))
        })
    }
}

impl Statement for DemoStatement {
    fn close(&mut self) -> stmt_logging::Result<()> {
        Ok(())
    }

    fn parameter_count(&self) -> Option<usize> {
        Some(1)
    }

    fn execute(&mut self, _args: &[Value]) -> stmt_logging::Result<Box<dyn StatementResult>> {
        Ok(Box::new(DemoResult))
    }

    fn query(&mut self, _args: &[Value]) -> stmt_logging::Result<Box<dyn Rows>> {
        Ok(Box::new(DemoRows {
            rows: vec![vec![Value::Int(1), Value::Text("ada".into())]],
        }))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,stmt_logging=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let sql = "SELECT id, name FROM users WHERE id = ?";

    // Option 1: Simple wrapping with defaults (TracingSink emits tracing events)
    let mut stmt = LoggedStatement::wrap(Box::new(DemoStatement), sql, Arc::new(TracingSink));

    // Option 2: Using the extension trait (more fluent)
    // let mut stmt = DemoStatement.with_logging(sql, Arc::new(TracingSink));

    // Option 3: With custom configuration
    // let mut stmt = DemoStatement.with_logging_config(
    //     sql,
    //     Arc::new(TracingSink),
    //     LogConfig::production(), // keeps argument values out of records
    // );

    // Every data-access call is now logged.
    stmt.execute(&[Value::Int(1)])?;

    let mut rows = stmt.query(&[Value::Int(1)])?;
    while let Some(row) = rows.next()? {
        tracing::info!(?row, "fetched row");
    }

    // DemoStatement does not support context-aware execution; the wrapper
    // signals that with the Unsupported sentinel and a dispatch layer falls
    // back to the positional path.
    let args = [NamedValue::named("id", 1, 1i64)];
    match stmt.execute_context(&Context::background(), &args) {
        Err(err) if err.is_unsupported() => {
            let positional: Vec<Value> = args.iter().map(|a| a.value.clone()).collect();
            stmt.execute(&positional)?;
        }
        other => {
            other?;
        }
    }

    stmt.close()?;

    Ok(())
}
