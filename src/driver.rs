//! The prepared-statement contract a driver supplies and the optional
//! capabilities it may additionally support.
//!
//! A driver hands out values implementing [`Statement`]. The four extended
//! contracts ([`ContextExecutor`], [`ContextQueryer`], [`NamedValueChecker`],
//! [`ColumnConverter`]) are discovered at runtime through the `as_*` probe
//! methods, which default to `None`. A statement that implements an extended
//! contract overrides the matching probe to return itself:
//!
//! ```rust,ignore
//! impl Statement for MyStatement {
//!     // ...mandatory operations...
//!     fn as_context_executor(&mut self) -> Option<&mut dyn ContextExecutor> {
//!         Some(self)
//!     }
//! }
//! ```
//!
//! Callers probe before every use; probes must stay cheap and side-effect
//! free.

use crate::context::Context;
use crate::error::Result;
use crate::value::{NamedValue, Value, ValueConverter};

/// Outcome of a statement execution that does not return rows.
pub trait StatementResult {
    /// Identifier generated for an inserted row, when the driver has one.
    fn last_insert_id(&self) -> Result<i64>;

    /// Number of rows changed by the statement.
    fn rows_affected(&self) -> Result<u64>;
}

/// A cursor over the rows produced by a query.
pub trait Rows {
    /// Column names, in result order.
    fn columns(&self) -> Vec<String>;

    /// The next row, or `None` once the result set is exhausted.
    fn next(&mut self) -> Result<Option<Vec<Value>>>;
}

/// The mandatory prepared-statement contract.
///
/// `&mut self` on the destructive operations encodes the driver convention
/// that a statement serves one logical caller at a time.
pub trait Statement: Send {
    /// Release the statement. The statement must not be used afterwards.
    fn close(&mut self) -> Result<()>;

    /// Number of bound parameters the statement expects, or `None` when the
    /// driver cannot tell.
    fn parameter_count(&self) -> Option<usize>;

    /// Execute with positional arguments, returning an execution summary.
    fn execute(&mut self, args: &[Value]) -> Result<Box<dyn StatementResult>>;

    /// Execute with positional arguments, returning a row cursor.
    fn query(&mut self, args: &[Value]) -> Result<Box<dyn Rows>>;

    /// Probe for [`ContextExecutor`] support.
    fn as_context_executor(&mut self) -> Option<&mut dyn ContextExecutor> {
        None
    }

    /// Probe for [`ContextQueryer`] support.
    fn as_context_queryer(&mut self) -> Option<&mut dyn ContextQueryer> {
        None
    }

    /// Probe for [`NamedValueChecker`] support.
    fn as_named_value_checker(&self) -> Option<&dyn NamedValueChecker> {
        None
    }

    /// Probe for [`ColumnConverter`] support.
    fn as_column_converter(&self) -> Option<&dyn ColumnConverter> {
        None
    }
}

/// Execution honoring a cancellation/deadline [`Context`] and named
/// arguments.
pub trait ContextExecutor {
    fn execute_context(
        &mut self,
        cx: &Context,
        args: &[NamedValue],
    ) -> Result<Box<dyn StatementResult>>;
}

/// Querying honoring a cancellation/deadline [`Context`] and named arguments.
pub trait ContextQueryer {
    fn query_context(&mut self, cx: &Context, args: &[NamedValue]) -> Result<Box<dyn Rows>>;
}

/// Pre-bind validation or rewriting of a single argument.
///
/// The checker may mutate the value in place (coercion); returning an error
/// rejects the bind.
pub trait NamedValueChecker {
    fn check_named_value(&self, value: &mut NamedValue) -> Result<()>;
}

/// Per-column value conversion.
pub trait ColumnConverter {
    /// Converter for the column at `index` (0-based).
    fn column_converter(&self, index: usize) -> Box<dyn ValueConverter>;
}
