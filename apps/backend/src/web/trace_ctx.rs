//! Task-local trace context for web requests.
//!
//! `RequestTrace` opens the scope for each request; error rendering and
//! logging read it back without threading the id through service code.

use std::cell::RefCell;
use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

const UNKNOWN: &str = "unknown";

/// Trace id of the current task, if a request scope is active.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(|cell| cell.borrow().clone()).ok().flatten()
}

/// Trace id of the current task, or `"unknown"` outside a request.
pub fn trace_id() -> String {
    current().unwrap_or_else(|| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` visible to `trace_id()`.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
