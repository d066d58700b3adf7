//! Task-local trace context for web requests.
//!
//! `RequestTrace` opens the scope for each request; error rendering reads
//! it back so Problem Details bodies carry the same id as the
//! `x-request-id` response header. Service and repository code should not
//! depend on this module.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, if the task runs inside one.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(|id| id.clone()).ok()
}

/// Trace id of the current request, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    current().unwrap_or_else(|| "unknown".to_string())
}

/// Run a future with `trace_id` installed as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
