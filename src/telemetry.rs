//! Terminal-error reporting.
//!
//! Every error the request core gives up on is handed to an
//! [`ErrorReporter`] with the request's method and URL before it is
//! returned to the caller. Reporting is observe-only: it never changes or
//! swallows the error.

use reqwest::Method;

use crate::error::ApiError;

/// Request context attached to error reports.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub url: String,
}

/// Sink for terminal request errors.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &ApiError, context: &RequestContext);
}

/// Default reporter backed by `tracing`.
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &ApiError, context: &RequestContext) {
        tracing::error!(
            method = %context.method,
            url = %context.url,
            kind = ?error.kind(),
            retryable = error.is_retryable(),
            "request failed: {error}"
        );
    }
}

/// Reporter that discards everything. Handy in tests.
pub struct NoopReporter;

impl ErrorReporter for NoopReporter {
    fn report(&self, _error: &ApiError, _context: &RequestContext) {}
}
