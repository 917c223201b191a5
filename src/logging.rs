use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::{extract::Request, http::StatusCode, response::Response};
use tower::{Layer, Service};

/// Captures the status code of a response as it first becomes known.
/// First write wins; reading before any write reports 200.
#[derive(Debug, Clone, Default)]
pub struct RecordedStatus {
    status: Option<StatusCode>,
}

impl RecordedStatus {
    pub fn new() -> Self {
        Self { status: None }
    }

    /// Record a status write. Subsequent calls are no-ops.
    pub fn record(&mut self, status: StatusCode) {
        if self.status.is_none() {
            self.status = Some(status);
        }
    }

    /// The status observed so far.
    pub fn get(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }
}

/// Emits one log line per request: method, URI, status, and elapsed
/// wall-clock time. Statuses of 400 and above go to the error level,
/// everything else to info.
#[derive(Debug, Clone, Default)]
pub struct RequestLogLayer;

impl RequestLogLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for RequestLogLayer {
    type Service = RequestLog<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLog { inner }
    }
}

/// Decorator around the inner service; forwards the call and logs the
/// outcome. Holds the inner service by value, not by inheritance of any
/// response machinery.
#[derive(Debug, Clone)]
pub struct RequestLog<S> {
    inner: S,
}

impl<S> Service<Request> for RequestLog<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        // Swap in the clone and drive the service that was polled ready.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let method = req.method().clone();
        let uri = req.uri().clone();
        let start = Instant::now();

        Box::pin(async move {
            let response = inner.call(req).await?;

            let mut recorded = RecordedStatus::new();
            recorded.record(response.status());
            let status = recorded.get();
            let duration = start.elapsed();

            if status.as_u16() >= 400 {
                tracing::error!(
                    "[{}] {} {} (took {:?})",
                    status.as_u16(),
                    method,
                    uri,
                    duration
                );
            } else {
                tracing::info!(
                    "[{}] {} {} (took {:?})",
                    status.as_u16(),
                    method,
                    uri,
                    duration
                );
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_status_write_wins() {
        let mut recorded = RecordedStatus::new();
        recorded.record(StatusCode::NOT_FOUND);
        recorded.record(StatusCode::OK);
        recorded.record(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(recorded.get(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn status_defaults_to_ok_when_never_written() {
        let recorded = RecordedStatus::new();
        assert_eq!(recorded.get(), StatusCode::OK);
    }
}
