use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;
use crate::error::AppError;

/// Emits one `request_completed` event per request; 5xx at error, 4xx at warn.
///
/// The route is the matched pattern (`/api/clues/{id}`) so events for one
/// endpoint group together; the raw path falls back in when nothing matched.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// Problem code of an `AppError` carried by the response, if any.
fn error_code<B>(res: &ServiceResponse<B>) -> Option<&'static str> {
    res.response()
        .error()
        .and_then(|e| e.as_error::<AppError>())
        .map(|app| app.code().as_str())
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let route = req
            .match_pattern()
            .unwrap_or_else(|| req.path().to_string());

        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, code) = match &result {
                Ok(res) => (res.status(), error_code(res)),
                Err(err) => (
                    err.as_response_error().status_code(),
                    err.as_error::<AppError>().map(|app| app.code().as_str()),
                ),
            };

            let duration_us = start.elapsed().as_micros() as u64;
            let status_code = status.as_u16();
            let code = code.unwrap_or("-");

            match status {
                s if s.is_server_error() => {
                    error!(http.method=%method, http.route=%route, http.status_code=status_code, error.code=code, duration_us, trace_id=%trace_id, "request_completed");
                }
                s if s.is_client_error() => {
                    warn!(http.method=%method, http.route=%route, http.status_code=status_code, error.code=code, duration_us, trace_id=%trace_id, "request_completed");
                }
                _ => {
                    info!(http.method=%method, http.route=%route, http.status_code=status_code, duration_us, trace_id=%trace_id, "request_completed");
                }
            }

            result
        })
    }
}
