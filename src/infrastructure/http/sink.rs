use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::codec::{self, ResponseSink};
use crate::domain::envelope::{ApiError, PageDetails};

/// In-memory sink that collects an envelope and becomes an axum [`Response`].
///
/// The first status commit wins. Writes before a commit imply `200 OK`, as an
/// HTTP response writer would.
#[derive(Debug, Default)]
pub struct BufferedSink {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

impl ResponseSink for BufferedSink {
    fn set_header(&mut self, name: &str, value: &str) {
        if self.status.is_some() {
            tracing::warn!(header = name, "header set after status was committed, ignoring");
            return;
        }
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::warn!(header = name, "invalid header, ignoring"),
        }
    }

    fn write_status(&mut self, status: StatusCode) {
        match self.status {
            Some(committed) => tracing::warn!(
                committed = committed.as_u16(),
                attempted = status.as_u16(),
                "superfluous status commit"
            ),
            None => self.status = Some(status),
        }
    }

    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()> {
        self.status.get_or_insert(StatusCode::OK);
        self.body.extend_from_slice(body);
        Ok(())
    }
}

impl IntoResponse for BufferedSink {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}

/// Success envelope returned from axum handlers
#[derive(Debug)]
pub struct JsonResponse<T> {
    data: T,
    page: Option<PageDetails>,
    status: StatusCode,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn ok(data: T) -> Self {
        Self::with_status(data, StatusCode::OK)
    }

    pub fn with_status(data: T, status: StatusCode) -> Self {
        Self {
            data,
            page: None,
            status,
        }
    }

    pub fn page(mut self, page: PageDetails) -> Self {
        self.page = Some(page);
        self
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        let mut sink = BufferedSink::new();
        let written = match &self.page {
            Some(page) => codec::write_response_page(&mut sink, &self.data, page, self.status),
            None => codec::write_response(&mut sink, &self.data, self.status),
        };

        match written {
            Ok(()) => sink.into_response(),
            // Nothing reached the sink, so a different status can still be reported.
            Err(err) => {
                tracing::error!(
                    error = %err,
                    status = self.status.as_u16(),
                    "failed to encode response"
                );
                ApiError::new(
                    i64::from(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
                    "failed to encode response",
                )
                .into_response()
            }
        }
    }
}

/// Handlers can return an [`ApiError`] directly; its code becomes the status.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = u16::try_from(self.code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        }

        let mut sink = BufferedSink::new();
        match codec::write_error(&mut sink, &self.message, status) {
            Ok(()) => sink.into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to encode error response");
                status.into_response()
            }
        }
    }
}
