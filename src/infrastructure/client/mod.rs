//! Reading envelopes from `reqwest` responses.
//!
//! The body is buffered in full and handed to the synchronous read path.
//! Callers set their own timeouts on the `reqwest::Client`.

use serde::de::DeserializeOwned;

use crate::domain::codec::{self, PagedResponse};
use crate::domain::envelope::{ApiError, PageDetails};
use crate::error::CodecResult;

pub async fn read_response_page<T: DeserializeOwned>(
    response: reqwest::Response,
) -> CodecResult<PagedResponse<T>> {
    let body = response.bytes().await?;
    codec::read_response_page(&body[..])
}

pub async fn read_response<T: DeserializeOwned>(response: reqwest::Response) -> CodecResult<T> {
    let body = response.bytes().await?;
    codec::read_response(&body[..])
}

pub async fn read_page_details(response: reqwest::Response) -> CodecResult<Option<PageDetails>> {
    let body = response.bytes().await?;
    codec::read_page_details(&body[..])
}

/// Best-effort, like [`codec::read_error`]: a body that cannot be fetched
/// counts as carrying no error.
pub async fn read_error(response: reqwest::Response) -> Option<ApiError> {
    match response.bytes().await {
        Ok(body) => codec::read_error(&body[..]),
        Err(err) => {
            tracing::debug!(error = %err, "failed to fetch response body");
            None
        }
    }
}
