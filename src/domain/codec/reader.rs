use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::Read;

use crate::domain::envelope::{ApiError, PageDetails, RawEnvelope};
use crate::error::{CodecError, CodecResult};

/// Payload and paging information read from a success envelope
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResponse<T> {
    pub data: T,
    pub page: Option<PageDetails>,
}

/// Read a paged envelope and unmarshal its `data` into `T`.
///
/// A server-reported error takes priority and `data` is not inspected.
pub fn read_response_page<T, R>(source: R) -> CodecResult<PagedResponse<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let envelope = decode_envelope(source)?;
    let data = serde_json::from_str(envelope.data_json()).map_err(CodecError::Unmarshal)?;
    Ok(PagedResponse {
        data,
        page: envelope.page,
    })
}

/// Read an envelope and unmarshal its `data` into `T`, discarding paging
pub fn read_response<T, R>(source: R) -> CodecResult<T>
where
    T: DeserializeOwned,
    R: Read,
{
    read_response_page(source).map(|response| response.data)
}

/// Read an envelope without a payload target. Only the page is returned and
/// `data` is left uninterpreted.
pub fn read_page_details<R: Read>(source: R) -> CodecResult<Option<PageDetails>> {
    decode_envelope(source).map(|envelope| envelope.page)
}

/// Best-effort extraction of the `error` object.
///
/// Returns `None` when the input is not JSON or carries no error. Never fails.
pub fn read_error<R: Read>(source: R) -> Option<ApiError> {
    #[derive(Deserialize)]
    struct ErrorOnly {
        #[serde(default)]
        error: Option<ApiError>,
    }

    let mut de = serde_json::Deserializer::from_reader(source);
    match ErrorOnly::deserialize(&mut de) {
        Ok(envelope) => envelope.error,
        Err(err) => {
            tracing::debug!(error = %err, "response carried no readable error envelope");
            None
        }
    }
}

/// Parse the first JSON value of `source` as an envelope, surfacing an
/// embedded error as the failure.
fn decode_envelope<R: Read>(source: R) -> CodecResult<RawEnvelope> {
    let mut de = serde_json::Deserializer::from_reader(source);
    let envelope = RawEnvelope::deserialize(&mut de).map_err(CodecError::Decode)?;

    match envelope.error {
        Some(error) => Err(CodecError::Server(error)),
        None => Ok(envelope),
    }
}
