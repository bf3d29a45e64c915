use axum::http::{header::CONTENT_TYPE, StatusCode};
use serde::Serialize;

use super::ResponseSink;
use crate::domain::envelope::{ApiError, Envelope, PageDetails, CONTENT_TYPE_JSON};
use crate::error::{CodecError, CodecResult};

/// Write an error envelope carrying `status` as its code
pub fn write_error<S>(sink: &mut S, message: &str, status: StatusCode) -> CodecResult<()>
where
    S: ResponseSink + ?Sized,
{
    let error = ApiError::new(i64::from(status.as_u16()), message);
    encode_and_send(sink, &Envelope::failure(&error), status)
}

/// Write `data` in a success envelope without paging information
pub fn write_response<S, T>(sink: &mut S, data: &T, status: StatusCode) -> CodecResult<()>
where
    S: ResponseSink + ?Sized,
    T: Serialize,
{
    let envelope = Envelope::success(data, None).map_err(CodecError::Encode)?;
    encode_and_send(sink, &envelope, status)
}

/// Write `data` in a success envelope with paging information
pub fn write_response_page<S, T>(
    sink: &mut S,
    data: &T,
    page: &PageDetails,
    status: StatusCode,
) -> CodecResult<()>
where
    S: ResponseSink + ?Sized,
    T: Serialize,
{
    let envelope = Envelope::success(data, Some(page)).map_err(CodecError::Encode)?;
    encode_and_send(sink, &envelope, status)
}

/// Serialize the whole envelope before touching the sink. Once the status is
/// committed it cannot be changed, so an encode failure must leave the sink
/// untouched.
fn encode_and_send<S>(
    sink: &mut S,
    envelope: &Envelope<'_>,
    status: StatusCode,
) -> CodecResult<()>
where
    S: ResponseSink + ?Sized,
{
    let mut body = serde_json::to_vec(envelope).map_err(CodecError::Encode)?;
    body.push(b'\n');

    sink.set_header(CONTENT_TYPE.as_str(), CONTENT_TYPE_JSON);
    sink.write_status(status);
    sink.write_body(&body).map_err(CodecError::Write)?;

    tracing::trace!(status = status.as_u16(), bytes = body.len(), "envelope written");

    Ok(())
}
