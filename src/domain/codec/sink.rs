use axum::http::StatusCode;

/// Destination of an encoded envelope.
///
/// Mirrors the three operations of an HTTP response writer. The status is
/// committed once; implementations decide what a second commit means.
pub trait ResponseSink {
    fn set_header(&mut self, name: &str, value: &str);

    fn write_status(&mut self, status: StatusCode);

    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()>;
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn set_header(&mut self, name: &str, value: &str) {
        (**self).set_header(name, value)
    }

    fn write_status(&mut self, status: StatusCode) {
        (**self).write_status(status)
    }

    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()> {
        (**self).write_body(body)
    }
}
