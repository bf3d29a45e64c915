//! Uniform JSON envelope for REST API responses.
//!
//! Every response body is a single object carrying either `data` (with
//! optional `page` details) or an `error`:
//!
//! ```json
//! {"data": [...], "page": {"next": "20", "totalSize": 45}}
//! {"error": {"code": 404, "message": "not found"}}
//! ```
//!
//! The write path ([`write_response`], [`write_response_page`],
//! [`write_error`]) encodes fully in memory before committing anything to a
//! [`ResponseSink`]. The read path ([`read_response`], [`read_response_page`],
//! [`read_page_details`]) surfaces an embedded error ahead of the payload,
//! while [`read_error`] is a best-effort probe that never fails.

pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::codec::{
    read_error, read_page_details, read_response, read_response_page, write_error,
    write_response, write_response_page, PagedResponse, ResponseSink,
};
pub use domain::envelope::{ApiError, PageDetails, CONTENT_TYPE_JSON};
pub use error::{is_api_error, CodecError, CodecResult};
pub use infrastructure::http::{BufferedSink, JsonResponse};
