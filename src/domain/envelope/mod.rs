pub mod api_error;
pub mod model;

pub use api_error::ApiError;
pub use model::{Envelope, PageDetails, RawEnvelope};

/// Content type written with every envelope
pub const CONTENT_TYPE_JSON: &str = "application/json";
