pub mod reader;
pub mod sink;
pub mod writer;

pub use reader::{read_error, read_page_details, read_response, read_response_page, PagedResponse};
pub use sink::ResponseSink;
pub use writer::{write_error, write_response, write_response_page};
