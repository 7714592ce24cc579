//! REST API endpoint implementations.
//!
//! Each endpoint is a free function taking the shared `reqwest::Client`, the
//! normalized base URL and the optional session token.

mod connections;
mod request;
mod session;
pub mod url_encoding;

pub use connections::{list_connections, switch_connection};
pub use request::{send_request, with_session};
pub use session::{get_session, update_session};
pub use url_encoding::encode_path_segment;
