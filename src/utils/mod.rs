//! Utility modules
//!
//! MIME detection, header construction and URL joining shared by the
//! provider layer.

pub mod http_headers;
pub mod mime;
pub mod url;

pub use url::join_url;
