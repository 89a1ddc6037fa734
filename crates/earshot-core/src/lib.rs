#![allow(clippy::must_use_candidate)]

mod error;
mod http_client;
mod upstream;

pub use error::HttpError;
pub use http_client::http_client;
pub use upstream::upstream_error_detail;
