//! Built-in getters for repository locations

pub mod file;
pub mod http;

pub use file::FileGetter;
pub use http::HttpGetter;
