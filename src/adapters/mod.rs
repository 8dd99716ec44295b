// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod payload;
pub mod storage;

pub use http::HttpServiceSource;
pub use storage::LocalStorage;
