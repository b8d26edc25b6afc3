pub mod traits;

// Backend implementations
pub mod http_backend;
