// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod location;

pub use http::HttpRelay;
pub use location::MemoryLocation;
