//! Probe services implementations

pub mod credential_source;
pub mod http_transport;

#[cfg(test)]
pub mod tests;

pub use credential_source::*;
pub use http_transport::*;
