//! Test fixtures and utilities

pub mod api_responses;
pub mod env_files;

#[allow(unused_imports)]
pub use api_responses::*;
#[allow(unused_imports)]
pub use env_files::*;
