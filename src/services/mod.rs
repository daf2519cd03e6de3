//! External service interactions
//!
//! - HTTP client for the study-material backend
//! - Background execution of requests

pub mod api;
#[cfg(test)]
pub mod memory;
pub mod request_runner;

pub use api::{ApiClient, ResourceApi};
pub use request_runner::{Completion, RequestRunner};
