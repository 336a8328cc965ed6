//! HTTP request handlers.
//!
//! Controllers resolve the caller through `AuthGuard`, convert DTOs into domain
//! parameters, call the matching service and convert the result back into DTOs.

pub mod auth;
pub mod message;
pub mod user;
pub mod vote;
