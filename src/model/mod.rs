//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod message;
pub mod user;
pub mod vote;
