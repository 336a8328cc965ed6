//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Rejecting malformed input before it reaches the database
//! - **Orchestration**: Coordinating repository calls into one operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod message;
pub mod vote;
