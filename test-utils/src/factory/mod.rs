//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, so
//! create parents first (or use the `helpers` module).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let message = factory::message::create_message(&db, user.id).await?;
//!
//!     let (author, message) = factory::helpers::create_message_with_author(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("alice")
//!     .build()
//!     .await?;
//!
//! let message = factory::message::MessageFactory::new(&db, user.id)
//!     .message("Hello")
//!     .vote_count(3)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod message;
pub mod user;
pub mod vote;

pub use message::create_message;
pub use user::create_user;
pub use vote::create_vote;
