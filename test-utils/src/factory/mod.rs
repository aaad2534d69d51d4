//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key relationships,
//! making tests more concise and maintainable.
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
//!     // Create with defaults
//!     let planet = factory::planet::create_planet(&db).await?;
//!     let user = factory::user::create_active_user(&db).await?;
//!
//!     // Link them through the association table
//!     factory::favorite::create_favorite_planet(&db, user.id, planet.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("luke")
//!     .email("luke@rebellion.example")
//!     .is_active(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `person` - Create people entities
//! - `planet` - Create planet entities
//! - `user` - Create user entities
//! - `favorite` - Create user-favorite association rows
//! - `helpers` - Unique id generation shared across factories

pub mod favorite;
pub mod helpers;
pub mod person;
pub mod planet;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use favorite::{create_favorite_character, create_favorite_planet};
pub use person::create_person;
pub use planet::create_planet;
pub use user::{create_active_user, create_user};
