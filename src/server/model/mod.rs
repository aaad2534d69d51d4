//! Server-side domain models.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities. Domain models are converted from entity models at the repository
//! boundary and transformed to DTOs at the controller boundary. They provide type-safe
//! representations with business logic separated from database and API concerns.

pub mod favorites;
pub mod person;
pub mod planet;
pub mod user;
