//! Data transfer objects for the HTTP API.
//!
//! These types define the JSON wire format of every endpoint. They are
//! converted from domain models at the controller boundary and carry the
//! serde and schema derives needed for serialization and OpenAPI documentation.

pub mod api;
pub mod favorites;
pub mod person;
pub mod planet;
pub mod user;
