//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO that doubles as the request body
//! - Response shapes where the row is not exposed as-is

pub mod answer;
pub mod question;
pub mod user;
