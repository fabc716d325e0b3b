//! Mappings of objects received from the API, with helper methods for responding to them.
//!
//! The entity types here (users, members, roles, channels, messages) carry only the fields an
//! interaction adapter needs. The platform SDK owns the full object model.

#[macro_use]
mod utils;

pub mod application;
pub mod channel;
pub mod error;
pub mod guild;
pub mod id;
pub mod prelude;
pub mod user;

pub use self::error::Error as ModelError;
