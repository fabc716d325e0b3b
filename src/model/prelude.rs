//! The model prelude re-exports all types in the model sub-modules.
//!
//! This allows for quick and easy access to all of the model types.
//!
//! # Examples
//!
//! Import all model types into scope:
//!
//! ```rust,no_run
//! use slashcord::model::prelude::*;
//! ```

#[doc(inline)]
pub use super::application::*;
#[doc(inline)]
pub use super::channel::*;
#[doc(inline)]
pub use super::guild::*;
#[doc(inline)]
pub use super::id::*;
#[doc(inline)]
pub use super::user::*;
#[doc(inline)]
pub use super::ModelError;
