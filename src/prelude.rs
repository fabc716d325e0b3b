//! A set of exports which can be helpful to use.
//!
//! Note that the `SlashcordError` re-export is equivalent to [`slashcord::Error`], although is
//! re-exported as a separate name to remove likely ambiguity with other crate error enums.
//!
//! # Examples
//!
//! Import all of the exports:
//!
//! ```rust
//! use slashcord::prelude::*;
//! ```
//!
//! [`slashcord::Error`]: crate::Error

pub use crate::builder::{CreateAttachment, CreateEmbed, EditInteractionResponse};
pub use crate::error::Error as SlashcordError;
pub use crate::http::{Http, HttpBuilder, HttpError, HttpExecutor};
pub use crate::model::application::{Interaction, OptionLookup, ReplyOptions};
pub use crate::model::ModelError;
pub use crate::resolver::EntityResolver;
