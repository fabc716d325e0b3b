//! A set of builders used to make the bodies of interaction responses and follow-ups.
//!
//! Builders take ownership of their values and are chained by value, so they can be passed
//! straight to the methods on [`Interaction`].
//!
//! [`Interaction`]: crate::model::application::Interaction

mod create_attachment;
mod create_embed;
mod create_interaction_response;
mod edit_interaction_response;

pub use self::create_attachment::*;
pub use self::create_embed::*;
pub use self::create_interaction_response::*;
pub use self::edit_interaction_response::*;
