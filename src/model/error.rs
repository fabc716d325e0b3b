//! Error enum definition wrapping potential model implementation errors.

use std::error::Error as StdError;
use std::fmt;

use super::id::RoleId;

/// An error returned from the [`model`] module.
///
/// This is always wrapped within the library's [`Error::Model`] variant.
///
/// # Examples
///
/// Matching an [`Error`] with this variant would look something like the following for the
/// [`Interaction::pong`] method:
///
/// ```rust,no_run
/// use slashcord::http::Http;
/// use slashcord::model::application::Interaction;
/// use slashcord::model::ModelError;
/// use slashcord::Error;
///
/// # async fn run(http: &Http, interaction: &mut Interaction) {
/// match interaction.pong(http).await {
///     Ok(()) => {},
///     Err(Error::Model(ModelError::AlreadyResponded)) => {
///         println!("The interaction was already answered");
///     },
///     Err(why) => println!("Unexpected error: {why:?}"),
/// }
/// # }
/// ```
///
/// [`Error`]: crate::Error
/// [`Error::Model`]: crate::Error::Model
/// [`Interaction::pong`]: crate::model::application::Interaction::pong
/// [`model`]: crate::model
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// An initial response (a pong or a reply) was already sent for the interaction.
    ///
    /// Discord accepts exactly one initial response per interaction. This is a protocol
    /// violation, not a transient failure, and retrying will not help.
    AlreadyResponded,
    /// A guild-scoped entity (such as a role) was requested for an interaction that did not come
    /// from a guild.
    NoGuild,
    /// The value of the named option could not be read as a snowflake while hydrating it.
    InvalidOptionValue(String),
    /// The guild does not have a role with the given Id.
    RoleNotFound(RoleId),
    /// Neither the interaction nor the client knows which application to send the webhook
    /// request as.
    NoApplicationId,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyResponded => f.write_str("Can only execute the callback once."),
            Self::NoGuild => f.write_str("The interaction was not sent from a guild."),
            Self::InvalidOptionValue(name) => {
                write!(f, "The value of option `{name}` is not a valid snowflake.")
            },
            Self::RoleNotFound(id) => write!(f, "Role {id} does not exist in the guild."),
            Self::NoApplicationId => f.write_str("No application Id is known for the interaction."),
        }
    }
}

impl StdError for Error {}
