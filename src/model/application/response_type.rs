use std::fmt;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::internal::prelude::*;

/// The available response types for the initial response to an interaction.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-interaction-callback-type).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum InteractionResponseType {
    /// Acknowledges a `Ping`.
    Pong,
    /// Responds to an interaction with a message.
    ChannelMessageWithSource,
    /// Acknowledges an interaction and edits a response later. The user sees a loading state.
    DeferredChannelMessageWithSource,
}

/// The reverse table, scanned by [`InteractionResponseTable::from`] and
/// [`InteractionResponseTable::from_name`]. It must list every response type with the code and
/// name the exhaustive matches give it.
const TABLE: [(u8, InteractionResponseType, &str); 3] = [
    (1, InteractionResponseType::Pong, "Pong"),
    (4, InteractionResponseType::ChannelMessageWithSource, "ChannelMessageWithSource"),
    (5, InteractionResponseType::DeferredChannelMessageWithSource, "DeferredChannelMessageWithSource"),
];

/// Bidirectional lookup between [`InteractionResponseType`]s and their wire integers.
///
/// ```rust
/// use slashcord::model::application::{InteractionResponseTable, InteractionResponseType};
///
/// assert_eq!(InteractionResponseTable::to(InteractionResponseType::Pong), 1);
/// assert_eq!(
///     InteractionResponseTable::from(5),
///     Some(InteractionResponseType::DeferredChannelMessageWithSource)
/// );
/// assert_eq!(InteractionResponseTable::from(2), None);
/// ```
pub struct InteractionResponseTable;

impl InteractionResponseTable {
    /// Maps a response type to its wire integer.
    #[must_use]
    pub fn to(kind: InteractionResponseType) -> u8 {
        match kind {
            InteractionResponseType::Pong => 1,
            InteractionResponseType::ChannelMessageWithSource => 4,
            InteractionResponseType::DeferredChannelMessageWithSource => 5,
        }
    }

    /// Maps a wire integer back to its response type. Unknown codes return `None`.
    #[must_use]
    pub fn from(code: u8) -> Option<InteractionResponseType> {
        TABLE.iter().find(|(c, _, _)| *c == code).map(|(_, kind, _)| *kind)
    }

    /// Looks up a response type by its symbolic name, such as `"ChannelMessageWithSource"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<InteractionResponseType> {
        TABLE.iter().find(|(_, _, n)| *n == name).map(|(_, kind, _)| *kind)
    }
}

impl InteractionResponseType {
    /// The wire integer of this response type.
    #[must_use]
    pub fn num(self) -> u8 {
        InteractionResponseTable::to(self)
    }

    /// The symbolic name of this response type.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pong => "Pong",
            Self::ChannelMessageWithSource => "ChannelMessageWithSource",
            Self::DeferredChannelMessageWithSource => "DeferredChannelMessageWithSource",
        }
    }
}

impl fmt::Display for InteractionResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for InteractionResponseType {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.serialize_u8(self.num())
    }
}

impl<'de> Deserialize<'de> for InteractionResponseType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        InteractionResponseTable::from(code)
            .ok_or_else(|| DeError::custom(format!("unknown InteractionResponseType value: {code}")))
    }
}
