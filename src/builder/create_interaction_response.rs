use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::CreateEmbed;
use crate::internal::prelude::*;
use crate::model::application::InteractionResponseType;
use crate::model::channel::MessageFlags;

/// The initial response to an interaction, sent to the callback endpoint.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object).
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum CreateInteractionResponse {
    /// Acknowledges a Ping (only required when your bot uses an HTTP endpoint URL).
    ///
    /// Corresponds to Discord's `PONG`.
    Pong,
    /// Responds to an interaction with a message.
    ///
    /// Corresponds to Discord's `CHANNEL_MESSAGE_WITH_SOURCE`.
    Message(CallbackData),
    /// Acknowledges the interaction in order to edit a response later. The user sees a loading
    /// state.
    ///
    /// Corresponds to Discord's `DEFERRED_CHANNEL_MESSAGE_WITH_SOURCE`.
    Defer(CallbackData),
}

impl CreateInteractionResponse {
    /// The response type this variant is sent as.
    #[must_use]
    pub fn kind(&self) -> InteractionResponseType {
        match self {
            Self::Pong => InteractionResponseType::Pong,
            Self::Message(_) => InteractionResponseType::ChannelMessageWithSource,
            Self::Defer(_) => InteractionResponseType::DeferredChannelMessageWithSource,
        }
    }
}

impl Serialize for CreateInteractionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        let data = match self {
            Self::Pong => None,
            Self::Message(data) | Self::Defer(data) => Some(data),
        };

        let mut map = serializer.serialize_map(Some(1 + usize::from(data.is_some())))?;
        map.serialize_entry("type", &self.kind())?;
        if let Some(data) = data {
            map.serialize_entry("data", data)?;
        }
        map.end()
    }
}

/// The message part of an interaction callback.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-messages).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[must_use]
pub struct CallbackData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    embeds: Option<Vec<CreateEmbed>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    flags: Option<MessageFlags>,
}

impl CallbackData {
    /// Equivalent to [`Self::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the message is text-to-speech.
    ///
    /// Think carefully before setting this to `true`.
    pub fn tts(mut self, tts: bool) -> Self {
        self.tts = Some(tts);
        self
    }

    /// Set the content of the message.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Adds an embed to the message.
    pub fn add_embed(mut self, embed: CreateEmbed) -> Self {
        self.embeds.get_or_insert_with(Vec::new).push(embed);
        self
    }

    /// Sets a list of embeds to include in the message.
    ///
    /// Calling this will overwrite the embed list. To append embeds, call [`Self::add_embed`]
    /// instead.
    pub fn embeds(mut self, embeds: Vec<CreateEmbed>) -> Self {
        self.embeds = Some(embeds);
        self
    }

    /// Sets the flags for the message.
    pub fn flags(mut self, flags: MessageFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Adds or removes the ephemeral flag.
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        let mut flags = self.flags.unwrap_or_else(MessageFlags::empty);
        flags.set(MessageFlags::EPHEMERAL, ephemeral);
        self.flags = Some(flags);
        self
    }
}

/// Anything that can be posted as a message: plain text, one embed, or a list of embeds.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageContent {
    Text(String),
    Embed(CreateEmbed),
    Embeds(Vec<CreateEmbed>),
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for MessageContent {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<CreateEmbed> for MessageContent {
    fn from(embed: CreateEmbed) -> Self {
        Self::Embed(embed)
    }
}

impl From<Vec<CreateEmbed>> for MessageContent {
    fn from(embeds: Vec<CreateEmbed>) -> Self {
        Self::Embeds(embeds)
    }
}

impl From<MessageContent> for CallbackData {
    /// Text becomes `{content, embeds: []}`, a single embed becomes `{embeds: [embed]}` and a
    /// list becomes `{embeds: list}`.
    fn from(message: MessageContent) -> Self {
        match message {
            MessageContent::Text(text) => CallbackData::new().content(text).embeds(Vec::new()),
            MessageContent::Embed(embed) => CallbackData::new().embeds(vec![embed]),
            MessageContent::Embeds(embeds) => CallbackData::new().embeds(embeds),
        }
    }
}
