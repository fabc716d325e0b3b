//! Models relating to channels and the messages sent in them.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::id::{ChannelId, MessageId};
use crate::builder::CreateEmbed;
use crate::internal::prelude::*;

/// A container for any partial channel.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-resolved-data-structure).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[non_exhaustive]
pub struct PartialChannel {
    /// The channel Id.
    pub id: ChannelId,
    /// The channel name.
    #[serde(default)]
    pub name: Option<String>,
    /// The channel type, as sent by the API.
    #[serde(rename = "type", default)]
    pub kind: u8,
    /// The Id of the category or text channel this channel is nested under.
    #[serde(default)]
    pub parent_id: Option<ChannelId>,
}

impl PartialChannel {
    /// Returns a string formatted to mention the channel in a message.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}

/// A message sent through an interaction webhook.
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#message-object).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Message {
    /// The unique Id of the message. Can be used to calculate the creation date of the message.
    pub id: MessageId,
    /// The Id of the [`Channel`] that the message was sent to.
    ///
    /// [`Channel`]: PartialChannel
    #[serde(default)]
    pub channel_id: Option<ChannelId>,
    /// The content of the message.
    #[serde(default)]
    pub content: String,
    /// Array of embeds sent with the message.
    #[serde(default)]
    pub embeds: Vec<CreateEmbed>,
}

bitflags::bitflags! {
    /// Describes extra features of the message.
    ///
    /// [Discord docs](https://discord.com/developers/docs/resources/channel#message-object-message-flags).
    #[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialEq)]
    pub struct MessageFlags: u64 {
        /// This message will not include any embeds when serializing.
        const SUPPRESS_EMBEDS = 1 << 2;
        /// This message is only visible to the user who invoked the Interaction.
        const EPHEMERAL = 1 << 6;
        /// This message will not trigger push and desktop notifications.
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
    }
}

impl Serialize for MessageFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for MessageFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        Ok(Self::from_bits_retain(u64::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};

    #[test]
    fn ephemeral_flag_is_bit_six() {
        assert_eq!(MessageFlags::EPHEMERAL.bits(), 64);
        assert_json(&MessageFlags::EPHEMERAL, json!(64));
    }

    #[test]
    fn unknown_flag_bits_survive() {
        let flags: MessageFlags = serde_json::from_value(json!(1 << 20 | 64)).unwrap();
        assert!(flags.contains(MessageFlags::EPHEMERAL));
        assert_eq!(flags.bits(), 1 << 20 | 64);
    }

    #[test]
    fn channel_mention() {
        let channel = PartialChannel {
            id: ChannelId::new(81384788765712384),
            ..Default::default()
        };
        assert_eq!(channel.mention(), "<#81384788765712384>");
    }
}
