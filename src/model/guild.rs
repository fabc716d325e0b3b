//! Models relating to guilds and types that it owns.

use super::id::{GuildId, RoleId};
use super::user::User;

/// Information about a member of a guild.
///
/// [Discord docs](https://discord.com/developers/docs/resources/guild#guild-member-object).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Member {
    /// Attached User struct. Interaction payloads always carry it.
    #[serde(default)]
    pub user: Option<User>,
    /// The member's nickname, if present.
    #[serde(default)]
    pub nick: Option<String>,
    /// Vector of Ids of [`Role`]s given to the member.
    #[serde(default)]
    pub roles: Vec<RoleId>,
    /// The total permissions of the member in the channel the interaction was sent from, as a
    /// decimal string.
    #[serde(default)]
    pub permissions: Option<String>,
}

impl Member {
    /// Returns the nickname if set, falling back to the user's display name.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.nick.as_deref().or_else(|| self.user.as_ref().map(User::display_name))
    }
}

/// Information about a role within a guild.
///
/// [Discord docs](https://discord.com/developers/docs/topics/permissions#role-object).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Role {
    /// The Id of the role. Can be used to calculate the role's creation date.
    pub id: RoleId,
    /// The Id of the Guild the Role is in.
    ///
    /// Not sent by the API; filled in when the role is fetched for a guild.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub guild_id: Option<GuildId>,
    /// The name of the role.
    pub name: String,
    /// The colour of the role.
    #[serde(default, rename = "color")]
    pub colour: u32,
    /// Indicator of whether the role is pinned above lesser roles.
    #[serde(default)]
    pub hoist: bool,
    /// Indicator of whether the role can be mentioned, similar to mentioning a specific member
    /// or `@everyone`.
    #[serde(default)]
    pub mentionable: bool,
    /// The role's position in the position list.
    #[serde(default)]
    pub position: u16,
    /// The permission bitset of the role, as a decimal string.
    #[serde(default)]
    pub permissions: String,
}

impl Role {
    /// Returns a string formatted to mention the role in a message.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.id)
    }
}
