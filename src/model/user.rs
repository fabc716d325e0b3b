//! User information-related models.

use super::id::UserId;

/// Information about a user.
///
/// [Discord docs](https://discord.com/developers/docs/resources/user#user-object).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[non_exhaustive]
pub struct User {
    /// The unique Id of the user. Can be used to calculate the account's creation date.
    pub id: UserId,
    /// The account's username. Changing username will trigger a discriminator change if the
    /// username+discriminator pair becomes non-unique.
    pub username: String,
    /// The account's display name, if it is set.
    #[serde(default)]
    pub global_name: Option<String>,
    /// The account's discriminator to differentiate the user from others with the same
    /// username. Migrated accounts report `"0"` or omit it.
    #[serde(default)]
    pub discriminator: Option<String>,
    /// Optional avatar hash.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Indicator of whether the user is a bot.
    #[serde(default)]
    pub bot: bool,
}

impl User {
    /// Returns the name shown for the user: the global name if set, the username otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }

    /// Returns a string formatted to mention the user in a message.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::json;

    #[test]
    fn display_name_prefers_global_name() {
        let mut user: User =
            serde_json::from_value(json!({"id": "7", "username": "kona"})).unwrap();
        assert_eq!(user.display_name(), "kona");
        assert_eq!(user.mention(), "<@7>");

        user.global_name = Some("Kona the Corgi".into());
        assert_eq!(user.display_name(), "Kona the Corgi");
    }
}
