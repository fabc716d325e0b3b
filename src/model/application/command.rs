use crate::model::id::CommandId;

enum_number! {
    /// The type of an [`CommandOption`].
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-option-type).
    #[non_exhaustive]
    pub enum CommandOptionType {
        SubCommand = 1,
        SubCommandGroup = 2,
        String = 3,
        Integer = 4,
        Boolean = 5,
        User = 6,
        Channel = 7,
        Role = 8,
        Mentionable = 9,
        Number = 10,
        Attachment = 11,
    }
}

impl CommandOptionType {
    /// Whether values of this type are snowflakes naming another entity, which
    /// [`Interaction::parse_options`] swaps for the entity itself.
    ///
    /// [`Interaction::parse_options`]: super::Interaction::parse_options
    #[must_use]
    pub fn is_reference(self) -> bool {
        matches!(self, Self::Channel | Self::Role | Self::User)
    }
}

/// The declared schema of an application command, as registered with Discord.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-object).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Command {
    /// The command Id. Absent until the command has been registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CommandId>,
    /// The command name.
    pub name: String,
    /// The command description.
    #[serde(default)]
    pub description: String,
    /// The parameters for the command.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

impl Command {
    /// Creates a command schema with the given name and description and no options.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    /// Adds a parameter to the command.
    #[must_use]
    pub fn add_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }
}

/// A parameter of a [`Command`], or a sub-command (group) with parameters of its own.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-option-structure).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[non_exhaustive]
pub struct CommandOption {
    /// The option type.
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    /// The option name.
    pub name: String,
    /// The option description.
    #[serde(default)]
    pub description: String,
    /// Whether the parameter is optional or required.
    #[serde(default)]
    pub required: bool,
    /// The nested options.
    ///
    /// **Note**: Only available for [`SubCommand`] or [`SubCommandGroup`].
    ///
    /// [`SubCommand`]: CommandOptionType::SubCommand
    /// [`SubCommandGroup`]: CommandOptionType::SubCommandGroup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

impl CommandOption {
    /// Creates an option of the given type.
    pub fn new(
        kind: CommandOptionType,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            required: false,
            options: Vec::new(),
        }
    }

    /// Sets whether the parameter must be filled in.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Adds a nested option. Only meaningful for sub-commands and sub-command groups.
    #[must_use]
    pub fn add_sub_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};

    #[test]
    fn option_types_are_numbers() {
        assert_json(&CommandOptionType::Channel, json!(7));
        assert_eq!(CommandOptionType::from_num(9), Some(CommandOptionType::Mentionable));
        assert_eq!(CommandOptionType::from_num(12), None);
        assert!(serde_json::from_value::<CommandOptionType>(json!(0)).is_err());
    }

    #[test]
    fn nested_schema() {
        let command = Command::new("moderation", "Moderation tools").add_option(
            CommandOption::new(CommandOptionType::SubCommand, "mute", "Mute a member")
                .add_sub_option(
                    CommandOption::new(CommandOptionType::User, "user", "Who to mute")
                        .required(true),
                ),
        );

        assert_json(
            &command,
            json!({
                "name": "moderation",
                "description": "Moderation tools",
                "options": [{
                    "type": 1,
                    "name": "mute",
                    "description": "Mute a member",
                    "required": false,
                    "options": [{
                        "type": 6,
                        "name": "user",
                        "description": "Who to mute",
                        "required": true,
                    }],
                }],
            }),
        );
    }
}
