//! A collection of newtypes defining type-strong IDs.

id_u64! {
    /// An identifier for an Application.
    ApplicationId;
    /// An identifier for a Channel
    ChannelId;
    /// An identifier for an application command.
    CommandId;
    /// An identifier for a Guild
    GuildId;
    /// An identifier for an interaction.
    InteractionId;
    /// An identifier for a Message
    MessageId;
    /// An identifier for a Role
    RoleId;
    /// An identifier for a User
    UserId;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};

    #[test]
    fn snowflakes_are_strings_on_the_wire() {
        assert_json(&ChannelId::new(175928847299117063), json!("175928847299117063"));
    }

    #[test]
    fn snowflakes_accept_integers() {
        let id: UserId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(id, UserId::new(42));
        assert!(serde_json::from_value::<UserId>(json!("not a number")).is_err());
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("81384788765712384".parse::<RoleId>().unwrap().get(), 81384788765712384);
    }
}
