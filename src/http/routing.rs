use std::borrow::Cow;
use std::fmt;

use crate::constants::ORIGINAL_MESSAGE;
use crate::model::id::*;

/// A macro for defining routes. Takes as input a list of route definitions, and generates a
/// definition for the `Route` enum and implements methods on it.
macro_rules! routes {
    ($lt:lifetime, {
        $(
            $name:ident { $($field_name:ident: $field_type:ty),* },
            $path:expr;
        )+
    }) => {
        #[derive(Clone, Copy)]
        #[non_exhaustive]
        pub enum Route<$lt> {
            $(
                $name { $($field_name: $field_type),* },
            )+
        }

        impl<$lt> Route<$lt> {
            /// The name of the endpoint, safe to log since it carries no parameters.
            #[must_use]
            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        Self::$name {..} => stringify!($name),
                    )+
                }
            }

            /// The absolute URL of the endpoint.
            #[must_use]
            pub fn path(self) -> Cow<'static, str> {
                match self {
                    $(
                        Self::$name { $($field_name),* } => $path.into(),
                    )+
                }
            }
        }
    };
}

// Each definition is the enum variant for an endpoint, followed by the url for that endpoint.
routes! ('a, {
    CreateInteractionResponse { interaction_id: InteractionId, token: &'a str },
    api!("/interactions/{}/{}/callback", interaction_id, token);

    CreateFollowupMessage { application_id: ApplicationId, token: &'a str },
    api!("/webhooks/{}/{}", application_id, token);

    WebhookMessage { application_id: ApplicationId, token: &'a str, message_id: Option<MessageId> },
    api!("/webhooks/{}/{}/messages/{}", application_id, token, message_segment(message_id));

    Channel { channel_id: ChannelId },
    api!("/channels/{}", channel_id);

    User { user_id: UserId },
    api!("/users/{}", user_id);

    GuildRoles { guild_id: GuildId },
    api!("/guilds/{}/roles", guild_id);
});

fn message_segment(message_id: Option<MessageId>) -> Cow<'static, str> {
    match message_id {
        Some(id) => Cow::Owned(id.to_string()),
        None => Cow::Borrowed(ORIGINAL_MESSAGE),
    }
}

// Routes carry interaction tokens, so only the endpoint name is printed.
impl fmt::Debug for Route<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Route").field(&self.name()).finish()
    }
}
