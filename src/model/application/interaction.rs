use futures::future::BoxFuture;
use futures::FutureExt;
#[cfg(feature = "tracing_instrument")]
use tracing::instrument;
use tracing::{debug, trace, warn};

use super::{
    find_option,
    find_option_exact,
    Command,
    CommandOption,
    CommandOptionType,
    InteractionMessage,
    InteractionOption,
    OptionLookup,
    OptionPath,
    OptionValue,
};
use crate::builder::{
    CallbackData,
    CreateInteractionResponse,
    EditInteractionResponse,
    MessageContent,
};
use crate::http::HttpExecutor;
use crate::internal::prelude::*;
use crate::model::channel::{Message, MessageFlags};
use crate::model::guild::Member;
use crate::model::id::*;
use crate::model::user::User;
use crate::model::ModelError;
use crate::resolver::EntityResolver;

enum_number! {
    /// The type of an [`Interaction`].
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-type).
    #[non_exhaustive]
    pub enum InteractionType {
        Ping = 1,
        ApplicationCommand = 2,
        MessageComponent = 3,
        Autocomplete = 4,
        ModalSubmit = 5,
    }
}

/// The command data payload of an [`Interaction`].
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-application-command-data-structure).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[non_exhaustive]
pub struct InteractionData {
    /// The invoked command's Id.
    pub id: CommandId,
    /// The name of the invoked command.
    pub name: String,
    /// The parameters and the given values, nested one level per sub-command (group).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<InteractionOption>>,
}

/// Which initial response, if any, has been sent for an [`Interaction`].
///
/// Discord accepts exactly one initial response, either a pong or a reply.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ResponseState {
    /// Nothing has been sent yet.
    #[default]
    Pending,
    /// A pong was sent.
    Ponged,
    /// A reply was sent, either immediately or deferred.
    Replied { deferred: bool },
}

impl ResponseState {
    /// Whether an initial response (a pong or a reply) was sent.
    #[must_use]
    pub fn is_replied(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Whether the initial response was a deferred reply.
    #[must_use]
    pub fn is_deferred(self) -> bool {
        matches!(self, Self::Replied {
            deferred: true
        })
    }
}

/// How [`Interaction::reply`] answers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReplyOptions {
    /// Acknowledge now and show a loading state, with the message edited in later through
    /// [`Interaction::follow_up`].
    pub deferred: bool,
    /// Only show the reply to the invoking user.
    pub ephemeral: bool,
}

/// An interaction received when a user invokes a slash command.
///
/// The token is kept secret and never printed by `Debug`.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-structure).
#[derive(Clone, Debug, Deserialize)]
#[non_exhaustive]
pub struct Interaction {
    /// Id of the interaction.
    pub id: InteractionId,
    /// Id of the application this interaction is for.
    #[serde(default)]
    pub application_id: Option<ApplicationId>,
    /// The type of interaction.
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// The data of the interaction which was triggered. Pings carry none.
    #[serde(default)]
    pub data: InteractionData,
    /// The guild Id this interaction was sent from, if there is one.
    #[serde(default)]
    pub guild_id: Option<GuildId>,
    /// The channel Id this interaction was sent from.
    #[serde(default)]
    pub channel_id: Option<ChannelId>,
    /// The `member` data for the invoking user. Only present in guilds.
    #[serde(default)]
    pub member: Option<Member>,
    /// The `user` object for the invoking user. Only present in direct messages.
    #[serde(default)]
    pub user: Option<User>,
    /// A continuation token for responding to the interaction.
    pub token: SecretString,
    #[serde(skip)]
    state: ResponseState,
}

impl Interaction {
    /// Which initial response has been sent so far.
    #[must_use]
    pub fn state(&self) -> ResponseState {
        self.state
    }

    /// The invoking user, taken from the member data inside guilds.
    #[must_use]
    pub fn invoker(&self) -> Option<&User> {
        self.member.as_ref().and_then(|m| m.user.as_ref()).or(self.user.as_ref())
    }

    /// Looks up an option value by path.
    ///
    /// The path is either a space-separated string such as `"moderation mute user"` or a
    /// sequence of segments. Every segment is matched against the names at its level
    /// case-insensitively. Repeated or trailing spaces in a string path are ignored, while an
    /// empty segment in a sequence never matches.
    ///
    /// A path that continues past a leaf, or any path on an interaction without options, is
    /// [`OptionLookup::NotFound`].
    ///
    /// ```rust
    /// # use slashcord::model::application::{Interaction, OptionLookup};
    /// # fn run(interaction: &Interaction) {
    /// match interaction.option("moderation mute user") {
    ///     OptionLookup::Found(user) => println!("muting {user:?}"),
    ///     OptionLookup::Unset => println!("no user given"),
    ///     OptionLookup::NotFound => println!("not a mute command"),
    /// }
    /// assert_eq!(interaction.option("a b"), interaction.option(["a", "b"]));
    /// # }
    /// ```
    pub fn option<'a>(&self, path: impl Into<OptionPath<'a>>) -> OptionLookup<'_> {
        match self.data.options.as_deref() {
            Some(options) => find_option(options, &path.into()),
            None => OptionLookup::NotFound,
        }
    }

    /// Looks up an option by path, matching names exactly.
    #[deprecated = "use `Interaction::option`, which matches names case-insensitively and tells \
                    unset options apart from missing ones"]
    pub fn get_option<'a>(&self, path: impl Into<OptionPath<'a>>) -> Option<&InteractionOption> {
        warn!("Interaction::get_option is deprecated, use Interaction::option instead");
        find_option_exact(self.data.options.as_deref()?, &path.into())
    }

    /// Replaces the values of channel, role and user options with the entities they name.
    ///
    /// Each option is matched by name against the `command` schema, and options the schema does
    /// not declare are left alone. Entities are taken from the resolver's cache when present and
    /// fetched otherwise. Nothing happens if either side has no options.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidOptionValue`] if a reference value is not a snowflake, and
    /// [`ModelError::NoGuild`] for a role option outside of a guild. Errors from the resolver are
    /// passed through.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, command, resolver)))]
    pub async fn parse_options(
        &mut self,
        command: &Command,
        resolver: &impl EntityResolver,
    ) -> Result<()> {
        let guild_id = self.guild_id;
        let Some(options) = self.data.options.as_deref_mut() else {
            return Ok(());
        };

        if command.options.is_empty() {
            return Ok(());
        }

        hydrate(options, &command.options, guild_id, resolver).await
    }

    /// Acknowledges a ping.
    ///
    /// The interaction counts as answered as soon as this is called, even if the request fails.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::AlreadyResponded`] if a pong or a reply was already sent, or an
    /// [`Error::Http`] if the API returns an error.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, http)))]
    pub async fn pong(&mut self, http: &impl HttpExecutor) -> Result<()> {
        if self.state.is_replied() {
            return Err(Error::Model(ModelError::AlreadyResponded));
        }
        self.state = ResponseState::Ponged;

        let response = CreateInteractionResponse::Pong;
        http.create_interaction_response(self.id, self.token.expose_secret(), &response).await
    }

    /// Sends a new follow-up message, regardless of whether the interaction was answered.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoApplicationId`] if neither the interaction nor `http` knows the
    /// application Id, an [`Error::Http`] if the API returns an error, or an [`Error::Json`] if
    /// the created message cannot be deserialized.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, http, message)))]
    pub async fn send(
        &self,
        http: &impl HttpExecutor,
        message: impl Into<MessageContent>,
    ) -> Result<InteractionMessage> {
        let application_id = self.application_id(http)?;
        let data = Self::parse_messages(message);

        let created = http
            .create_followup_message(application_id, self.token.expose_secret(), &data)
            .await?;

        Ok(InteractionMessage::new(Some(application_id), self.token.clone(), Some(created.id)))
    }

    /// Answers the interaction with a message.
    ///
    /// If the interaction was already answered, the message is sent as a follow-up through
    /// [`Self::send`] instead.
    ///
    /// The initial response only needs the interaction's own Id and token, so no application Id
    /// is required until the returned handle is used.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the API returns an error. Once the interaction was
    /// answered, the errors of [`Self::send`] apply.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, http, message)))]
    pub async fn reply(
        &mut self,
        http: &impl HttpExecutor,
        message: impl Into<MessageContent>,
        options: ReplyOptions,
    ) -> Result<InteractionMessage> {
        if self.state.is_replied() {
            debug!("Interaction {} was already answered, sending a follow-up instead", self.id);
            return self.send(http, message).await;
        }

        let ReplyOptions {
            deferred,
            ephemeral,
        } = options;
        self.state = ResponseState::Replied {
            deferred,
        };

        let mut data = Self::parse_messages(message);
        if ephemeral {
            data = data.flags(MessageFlags::EPHEMERAL);
        }

        let response = if deferred {
            CreateInteractionResponse::Defer(data)
        } else {
            CreateInteractionResponse::Message(data)
        };

        http.create_interaction_response(self.id, self.token.expose_secret(), &response).await?;

        let application_id = self.application_id.or_else(|| http.application_id());
        Ok(InteractionMessage::new(application_id, self.token.clone(), None))
    }

    /// Edits the initial response, filling in a deferred reply.
    ///
    /// Text, an embed, a list of embeds or a full [`EditInteractionResponse`] are accepted. With
    /// an attachment the request is sent as multipart, otherwise as JSON.
    ///
    /// # Errors
    ///
    /// Same as [`Self::send`].
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, http, content)))]
    pub async fn follow_up(
        &self,
        http: &impl HttpExecutor,
        content: impl Into<EditInteractionResponse>,
    ) -> Result<Message> {
        let application_id = self.application_id(http)?;
        let edit = content.into();

        http.edit_interaction_message(application_id, self.token.expose_secret(), None, edit).await
    }

    /// Normalizes text, an embed, or a list of embeds into the callback message shape.
    ///
    /// ```rust
    /// use slashcord::model::application::Interaction;
    ///
    /// let data = Interaction::parse_messages("hi");
    /// assert_eq!(
    ///     serde_json::to_value(&data).unwrap(),
    ///     serde_json::json!({"content": "hi", "embeds": []})
    /// );
    /// ```
    pub fn parse_messages(message: impl Into<MessageContent>) -> CallbackData {
        CallbackData::from(message.into())
    }

    fn application_id(&self, http: &impl HttpExecutor) -> Result<ApplicationId> {
        self.application_id
            .or_else(|| http.application_id())
            .ok_or(Error::Model(ModelError::NoApplicationId))
    }
}

fn hydrate<'a, R: EntityResolver>(
    options: &'a mut [InteractionOption],
    schema: &'a [CommandOption],
    guild_id: Option<GuildId>,
    resolver: &'a R,
) -> BoxFuture<'a, Result<()>> {
    async move {
        for option in options {
            let Some(declared) = schema.iter().find(|s| s.name == option.name) else {
                trace!("Option {} is not in the command schema", option.name);
                continue;
            };

            if declared.kind.is_reference() {
                if let Some(value @ OptionValue::Raw(_)) = &option.value {
                    let entity = resolve(value, &option.name, declared.kind, guild_id, resolver).await?;
                    option.value = Some(entity);
                }
            }

            if let Some(children) = option.options.as_deref_mut() {
                if !declared.options.is_empty() {
                    hydrate(children, &declared.options, guild_id, resolver).await?;
                }
            }
        }

        Ok(())
    }
    .boxed()
}

async fn resolve<R: EntityResolver>(
    value: &OptionValue,
    name: &str,
    kind: CommandOptionType,
    guild_id: Option<GuildId>,
    resolver: &R,
) -> Result<OptionValue> {
    let id = value.as_snowflake().ok_or_else(|| ModelError::InvalidOptionValue(name.to_string()))?;
    trace!("Resolving option {} ({:?}) to entity {}", name, kind, id);

    let entity = match kind {
        CommandOptionType::Channel => {
            let channel_id = ChannelId::new(id);
            let channel = match resolver.cached_channel(channel_id) {
                Some(channel) => channel,
                None => resolver.fetch_channel(channel_id).await?,
            };
            OptionValue::Channel(channel)
        },
        CommandOptionType::Role => {
            let guild_id = guild_id.ok_or(ModelError::NoGuild)?;
            let role_id = RoleId::new(id);
            let role = match resolver.cached_role(guild_id, role_id) {
                Some(role) => role,
                None => resolver.fetch_role(guild_id, role_id).await?,
            };
            OptionValue::Role(role)
        },
        CommandOptionType::User => {
            let user_id = UserId::new(id);
            let user = match resolver.cached_user(user_id) {
                Some(user) => user,
                None => resolver.fetch_user(user_id).await?,
            };
            OptionValue::User(user)
        },
        _ => value.clone(),
    };

    Ok(entity)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bytes::Bytes;
    use reqwest::{Method, StatusCode};

    use super::*;
    use crate::builder::{CreateAttachment, CreateEmbed};
    use crate::http::{ErrorResponse, HttpError, LightMethod, Multipart, Request, Route};
    use crate::json::{json, to_vec};
    use crate::model::channel::PartialChannel;
    use crate::model::guild::Role;

    #[derive(Clone, Debug, PartialEq)]
    struct Recorded {
        method: LightMethod,
        path: String,
        body: Option<Value>,
        multipart: Option<Multipart>,
    }

    /// Records every request and answers with canned entities echoing the requested Ids.
    #[derive(Default)]
    struct Recorder {
        application_id: Option<ApplicationId>,
        cached_channels: Vec<PartialChannel>,
        fail: bool,
        requests: Mutex<Vec<Recorded>>,
    }

    impl Recorder {
        fn requests(&self) -> Vec<Recorded> {
            self.requests.lock().unwrap().clone()
        }

        fn last(&self) -> Recorded {
            self.requests().pop().unwrap()
        }
    }

    #[async_trait]
    impl HttpExecutor for Recorder {
        fn application_id(&self) -> Option<ApplicationId> {
            self.application_id
        }

        async fn execute(&self, request: Request<'_>) -> Result<Bytes> {
            self.requests.lock().unwrap().push(Recorded {
                method: request.method(),
                path: request.route_ref().path().into_owned(),
                body: request.body_ref().map(|b| serde_json::from_slice(b).unwrap()),
                multipart: request.multipart_ref().cloned(),
            });

            if self.fail {
                return Err(Error::Http(HttpError::UnsuccessfulRequest(ErrorResponse {
                    status_code: StatusCode::INTERNAL_SERVER_ERROR,
                    url: request.route_ref().path().into_owned(),
                    method: Method::POST,
                    body: String::new(),
                })));
            }

            let body = match *request.route_ref() {
                Route::CreateFollowupMessage {
                    ..
                }
                | Route::WebhookMessage {
                    ..
                } => json!({"id": "99", "content": "ok"}),
                Route::Channel {
                    channel_id,
                } => json!({"id": channel_id.to_string(), "name": "fetched", "type": 0}),
                Route::User {
                    user_id,
                } => json!({"id": user_id.to_string(), "username": "fetched"}),
                Route::GuildRoles {
                    ..
                } => json!([{"id": "30", "name": "mod"}, {"id": "31", "name": "admin"}]),
                Route::CreateInteractionResponse {
                    ..
                } => return Ok(Bytes::new()),
            };

            Ok(Bytes::from(to_vec(&body)?))
        }
    }

    #[async_trait]
    impl EntityResolver for Recorder {
        fn cached_channel(&self, channel_id: ChannelId) -> Option<PartialChannel> {
            self.cached_channels.iter().find(|c| c.id == channel_id).cloned()
        }

        async fn fetch_channel(&self, channel_id: ChannelId) -> Result<PartialChannel> {
            self.get_channel(channel_id).await
        }

        async fn fetch_role(&self, guild_id: GuildId, role_id: RoleId) -> Result<Role> {
            self.get_guild_roles(guild_id)
                .await?
                .into_iter()
                .find(|r| r.id == role_id)
                .ok_or(Error::Model(ModelError::RoleNotFound(role_id)))
        }

        async fn fetch_user(&self, user_id: UserId) -> Result<User> {
            self.get_user(user_id).await
        }
    }

    fn command_interaction(options: Value) -> Interaction {
        serde_json::from_value(json!({
            "id": "100",
            "application_id": "200",
            "type": 2,
            "data": {"id": "300", "name": "mod", "options": options},
            "guild_id": "400",
            "channel_id": "500",
            "token": "tok",
        }))
        .unwrap()
    }

    fn simple() -> Interaction {
        command_interaction(json!([{"name": "text", "type": 3, "value": "hello"}]))
    }

    const CALLBACK: &str = "https://discord.com/api/v10/interactions/100/tok/callback";
    const WEBHOOK: &str = "https://discord.com/api/v10/webhooks/200/tok";
    const ORIGINAL: &str = "https://discord.com/api/v10/webhooks/200/tok/messages/@original";

    #[test]
    fn option_lookup() {
        let interaction = command_interaction(json!([
            {"name": "moderation", "type": 2, "options": [
                {"name": "mute", "type": 1, "options": [
                    {"name": "user", "type": 6, "value": "17"},
                    {"name": "reason", "type": 3},
                ]},
            ]},
        ]));

        let user = interaction.option("Moderation MUTE user").value().unwrap();
        assert_eq!(user.as_str(), Some("17"));
        assert!(interaction.option("moderation mute reason").is_unset());
        assert!(interaction.option("moderation ban user").is_not_found());
        assert!(interaction.option("moderation mute user extra").is_not_found());
        assert_eq!(interaction.option("moderation mute"), OptionLookup::Unset);
        assert_eq!(
            interaction.option("moderation mute user"),
            interaction.option(["moderation", "mute", "user"])
        );
    }

    #[test]
    fn option_lookup_without_options() {
        let interaction = command_interaction(Value::Null);
        assert!(interaction.option("anything").is_not_found());
    }

    #[test]
    #[allow(deprecated)]
    fn get_option_is_exact_case() {
        let interaction = simple();
        assert_eq!(interaction.get_option("text").unwrap().name, "text");
        assert!(interaction.get_option("TEXT").is_none());
    }

    #[test]
    fn deserializes_ping_and_hides_token() {
        let ping: Interaction =
            serde_json::from_value(json!({"id": "1", "type": 1, "token": "secret-token"})).unwrap();
        assert_eq!(ping.kind, InteractionType::Ping);
        assert_eq!(ping.data, InteractionData::default());
        assert_eq!(ping.state(), ResponseState::Pending);
        assert!(!format!("{ping:?}").contains("secret-token"));
    }

    #[tokio::test]
    async fn pong_only_once() {
        let http = Recorder::default();
        let mut interaction = simple();

        interaction.pong(&http).await.unwrap();
        let err = interaction.pong(&http).await.unwrap_err();
        assert!(matches!(err, Error::Model(ModelError::AlreadyResponded)));

        assert_eq!(http.requests(), vec![Recorded {
            method: LightMethod::Post,
            path: CALLBACK.to_string(),
            body: Some(json!({"type": 1})),
            multipart: None,
        }]);
        assert_eq!(interaction.state(), ResponseState::Ponged);
    }

    #[tokio::test]
    async fn failed_pong_still_counts() {
        let http = Recorder {
            fail: true,
            ..Default::default()
        };
        let mut interaction = simple();

        assert!(matches!(interaction.pong(&http).await, Err(Error::Http(_))));
        assert!(interaction.state().is_replied());
        assert!(matches!(
            interaction.pong(&http).await,
            Err(Error::Model(ModelError::AlreadyResponded))
        ));
    }

    #[tokio::test]
    async fn ephemeral_reply() {
        let http = Recorder::default();
        let mut interaction = simple();

        let options = ReplyOptions {
            ephemeral: true,
            ..Default::default()
        };
        let handle = interaction.reply(&http, "hi", options).await.unwrap();

        assert!(handle.is_original());
        assert_eq!(handle.application_id(), Some(ApplicationId::new(200)));
        assert_eq!(interaction.state(), ResponseState::Replied {
            deferred: false
        });
        assert_eq!(
            http.last().body,
            Some(json!({"type": 4, "data": {"content": "hi", "embeds": [], "flags": 64}}))
        );
    }

    #[tokio::test]
    async fn deferred_reply_then_follow_up() {
        let http = Recorder::default();
        let mut interaction = simple();

        let options = ReplyOptions {
            deferred: true,
            ..Default::default()
        };
        interaction.reply(&http, CreateEmbed::new(), options).await.unwrap();
        assert!(interaction.state().is_deferred());
        assert_eq!(http.last().body, Some(json!({"type": 5, "data": {"embeds": [{"type": "rich"}]}})));

        let message = interaction.follow_up(&http, "done").await.unwrap();
        assert_eq!(message.id, MessageId::new(99));
        assert_eq!(http.last(), Recorded {
            method: LightMethod::Patch,
            path: ORIGINAL.to_string(),
            body: Some(json!({"content": "done"})),
            multipart: None,
        });
    }

    #[tokio::test]
    async fn second_reply_is_a_send() {
        let http = Recorder::default();
        let mut interaction = simple();

        interaction.reply(&http, "first", ReplyOptions::default()).await.unwrap();
        let handle = interaction.reply(&http, "second", ReplyOptions::default()).await.unwrap();
        let replied = http.last();

        interaction.send(&http, "second").await.unwrap();
        let sent = http.last();

        assert_eq!(replied, sent);
        assert_eq!(sent.method, LightMethod::Post);
        assert_eq!(sent.path, WEBHOOK);
        assert_eq!(sent.body, Some(json!({"content": "second", "embeds": []})));
        assert_eq!(handle.id(), Some(MessageId::new(99)));
        assert_eq!(http.requests().len(), 3);
    }

    #[tokio::test]
    async fn reply_after_pong_is_a_send() {
        let http = Recorder::default();
        let mut interaction = simple();

        interaction.pong(&http).await.unwrap();
        interaction.reply(&http, vec![CreateEmbed::new()], ReplyOptions::default()).await.unwrap();

        assert_eq!(http.last().path, WEBHOOK);
        assert_eq!(interaction.state(), ResponseState::Ponged);
    }

    #[tokio::test]
    async fn send_ignores_reply_state() {
        let http = Recorder::default();
        let interaction = simple();

        let handle = interaction.send(&http, "hey").await.unwrap();
        assert_eq!(handle.id(), Some(MessageId::new(99)));
        assert_eq!(interaction.state(), ResponseState::Pending);
    }

    #[tokio::test]
    async fn follow_up_with_attachment_is_multipart() {
        let http = Recorder::default();
        let interaction = simple();

        let edit = EditInteractionResponse::new()
            .add_embed(CreateEmbed::new().title("chart"))
            .attachment(CreateAttachment::bytes(vec![1, 2, 3], "chart.png"));
        interaction.follow_up(&http, edit).await.unwrap();

        let request = http.last();
        assert_eq!(request.method, LightMethod::Patch);
        assert_eq!(request.path, ORIGINAL);
        assert_eq!(request.body, None);

        let multipart = request.multipart.unwrap();
        assert_eq!(multipart.files, vec![CreateAttachment::bytes(vec![1, 2, 3], "chart.png")]);
        assert_eq!(
            multipart.payload_json,
            Some(json!({"embeds": [{"type": "rich", "title": "chart"}], "content": null}))
        );
    }

    #[tokio::test]
    async fn application_id_falls_back_to_client() {
        let mut interaction = simple();
        interaction.application_id = None;

        let err = interaction.send(&Recorder::default(), "x").await.unwrap_err();
        assert!(matches!(err, Error::Model(ModelError::NoApplicationId)));

        let http = Recorder {
            application_id: Some(ApplicationId::new(7)),
            ..Default::default()
        };
        interaction.send(&http, "x").await.unwrap();
        assert_eq!(http.last().path, "https://discord.com/api/v10/webhooks/7/tok");
    }

    #[tokio::test]
    async fn reply_without_application_id() {
        let http = Recorder::default();
        let mut interaction = simple();
        interaction.application_id = None;

        let handle = interaction.reply(&http, "hi", ReplyOptions::default()).await.unwrap();
        assert_eq!(http.last(), Recorded {
            method: LightMethod::Post,
            path: CALLBACK.to_string(),
            body: Some(json!({"type": 4, "data": {"content": "hi", "embeds": []}})),
            multipart: None,
        });
        assert_eq!(interaction.state(), ResponseState::Replied {
            deferred: false
        });
        assert_eq!(handle.application_id(), None);

        let err = handle.edit(&http, "edited").await.unwrap_err();
        assert!(matches!(err, Error::Model(ModelError::NoApplicationId)));
        assert_eq!(http.requests().len(), 1);

        let http = Recorder {
            application_id: Some(ApplicationId::new(7)),
            ..Default::default()
        };
        handle.edit(&http, "edited").await.unwrap();
        assert_eq!(http.last().path, "https://discord.com/api/v10/webhooks/7/tok/messages/@original");
    }

    fn schema() -> Command {
        Command::new("mod", "moderation")
            .add_option(CommandOption::new(CommandOptionType::User, "target", "who"))
            .add_option(CommandOption::new(CommandOptionType::Channel, "where", "where"))
            .add_option(CommandOption::new(CommandOptionType::String, "reason", "why"))
            .add_option(
                CommandOption::new(CommandOptionType::SubCommand, "promote", "promote")
                    .add_sub_option(CommandOption::new(CommandOptionType::Role, "role", "to")),
            )
    }

    #[tokio::test]
    async fn parse_options_hydrates_references() {
        let resolver = Recorder {
            cached_channels: vec![PartialChannel {
                id: ChannelId::new(20),
                name: Some("cached".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let mut interaction = command_interaction(json!([
            {"name": "target", "type": 6, "value": "10"},
            {"name": "where", "type": 7, "value": "20"},
            {"name": "reason", "type": 3, "value": "30"},
            {"name": "unknown", "type": 6, "value": "40"},
            {"name": "promote", "type": 1, "options": [{"name": "role", "type": 8, "value": "31"}]},
        ]));

        interaction.parse_options(&schema(), &resolver).await.unwrap();

        let user = interaction.option("target").value().and_then(OptionValue::as_user).unwrap();
        assert_eq!((user.id, user.username.as_str()), (UserId::new(10), "fetched"));

        let channel = interaction.option("where").value().and_then(OptionValue::as_channel).unwrap();
        assert_eq!(channel.name.as_deref(), Some("cached"));

        let role = interaction.option("promote role").value().and_then(OptionValue::as_role).unwrap();
        assert_eq!((role.id, role.name.as_str()), (RoleId::new(31), "admin"));
        assert_eq!(role.guild_id, Some(GuildId::new(400)));

        assert_eq!(interaction.option("reason").value().unwrap().as_str(), Some("30"));
        assert_eq!(interaction.option("unknown").value().unwrap().as_str(), Some("40"));

        let paths: Vec<_> = resolver.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, [
            "https://discord.com/api/v10/users/10",
            "https://discord.com/api/v10/guilds/400/roles",
        ]);
    }

    #[tokio::test]
    async fn parse_options_rejects_bad_values() {
        let resolver = Recorder::default();

        let mut interaction = command_interaction(json!([{"name": "target", "type": 6, "value": "ferris"}]));
        let err = interaction.parse_options(&schema(), &resolver).await.unwrap_err();
        assert!(matches!(err, Error::Model(ModelError::InvalidOptionValue(ref name)) if name == "target"));

        let mut interaction = command_interaction(json!([
            {"name": "promote", "type": 1, "options": [{"name": "role", "type": 8, "value": "31"}]},
        ]));
        interaction.guild_id = None;
        let err = interaction.parse_options(&schema(), &resolver).await.unwrap_err();
        assert!(matches!(err, Error::Model(ModelError::NoGuild)));
    }

    #[tokio::test]
    async fn parse_options_without_options_is_a_no_op() {
        let resolver = Recorder::default();

        let mut interaction = command_interaction(Value::Null);
        interaction.parse_options(&schema(), &resolver).await.unwrap();

        let mut interaction = command_interaction(json!([{"name": "target", "value": "10"}]));
        interaction.parse_options(&Command::new("mod", "no options"), &resolver).await.unwrap();
        assert_eq!(interaction.option("target").value().unwrap().as_str(), Some("10"));

        assert!(resolver.requests().is_empty());
    }
}
