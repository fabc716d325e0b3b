//! The HTTP module which provides functions for performing requests to endpoints in Discord's API.
//!
//! Only the endpoints an interaction handler needs are covered: the interaction callback, the
//! interaction webhook, and the channel, user and role lookups used to hydrate options.
//!
//! All requests go through [`HttpExecutor::execute`]. [`Http`] implements it on top of `reqwest`;
//! tests and alternative transports can provide their own implementation and still get every
//! typed endpoint for free.
//!
//! Nothing here retries a request or tracks ratelimits.

mod client;
mod error;
mod multipart;
mod request;
mod routing;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
#[cfg(feature = "tracing_instrument")]
use tracing::instrument;

pub use reqwest::StatusCode;

pub use self::client::*;
pub use self::error::*;
pub use self::multipart::*;
pub use self::request::*;
pub use self::routing::*;
use crate::builder::{CallbackData, CreateInteractionResponse, EditInteractionResponse};
use crate::internal::prelude::*;
use crate::json;
use crate::model::prelude::*;

/// Lightweight method enum for use in [`Request`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum LightMethod {
    /// Indicates that a route is for the `DELETE` method only.
    Delete,
    /// Indicates that a route is for the `GET` method only.
    Get,
    /// Indicates that a route is for the `PATCH` method only.
    Patch,
    /// Indicates that a route is for the `POST` method only.
    Post,
    /// Indicates that a route is for the `PUT` method only.
    Put,
}

impl LightMethod {
    #[must_use]
    pub const fn reqwest_method(self) -> Method {
        match self {
            Self::Delete => Method::DELETE,
            Self::Get => Method::GET,
            Self::Patch => Method::PATCH,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
        }
    }
}

/// Sends requests to Discord on behalf of an interaction.
///
/// Implementors only provide [`Self::application_id`] and [`Self::execute`]; the typed endpoints
/// are built on top of them.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    /// The application the client acts as, if known.
    ///
    /// Used when an incoming interaction does not carry its own `application_id`.
    fn application_id(&self) -> Option<ApplicationId>;

    /// Performs a request and returns the raw response body of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::UnsuccessfulRequest`] on a non-2xx status, or another [`Error`] if
    /// the request could not be sent.
    async fn execute(&self, request: Request<'_>) -> Result<Bytes>;

    /// Sends the initial response to an interaction.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, token, response)))]
    async fn create_interaction_response(
        &self,
        interaction_id: InteractionId,
        token: &str,
        response: &CreateInteractionResponse,
    ) -> Result<()> {
        let body = json::to_vec(response)?;
        let route = Route::CreateInteractionResponse {
            interaction_id,
            token,
        };

        self.execute(Request::new(route, LightMethod::Post).body(Some(body))).await?;
        Ok(())
    }

    /// Creates a follow-up message for an interaction and returns it.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, token, data)))]
    async fn create_followup_message(
        &self,
        application_id: ApplicationId,
        token: &str,
        data: &CallbackData,
    ) -> Result<Message> {
        let body = json::to_vec(data)?;
        let route = Route::CreateFollowupMessage {
            application_id,
            token,
        };

        let bytes = self.execute(Request::new(route, LightMethod::Post).body(Some(body))).await?;
        json::decode_bytes(&bytes)
    }

    /// Edits a message sent on an interaction webhook. `None` addresses the initial response.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, token, edit)))]
    async fn edit_interaction_message(
        &self,
        application_id: ApplicationId,
        token: &str,
        message_id: Option<MessageId>,
        edit: EditInteractionResponse,
    ) -> Result<Message> {
        let route = Route::WebhookMessage {
            application_id,
            token,
            message_id,
        };

        let bytes = self.execute(edit.into_request(route)?).await?;
        json::decode_bytes(&bytes)
    }

    /// Deletes a message sent on an interaction webhook. `None` addresses the initial response.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, token)))]
    async fn delete_interaction_message(
        &self,
        application_id: ApplicationId,
        token: &str,
        message_id: Option<MessageId>,
    ) -> Result<()> {
        let route = Route::WebhookMessage {
            application_id,
            token,
            message_id,
        };

        self.execute(Request::new(route, LightMethod::Delete)).await?;
        Ok(())
    }

    /// Gets a channel by Id.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    async fn get_channel(&self, channel_id: ChannelId) -> Result<PartialChannel> {
        let route = Route::Channel {
            channel_id,
        };

        let bytes = self.execute(Request::new(route, LightMethod::Get)).await?;
        json::decode_bytes(&bytes)
    }

    /// Gets a user by Id.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    async fn get_user(&self, user_id: UserId) -> Result<User> {
        let route = Route::User {
            user_id,
        };

        let bytes = self.execute(Request::new(route, LightMethod::Get)).await?;
        json::decode_bytes(&bytes)
    }

    /// Gets all roles of a guild.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    async fn get_guild_roles(&self, guild_id: GuildId) -> Result<Vec<Role>> {
        let route = Route::GuildRoles {
            guild_id,
        };

        let bytes = self.execute(Request::new(route, LightMethod::Get)).await?;
        let mut roles: Vec<Role> = json::decode_bytes(&bytes)?;
        for role in &mut roles {
            role.guild_id = Some(guild_id);
        }

        Ok(roles)
    }
}
