use crate::builder::EditInteractionResponse;
use crate::http::HttpExecutor;
use crate::internal::prelude::*;
use crate::model::channel::Message;
use crate::model::id::{ApplicationId, MessageId};
use crate::model::ModelError;

/// A handle to a message sent through an interaction's webhook.
///
/// Returned by [`Interaction::reply`], which points it at the initial response, and by
/// [`Interaction::send`], which points it at the follow-up it created.
///
/// [`Interaction::reply`]: super::Interaction::reply
/// [`Interaction::send`]: super::Interaction::send
#[derive(Clone, Debug)]
pub struct InteractionMessage {
    application_id: Option<ApplicationId>,
    token: SecretString,
    message_id: Option<MessageId>,
}

impl InteractionMessage {
    pub(crate) fn new(
        application_id: Option<ApplicationId>,
        token: SecretString,
        message_id: Option<MessageId>,
    ) -> Self {
        Self {
            application_id,
            token,
            message_id,
        }
    }

    /// The application the message was sent as, if it was known when the handle was created.
    ///
    /// A reply sent without one leaves this unset, and [`Self::edit`] or [`Self::delete`] then
    /// ask the executor.
    #[must_use]
    pub fn application_id(&self) -> Option<ApplicationId> {
        self.application_id
    }

    /// The Id of the message, or `None` for the initial response, whose Id is not returned by
    /// the callback endpoint.
    #[must_use]
    pub fn id(&self) -> Option<MessageId> {
        self.message_id
    }

    /// Whether the handle points at the initial response.
    #[must_use]
    pub fn is_original(&self) -> bool {
        self.message_id.is_none()
    }

    /// Edits the message, using the same body rules as [`Interaction::follow_up`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoApplicationId`] if neither the handle nor `http` knows the
    /// application Id, an [`Error::Http`] if the API returns an error, or an [`Error::Json`] if
    /// the edited message cannot be deserialized.
    ///
    /// [`Interaction::follow_up`]: super::Interaction::follow_up
    pub async fn edit(
        &self,
        http: &impl HttpExecutor,
        content: impl Into<EditInteractionResponse>,
    ) -> Result<Message> {
        let application_id = self.resolve_application_id(http)?;
        let edit = content.into();
        http.edit_interaction_message(
            application_id,
            self.token.expose_secret(),
            self.message_id,
            edit,
        )
        .await
    }

    /// Deletes the message.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoApplicationId`] if neither the handle nor `http` knows the
    /// application Id, or an [`Error::Http`] if the API returns an error.
    pub async fn delete(&self, http: &impl HttpExecutor) -> Result<()> {
        let application_id = self.resolve_application_id(http)?;
        http.delete_interaction_message(
            application_id,
            self.token.expose_secret(),
            self.message_id,
        )
        .await
    }

    fn resolve_application_id(&self, http: &impl HttpExecutor) -> Result<ApplicationId> {
        self.application_id
            .or_else(|| http.application_id())
            .ok_or(Error::Model(ModelError::NoApplicationId))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bytes::Bytes;

    use super::*;
    use crate::http::{LightMethod, Request};
    use crate::json::{json, to_vec};

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(LightMethod, String)>>,
    }

    #[async_trait]
    impl HttpExecutor for Recorder {
        fn application_id(&self) -> Option<ApplicationId> {
            None
        }

        async fn execute(&self, request: Request<'_>) -> Result<Bytes> {
            let path = request.route_ref().path().into_owned();
            self.calls.lock().unwrap().push((request.method(), path));
            match request.method() {
                LightMethod::Delete => Ok(Bytes::new()),
                _ => Ok(Bytes::from(to_vec(&json!({"id": "12", "content": "edited"}))?)),
            }
        }
    }

    fn handle(message_id: Option<MessageId>) -> InteractionMessage {
        InteractionMessage::new(Some(ApplicationId::new(3)), SecretString::new("tok".into()), message_id)
    }

    #[tokio::test]
    async fn edit_targets_the_original_response() {
        let http = Recorder::default();
        let original = handle(None);
        assert!(original.is_original());

        let message = original.edit(&http, "edited").await.unwrap();
        assert_eq!(message.content, "edited");
        assert_eq!(*http.calls.lock().unwrap(), [(
            LightMethod::Patch,
            "https://discord.com/api/v10/webhooks/3/tok/messages/@original".to_owned()
        )]);
    }

    #[tokio::test]
    async fn delete_targets_the_follow_up() {
        let http = Recorder::default();
        let followup = handle(Some(MessageId::new(12)));
        assert!(!followup.is_original());
        assert_eq!(followup.id(), Some(MessageId::new(12)));

        followup.delete(&http).await.unwrap();
        assert_eq!(*http.calls.lock().unwrap(), [(
            LightMethod::Delete,
            "https://discord.com/api/v10/webhooks/3/tok/messages/12".to_owned()
        )]);
    }
}
