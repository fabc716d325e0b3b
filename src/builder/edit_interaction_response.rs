use super::{CreateAttachment, CreateEmbed, MessageContent};
use crate::http::{LightMethod, Multipart, Request, Route};
use crate::internal::prelude::*;
use crate::json;

/// A builder to edit the initial response to an interaction, or a follow-up message.
///
/// Plain text, a single embed, or a list of embeds convert into this builder directly, so
/// [`Interaction::follow_up`] accepts any of them.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#edit-original-interaction-response)
///
/// [`Interaction::follow_up`]: crate::model::application::Interaction::follow_up
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[must_use]
pub struct EditInteractionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    embeds: Option<Vec<CreateEmbed>>,
    #[serde(skip)]
    attachment: Option<CreateAttachment>,
}

/// The `payload_json` part sent next to an uploaded file. Both keys are always present.
#[derive(Serialize)]
struct PayloadJson {
    embeds: Vec<CreateEmbed>,
    content: Option<String>,
}

impl EditInteractionResponse {
    /// Equivalent to [`Self::default`].
    pub fn new() -> Self {
        Self::default()
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

    /// Sets the embeds for the message, replacing any set before.
    pub fn embeds(mut self, embeds: Vec<CreateEmbed>) -> Self {
        self.embeds = Some(embeds);
        self
    }

    /// Uploads a file with the message. The request is then sent as `multipart/form-data`.
    pub fn attachment(mut self, attachment: CreateAttachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Builds the `PATCH` request for the message at `route`.
    ///
    /// With an attachment the body is multipart: the file goes in the `file` part and, if any
    /// content or embeds were set, a `payload_json` part carries them. Otherwise the body is the
    /// JSON form of this builder.
    pub(crate) fn into_request(mut self, route: Route<'_>) -> Result<Request<'_>> {
        let request = Request::new(route, LightMethod::Patch);

        let Some(file) = self.attachment.take() else {
            return Ok(request.body(Some(json::to_vec(&self)?)));
        };

        let payload_json = if self.content.is_some() || self.embeds.is_some() {
            Some(json::to_value(PayloadJson {
                embeds: self.embeds.unwrap_or_default(),
                content: self.content,
            })?)
        } else {
            None
        };

        Ok(request.multipart(Some(Multipart {
            files: vec![file],
            fields: Vec::new(),
            payload_json,
        })))
    }
}

impl From<&str> for EditInteractionResponse {
    fn from(content: &str) -> Self {
        Self::new().content(content)
    }
}

impl From<String> for EditInteractionResponse {
    fn from(content: String) -> Self {
        Self::new().content(content)
    }
}

impl From<&String> for EditInteractionResponse {
    fn from(content: &String) -> Self {
        Self::new().content(content.as_str())
    }
}

impl From<CreateEmbed> for EditInteractionResponse {
    fn from(embed: CreateEmbed) -> Self {
        Self::new().embeds(vec![embed])
    }
}

impl From<Vec<CreateEmbed>> for EditInteractionResponse {
    fn from(embeds: Vec<CreateEmbed>) -> Self {
        Self::new().embeds(embeds)
    }
}

impl From<CreateAttachment> for EditInteractionResponse {
    fn from(attachment: CreateAttachment) -> Self {
        Self::new().attachment(attachment)
    }
}

impl From<MessageContent> for EditInteractionResponse {
    fn from(message: MessageContent) -> Self {
        match message {
            MessageContent::Text(text) => text.into(),
            MessageContent::Embed(embed) => embed.into(),
            MessageContent::Embeds(embeds) => embeds.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_serializes, json};
    use crate::model::id::ApplicationId;

    fn route(token: &str) -> Route<'_> {
        Route::WebhookMessage {
            application_id: ApplicationId::new(1),
            token,
            message_id: None,
        }
    }

    fn body_json(request: &Request<'_>) -> Value {
        serde_json::from_slice(request.body_ref().unwrap()).unwrap()
    }

    #[test]
    fn conversions() {
        assert_serializes(&EditInteractionResponse::from("hi"), json!({"content": "hi"}));
        assert_serializes(
            &EditInteractionResponse::from(CreateEmbed::new()),
            json!({"embeds": [{"type": "rich"}]}),
        );
        assert_serializes(&EditInteractionResponse::from(Vec::new()), json!({"embeds": []}));
    }

    #[test]
    fn plain_edit_is_json() {
        let request = EditInteractionResponse::from("edited").into_request(route("tok")).unwrap();
        assert_eq!(request.method(), LightMethod::Patch);
        assert!(request.multipart_ref().is_none());
        assert_eq!(body_json(&request), json!({"content": "edited"}));
    }

    #[test]
    fn attachment_edit_is_multipart() {
        let edit = EditInteractionResponse::new()
            .content("look")
            .attachment(CreateAttachment::bytes(b"png".to_vec(), "a.png"));
        let request = edit.into_request(route("tok")).unwrap();

        assert!(request.body_ref().is_none());
        let multipart = request.multipart_ref().unwrap();
        assert_eq!(multipart.files.len(), 1);
        assert_eq!(multipart.files[0].filename, "a.png");
        assert_eq!(multipart.payload_json, Some(json!({"embeds": [], "content": "look"})));
    }

    #[test]
    fn bare_attachment_has_no_payload_json() {
        let edit = EditInteractionResponse::from(CreateAttachment::bytes(vec![0], "x.bin"));
        let request = edit.into_request(route("tok")).unwrap();
        assert_eq!(request.multipart_ref().unwrap().payload_json, None);
    }
}
