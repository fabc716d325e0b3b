use std::borrow::Cow;

use reqwest::multipart::{Form, Part};

use crate::builder::CreateAttachment;
use crate::internal::prelude::*;
use crate::json;

/// Holder for multipart body. Contains files, multipart fields, and payload_json for creating
/// requests with attachments.
#[derive(Clone, Debug, PartialEq)]
pub struct Multipart {
    pub files: Vec<CreateAttachment>,
    /// Multipart text fields that are sent with the form data as individual fields. If a certain
    /// endpoint does not support passing JSON body via `payload_json`, this must be used instead.
    pub fields: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    /// JSON body that will be stringified and set as the form value as `payload_json`.
    pub payload_json: Option<Value>,
}

impl Multipart {
    pub(crate) fn build_form(self) -> Result<Form> {
        let mut multipart = Form::new();

        for (file_num, file) in self.files.into_iter().enumerate() {
            // The first file must be named `file` for endpoints that only take a single one.
            let part_name =
                if file_num == 0 { "file".to_string() } else { format!("file{file_num}") };

            let part = guess_mime_str(Part::bytes(file.data), &file.filename)?;
            multipart = multipart.part(part_name, part.file_name(file.filename));
        }

        for (name, value) in self.fields {
            multipart = multipart.text(name, value);
        }

        if let Some(payload_json) = self.payload_json {
            multipart = multipart.text("payload_json", json::to_string(&payload_json)?);
        }

        Ok(multipart)
    }
}

fn guess_mime_str(part: Part, filename: &str) -> Result<Part> {
    // reqwest only sets a mime type for `Part::file`, so it's guessed here the same way.
    // https://datatracker.ietf.org/doc/html/rfc7578#section-4.4
    let mime_type = mime_guess::from_path(filename).first_or_octet_stream();
    part.mime_str(mime_type.essence_str()).map_err(Into::into)
}
