#![allow(unused_imports)]

use slashcord::prelude::{
    CreateAttachment,
    CreateEmbed,
    EditInteractionResponse,
    EntityResolver,
    Http,
    HttpBuilder,
    HttpError,
    HttpExecutor,
    Interaction,
    ModelError,
    OptionLookup,
    ReplyOptions,
    SlashcordError,
};

#[test]
fn prelude_error_is_the_crate_error() {
    let error: SlashcordError = ModelError::AlreadyResponded.into();
    assert_eq!(error.to_string(), "Can only execute the callback once.");
}
