//! Slashcord is a thin Rust adapter over Discord's interaction (slash-command) API.
//!
//! It deserializes incoming interaction payloads into an [`Interaction`], looks up command
//! options by path, hydrates reference-typed options through an [`EntityResolver`], and sends the
//! initial response and any follow-ups through the interaction webhook endpoints.
//!
//! Everything the platform SDK is normally responsible for (gateway connection, rate limiting,
//! the full object model) stays outside of this crate. Outgoing requests go through the
//! [`HttpExecutor`] trait, which [`Http`] implements on top of `reqwest`.
//!
//! ```rust,no_run
//! use slashcord::builder::CreateEmbed;
//! use slashcord::http::HttpBuilder;
//! use slashcord::model::application::{Interaction, ReplyOptions};
//! use slashcord::model::id::ApplicationId;
//!
//! # async fn run(payload: &str) -> slashcord::Result<()> {
//! let http = HttpBuilder::new("Bot my-token").application_id(ApplicationId::new(1234)).build()?;
//! let mut interaction: Interaction = serde_json::from_str(payload)?;
//!
//! let who = interaction.option("greet user").value().and_then(|v| v.as_str()).unwrap_or("you");
//! let text = format!("Hello, {who}!");
//! interaction.reply(&http, text, ReplyOptions::default()).await?;
//! interaction.follow_up(&http, CreateEmbed::new().title("Greeted")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`EntityResolver`]: crate::resolver::EntityResolver
//! [`Http`]: crate::http::Http
//! [`HttpExecutor`]: crate::http::HttpExecutor
//! [`Interaction`]: crate::model::application::Interaction
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    unused,
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::non_ascii_literal,
    clippy::fallible_impl_from,
    clippy::let_underscore_must_use,
    clippy::format_push_string,
    clippy::pedantic
)]
#![allow(
    // Allowed as they are too pedantic
    clippy::module_name_repetitions,
    clippy::unreadable_literal,
    clippy::wildcard_imports,
    clippy::doc_markdown,
    clippy::missing_panics_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[macro_use]
extern crate serde;

#[macro_use]
mod internal;

pub mod builder;
#[cfg(feature = "cache")]
pub mod cache;
pub mod constants;
pub mod http;
pub mod json;
pub mod model;
pub mod prelude;
pub mod resolver;

mod error;

pub use crate::error::{Error, Result};
