//! A set of constants used by the library.

/// The base URI for the API.
pub const API_BASE: &str = "https://discord.com/api/v10";

/// The prefix of every API URL, which a configured proxy replaces.
pub const DISCORD_ORIGIN: &str = "https://discord.com/";

/// The [UserAgent] sent along with every request.
///
/// [UserAgent]: ::reqwest::header::USER_AGENT
pub const USER_AGENT: &str = concat!(
    "DiscordBot (slashcord, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// The path segment addressing the initial response of an interaction on its webhook.
pub const ORIGINAL_MESSAGE: &str = "@original";

