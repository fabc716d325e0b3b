use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::CommandOptionType;
use crate::internal::prelude::*;
use crate::model::channel::PartialChannel;
use crate::model::guild::Role;
use crate::model::user::User;

/// A parameter and its value as filled in by the invoking user.
///
/// An option either carries an input `value`, or denotes a sub-command (group), in which case it
/// carries another level of `options`.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-interaction-data-option-structure).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[non_exhaustive]
pub struct InteractionOption {
    /// The name of the parameter.
    pub name: String,
    /// The type of the parameter.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CommandOptionType>,
    /// The given value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<OptionValue>,
    /// The child options of a sub-command or sub-command group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<InteractionOption>>,
    /// Whether this is the option the user is currently typing in, for autocomplete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<bool>,
}

impl InteractionOption {
    /// Creates an option with a raw value and no children.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(OptionValue::Raw(value.into())),
            ..Self::default()
        }
    }

    /// Creates a sub-command (group) carrying the given child options and no value.
    pub fn group(name: impl Into<String>, options: Vec<InteractionOption>) -> Self {
        Self {
            name: name.into(),
            options: Some(options),
            ..Self::default()
        }
    }

    /// Sets the declared type of the option.
    #[must_use]
    pub fn kind(mut self, kind: CommandOptionType) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// The value of an [`InteractionOption`].
///
/// Values arrive as raw JSON scalars. Reference-typed values (channels, roles and users) hold a
/// snowflake until [`Interaction::parse_options`] swaps it for the entity it names. Hydrated
/// entities serialize back to their Id, so the wire format is preserved.
///
/// [`Interaction::parse_options`]: super::Interaction::parse_options
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum OptionValue {
    Raw(Value),
    Channel(PartialChannel),
    Role(Role),
    User(User),
}

impl OptionValue {
    /// If the value is a string, returns the associated str. Returns None otherwise.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Raw(v) => v.as_str(),
            _ => None,
        }
    }

    /// If the value is an integer, returns the associated i64. Returns None otherwise.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Raw(v) => v.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns the associated f64. Returns None otherwise.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Raw(v) => v.as_f64(),
            _ => None,
        }
    }

    /// If the value is a boolean, returns the associated bool. Returns None otherwise.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Raw(v) => v.as_bool(),
            _ => None,
        }
    }

    /// If the value is a hydrated channel, returns it. Returns None otherwise.
    #[must_use]
    pub fn as_channel(&self) -> Option<&PartialChannel> {
        match self {
            Self::Channel(c) => Some(c),
            _ => None,
        }
    }

    /// If the value is a hydrated role, returns it. Returns None otherwise.
    #[must_use]
    pub fn as_role(&self) -> Option<&Role> {
        match self {
            Self::Role(r) => Some(r),
            _ => None,
        }
    }

    /// If the value is a hydrated user, returns it. Returns None otherwise.
    #[must_use]
    pub fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(u) => Some(u),
            _ => None,
        }
    }

    /// Reads a raw string or integer value as a snowflake.
    pub(crate) fn as_snowflake(&self) -> Option<u64> {
        match self {
            Self::Raw(Value::String(s)) => s.parse().ok(),
            Self::Raw(v) => v.as_u64(),
            _ => None,
        }
    }
}

impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::Raw)
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        match self {
            Self::Raw(v) => v.serialize(serializer),
            Self::Channel(c) => c.id.serialize(serializer),
            Self::Role(r) => r.id.serialize(serializer),
            Self::User(u) => u.id.serialize(serializer),
        }
    }
}

/// The outcome of looking up an option by path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OptionLookup<'a> {
    /// Some segment of the path matched no option.
    NotFound,
    /// The whole path matched an option, but it carries no value.
    Unset,
    /// The whole path matched an option with a value.
    Found(&'a OptionValue),
}

impl<'a> OptionLookup<'a> {
    /// Returns the value, collapsing both misses into `None`.
    #[must_use]
    pub fn value(self) -> Option<&'a OptionValue> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound | Self::Unset => None,
        }
    }

    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }

    #[must_use]
    pub fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// A path of option names, one per level of sub-command nesting.
///
/// Converts from a space-separated string (`"moderation mute user"`) or from a sequence of
/// segments (`["moderation", "mute", "user"]`). Both forms address the same option. Runs of
/// spaces do not produce empty segments, so `"verbose "` is the path `["verbose"]`. Segments given
/// as a sequence are kept as they are, and an empty one matches no option.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionPath<'a>(Vec<&'a str>);

impl<'a> OptionPath<'a> {
    #[must_use]
    pub fn segments(&self) -> &[&'a str] {
        &self.0
    }
}

impl<'a> From<&'a str> for OptionPath<'a> {
    fn from(path: &'a str) -> Self {
        Self(path.split(' ').filter(|s| !s.is_empty()).collect())
    }
}

impl<'a> From<&'a String> for OptionPath<'a> {
    fn from(path: &'a String) -> Self {
        Self::from(path.as_str())
    }
}

impl<'a> From<&'a [&'a str]> for OptionPath<'a> {
    fn from(segments: &'a [&'a str]) -> Self {
        Self(segments.to_vec())
    }
}

impl<'a> From<Vec<&'a str>> for OptionPath<'a> {
    fn from(segments: Vec<&'a str>) -> Self {
        Self(segments)
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for OptionPath<'a> {
    fn from(segments: [&'a str; N]) -> Self {
        Self(segments.to_vec())
    }
}

impl<'a> From<&'a [String]> for OptionPath<'a> {
    fn from(segments: &'a [String]) -> Self {
        Self(segments.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for OptionPath<'a> {
    fn from(segments: &'a Vec<String>) -> Self {
        Self::from(segments.as_slice())
    }
}

/// Walks `options` one level per path segment, matching names case-insensitively.
///
/// Only a full-length match can be [`OptionLookup::Unset`]. A path that runs past a leaf, or that
/// starts with no options to search, is [`OptionLookup::NotFound`].
pub(crate) fn find_option<'a>(
    options: &'a [InteractionOption],
    path: &OptionPath<'_>,
) -> OptionLookup<'a> {
    let mut level = options;
    let mut segments = path.segments().iter();

    let Some(mut segment) = segments.next() else {
        return OptionLookup::NotFound;
    };

    loop {
        let needle = segment.to_lowercase();
        let Some(option) = level.iter().find(|o| o.name.to_lowercase() == needle) else {
            return OptionLookup::NotFound;
        };

        let Some(next) = segments.next() else {
            return option.value.as_ref().map_or(OptionLookup::Unset, OptionLookup::Found);
        };

        match option.options.as_deref() {
            Some(children) => {
                level = children;
                segment = next;
            },
            None => return OptionLookup::NotFound,
        }
    }
}

/// Exact-case variant of [`find_option`] returning the matched option itself.
pub(crate) fn find_option_exact<'a>(
    options: &'a [InteractionOption],
    path: &OptionPath<'_>,
) -> Option<&'a InteractionOption> {
    let (last, parents) = path.segments().split_last()?;

    let mut level = options;
    for segment in parents {
        level = level.iter().find(|o| o.name == *segment)?.options.as_deref()?;
    }

    level.iter().find(|o| o.name == *last)
}
