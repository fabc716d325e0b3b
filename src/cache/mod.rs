//! A cache of the entities interaction options refer to.
//!
//! The cache is filled by [`CacheHttp`] whenever it fetches a channel, role or user, and can be
//! seeded by hand from gateway events or resolved interaction data.
//!
//! All maps are concurrent, so one cache can be shared between every interaction being handled
//! behind an [`Arc`].
//!
//! [`Arc`]: std::sync::Arc
//! [`CacheHttp`]: crate::resolver::CacheHttp

use dashmap::DashMap;
use tracing::trace;

use crate::model::prelude::*;

#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Cache {
    /// A map of channels, keyed by their Id.
    pub(crate) channels: DashMap<ChannelId, PartialChannel>,
    /// A map of roles. Role Ids are unique across guilds; every stored role has its `guild_id`
    /// set.
    pub(crate) roles: DashMap<RoleId, Role>,
    /// A map of users, keyed by their Id.
    pub(crate) users: DashMap<UserId, User>,
}

impl Cache {
    /// Creates a new, empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a clone of a channel from the cache.
    #[must_use]
    pub fn channel(&self, channel_id: ChannelId) -> Option<PartialChannel> {
        self.channels.get(&channel_id).map(|c| c.clone())
    }

    /// Retrieves a clone of a role, if it belongs to the given guild.
    #[must_use]
    pub fn role(&self, guild_id: GuildId, role_id: RoleId) -> Option<Role> {
        self.roles.get(&role_id).filter(|r| r.guild_id == Some(guild_id)).map(|r| r.clone())
    }

    /// Retrieves a clone of a user from the cache.
    #[must_use]
    pub fn user(&self, user_id: UserId) -> Option<User> {
        self.users.get(&user_id).map(|u| u.clone())
    }

    /// Inserts a channel, returning the one it replaced.
    pub fn insert_channel(&self, channel: PartialChannel) -> Option<PartialChannel> {
        trace!("Caching channel {}", channel.id);
        self.channels.insert(channel.id, channel)
    }

    /// Inserts a role of the given guild, returning the one it replaced.
    pub fn insert_role(&self, guild_id: GuildId, mut role: Role) -> Option<Role> {
        trace!("Caching role {} of guild {}", role.id, guild_id);
        role.guild_id = Some(guild_id);
        self.roles.insert(role.id, role)
    }

    /// Inserts a user, returning the one it replaced.
    pub fn insert_user(&self, user: User) -> Option<User> {
        trace!("Caching user {}", user.id);
        self.users.insert(user.id, user)
    }

    /// Returns the number of cached channels.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Returns the number of cached roles.
    #[must_use]
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Returns the number of cached users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Empties every map.
    pub fn clear(&self) {
        self.channels.clear();
        self.roles.clear();
        self.users.clear();
    }
}
