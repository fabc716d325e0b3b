//! Lookup of the channels, roles and users that reference-typed options point at.
//!
//! [`Interaction::parse_options`] checks [`EntityResolver`]'s cached accessors first and only
//! fetches over the network on a miss.
//!
//! [`Interaction::parse_options`]: crate::model::application::Interaction::parse_options

#[cfg(feature = "cache")]
use std::sync::Arc;

use async_trait::async_trait;
#[cfg(feature = "cache")]
use bytes::Bytes;
use tracing::trace;

#[cfg(feature = "cache")]
use crate::cache::Cache;
#[cfg(feature = "cache")]
use crate::http::Request;
use crate::http::{Http, HttpExecutor};
use crate::internal::prelude::*;
use crate::model::prelude::*;

/// Resolves entity ids found in option values into the entities themselves.
#[async_trait]
pub trait EntityResolver: Send + Sync {
    /// Returns the channel from a local cache, if there is one.
    fn cached_channel(&self, _channel_id: ChannelId) -> Option<PartialChannel> {
        None
    }

    /// Returns the role from a local cache, if there is one.
    fn cached_role(&self, _guild_id: GuildId, _role_id: RoleId) -> Option<Role> {
        None
    }

    /// Returns the user from a local cache, if there is one.
    fn cached_user(&self, _user_id: UserId) -> Option<User> {
        None
    }

    /// Fetches a channel.
    async fn fetch_channel(&self, channel_id: ChannelId) -> Result<PartialChannel>;

    /// Fetches a role of the given guild.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::RoleNotFound`] if the guild has no such role.
    async fn fetch_role(&self, guild_id: GuildId, role_id: RoleId) -> Result<Role>;

    /// Fetches a user.
    async fn fetch_user(&self, user_id: UserId) -> Result<User>;
}

async fn fetch_role_via(http: &impl HttpExecutor, guild_id: GuildId, role_id: RoleId) -> Result<Role> {
    let roles = http.get_guild_roles(guild_id).await?;
    trace!("Fetched {} roles of guild {}", roles.len(), guild_id);

    roles
        .into_iter()
        .find(|role| role.id == role_id)
        .ok_or(Error::Model(ModelError::RoleNotFound(role_id)))
}

#[async_trait]
impl EntityResolver for Http {
    async fn fetch_channel(&self, channel_id: ChannelId) -> Result<PartialChannel> {
        self.get_channel(channel_id).await
    }

    async fn fetch_role(&self, guild_id: GuildId, role_id: RoleId) -> Result<Role> {
        fetch_role_via(self, guild_id, role_id).await
    }

    async fn fetch_user(&self, user_id: UserId) -> Result<User> {
        self.get_user(user_id).await
    }
}

/// Pairs a [`Cache`] with an [`HttpExecutor`].
///
/// Lookups read the cache. Fetches go through the executor, and whatever they return is stored
/// in the cache. The pair is an [`HttpExecutor`] itself, so it can be handed to both arguments of
/// [`Interaction::parse_options`] and to the response methods.
///
/// [`Interaction::parse_options`]: crate::model::application::Interaction::parse_options
#[cfg(feature = "cache")]
#[derive(Clone, Debug)]
pub struct CacheHttp<H> {
    pub cache: Arc<Cache>,
    pub http: H,
}

#[cfg(feature = "cache")]
impl<H: HttpExecutor> CacheHttp<H> {
    pub fn new(cache: Arc<Cache>, http: H) -> Self {
        Self {
            cache,
            http,
        }
    }
}

#[cfg(feature = "cache")]
#[async_trait]
impl<H: HttpExecutor> EntityResolver for CacheHttp<H> {
    fn cached_channel(&self, channel_id: ChannelId) -> Option<PartialChannel> {
        self.cache.channel(channel_id)
    }

    fn cached_role(&self, guild_id: GuildId, role_id: RoleId) -> Option<Role> {
        self.cache.role(guild_id, role_id)
    }

    fn cached_user(&self, user_id: UserId) -> Option<User> {
        self.cache.user(user_id)
    }

    async fn fetch_channel(&self, channel_id: ChannelId) -> Result<PartialChannel> {
        let channel = self.http.get_channel(channel_id).await?;
        self.cache.insert_channel(channel.clone());
        Ok(channel)
    }

    async fn fetch_role(&self, guild_id: GuildId, role_id: RoleId) -> Result<Role> {
        // The endpoint returns every role of the guild, so all of them are cached.
        let roles = self.http.get_guild_roles(guild_id).await?;
        let mut found = None;
        for role in roles {
            if role.id == role_id {
                found = Some(role.clone());
            }
            self.cache.insert_role(guild_id, role);
        }

        found.ok_or(Error::Model(ModelError::RoleNotFound(role_id)))
    }

    async fn fetch_user(&self, user_id: UserId) -> Result<User> {
        let user = self.http.get_user(user_id).await?;
        self.cache.insert_user(user.clone());
        Ok(user)
    }
}

#[cfg(feature = "cache")]
#[async_trait]
impl<H: HttpExecutor> HttpExecutor for CacheHttp<H> {
    fn application_id(&self) -> Option<ApplicationId> {
        self.http.application_id()
    }

    async fn execute(&self, request: Request<'_>) -> Result<Bytes> {
        self.http.execute(request).await
    }
}

#[cfg(all(test, feature = "cache"))]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::json::{json, to_vec};

    /// Answers every request with a fixed body and counts the calls.
    struct Canned {
        body: Value,
        calls: Mutex<Vec<&'static str>>,
    }

    #[async_trait]
    impl HttpExecutor for Canned {
        fn application_id(&self) -> Option<ApplicationId> {
            None
        }

        async fn execute(&self, request: Request<'_>) -> Result<Bytes> {
            self.calls.lock().unwrap().push(request.route_ref().name());
            Ok(Bytes::from(to_vec(&self.body)?))
        }
    }

    fn resolver(body: Value) -> CacheHttp<Canned> {
        CacheHttp::new(Arc::new(Cache::new()), Canned {
            body,
            calls: Mutex::new(Vec::new()),
        })
    }

    #[tokio::test]
    async fn fetched_users_are_cached() {
        let resolver = resolver(json!({"id": "5", "username": "ferris"}));
        assert_eq!(resolver.cached_user(UserId::new(5)), None);

        let user = resolver.fetch_user(UserId::new(5)).await.unwrap();
        assert_eq!(user.username, "ferris");
        assert_eq!(resolver.cached_user(UserId::new(5)), Some(user));
        assert_eq!(*resolver.http.calls.lock().unwrap(), ["User"]);
    }

    #[tokio::test]
    async fn fetching_a_role_caches_the_whole_guild() {
        let resolver = resolver(json!([
            {"id": "1", "name": "admin"},
            {"id": "2", "name": "mod"},
        ]));
        let guild_id = GuildId::new(9);

        let role = resolver.fetch_role(guild_id, RoleId::new(2)).await.unwrap();
        assert_eq!(role.name, "mod");
        assert_eq!(role.guild_id, Some(guild_id));
        assert!(resolver.cached_role(guild_id, RoleId::new(1)).is_some());

        let err = resolver.fetch_role(guild_id, RoleId::new(3)).await.unwrap_err();
        assert!(matches!(err, Error::Model(ModelError::RoleNotFound(id)) if id == RoleId::new(3)));
    }
}
