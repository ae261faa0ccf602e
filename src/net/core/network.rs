use rustc_hash::FxHashMap;

use crate::error::{Result, SocialError};
use crate::model::{User, UserId};
use crate::net::config::Config;
use crate::net::metrics::NetworkMetrics;
use crate::net::post_ids::PostIdAllocator;

/// The in-memory social network state.
///
/// Owns the user arena, the username index, and the global post-id
/// allocator. Friend references between users are arena indexes, never
/// direct references, so the relationship graph stays cycle-free under
/// single ownership.
///
/// All operations take `&self`/`&mut self` and complete synchronously;
/// wrap the network in [`ConcurrentSocialNetwork`] to share it across
/// threads.
///
/// [`ConcurrentSocialNetwork`]: crate::net::ConcurrentSocialNetwork
pub struct SocialNetwork {
    pub(crate) users: Vec<User>,
    pub(crate) username_index: FxHashMap<String, UserId>,
    pub(crate) post_ids: PostIdAllocator,
    pub(crate) config: Config,
    /// Operation counters, updated by every mutating call.
    pub metrics: NetworkMetrics,
}

impl std::fmt::Debug for SocialNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocialNetwork")
            .field("users", &self.users.len())
            .field("next_post_id", &self.post_ids.peek())
            .field("config", &self.config)
            .finish()
    }
}

impl SocialNetwork {
    /// Creates an empty network with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty network with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            users: Vec::with_capacity(config.initial_user_capacity),
            username_index: FxHashMap::default(),
            post_ids: PostIdAllocator::new(),
            config,
            metrics: NetworkMetrics::new(),
        }
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub(crate) fn user(&self, id: UserId) -> Result<&User> {
        self.users
            .get(id as usize)
            .ok_or_else(|| SocialError::InvalidArgument(format!("unknown user id {id}")))
    }

    pub(crate) fn user_mut(&mut self, id: UserId) -> Result<&mut User> {
        self.users
            .get_mut(id as usize)
            .ok_or_else(|| SocialError::InvalidArgument(format!("unknown user id {id}")))
    }

    pub(crate) fn resolve(&self, username: &str) -> Option<UserId> {
        self.username_index.get(username).copied()
    }
}

impl Default for SocialNetwork {
    fn default() -> Self {
        Self::new()
    }
}
