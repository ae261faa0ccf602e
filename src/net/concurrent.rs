//! Concurrent network access wrapper
//!
//! This module provides a thread-safe wrapper around [`SocialNetwork`]
//! for use by concurrent session handlers.
//!
//! # Example
//!
//! ```rust
//! use palaver::{ConcurrentSocialNetwork, Profile};
//!
//! let net = ConcurrentSocialNetwork::new();
//! let alice = net.register("alice", Profile::default())?;
//! let bob = net.register("bob", Profile::default())?;
//!
//! // Multiple threads can mutate the network concurrently.
//! std::thread::scope(|s| {
//!     let net = &net;
//!     s.spawn(move || net.publish(alice, "hello"));
//!     s.spawn(move || net.publish(bob, "hi"));
//! });
//! # Ok::<(), palaver::SocialError>(())
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::model::{Conversation, Notification, Post, PostId, Profile, UserId};
use crate::net::config::Config;
use crate::net::core::SocialNetwork;
use crate::net::metrics::NetworkMetrics;

/// A thread-safe, shareable social network.
///
/// `ConcurrentSocialNetwork` implements `Clone` and can be handed to any
/// number of session threads; clones share one underlying network.
///
/// # Locking
///
/// The whole network sits behind a single writer-preferring `RwLock`, so
/// pair-mutations such as [`accept_friend_request`] can never interleave
/// with another writer touching the same two users, and read-only listing
/// calls run concurrently. Operations that flip state as a side effect
/// ([`like`], [`drain_notifications`], [`authenticate`]'s login counter)
/// take the write lock. Listing methods return owned clones so no lock
/// guard outlives the call.
///
/// [`accept_friend_request`]: Self::accept_friend_request
/// [`like`]: Self::like
/// [`drain_notifications`]: Self::drain_notifications
/// [`authenticate`]: Self::authenticate
#[derive(Clone)]
pub struct ConcurrentSocialNetwork {
    inner: Arc<RwLock<SocialNetwork>>,
}

impl ConcurrentSocialNetwork {
    /// Creates a shared network with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a shared network with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SocialNetwork::with_config(config))),
        }
    }

    /// See [`SocialNetwork::register`].
    pub fn register(&self, username: impl Into<String>, profile: Profile) -> Result<UserId> {
        self.inner.write().register(username, profile)
    }

    /// See [`SocialNetwork::authenticate`].
    pub fn authenticate(&self, username: &str, credential: &str) -> Result<UserId> {
        self.inner.write().authenticate(username, credential)
    }

    /// Ends a session.
    ///
    /// Sessions are stateless on the network side: the session layer holds
    /// a `UserId` and drops it. Provided for interface symmetry.
    pub fn logout(&self, user: UserId) {
        debug!(user, "session closed");
    }

    /// See [`SocialNetwork::lookup`].
    pub fn lookup(&self, username: &str) -> Result<UserId> {
        self.inner.read().lookup(username)
    }

    /// See [`SocialNetwork::username`].
    pub fn username(&self, user: UserId) -> Result<String> {
        self.inner.read().username(user).map(str::to_string)
    }

    /// See [`SocialNetwork::profile`].
    pub fn profile(&self, user: UserId) -> Result<Profile> {
        self.inner.read().profile(user).cloned()
    }

    /// See [`SocialNetwork::user_count`].
    pub fn user_count(&self) -> usize {
        self.inner.read().user_count()
    }

    /// See [`SocialNetwork::send_friend_request`].
    pub fn send_friend_request(&self, from: UserId, to_username: &str) -> Result<()> {
        self.inner.write().send_friend_request(from, to_username)
    }

    /// See [`SocialNetwork::accept_friend_request`].
    pub fn accept_friend_request(&self, user: UserId, requester_name: &str) -> Result<()> {
        self.inner.write().accept_friend_request(user, requester_name)
    }

    /// See [`SocialNetwork::friends_of`].
    pub fn friends_of(&self, user: UserId) -> Result<Vec<UserId>> {
        self.inner.read().friends_of(user).map(|friends| friends.to_vec())
    }

    /// See [`SocialNetwork::pending_requests`].
    pub fn pending_requests(&self, user: UserId) -> Result<Vec<String>> {
        self.inner.read().pending_requests(user).map(|pending| pending.to_vec())
    }

    /// See [`SocialNetwork::publish`].
    pub fn publish(&self, owner: UserId, content: impl Into<String>) -> Result<PostId> {
        self.inner.write().publish(owner, content)
    }

    /// See [`SocialNetwork::like`].
    pub fn like(&self, post_id: PostId, liker: UserId) -> Result<()> {
        self.inner.write().like(post_id, liker)
    }

    /// See [`SocialNetwork::comment`].
    pub fn comment(&self, post_id: PostId, commenter: UserId, text: impl Into<String>) -> Result<()> {
        self.inner.write().comment(post_id, commenter, text)
    }

    /// See [`SocialNetwork::delete_post`].
    pub fn delete_post(&self, owner: UserId, post_id: PostId) -> Result<()> {
        self.inner.write().delete_post(owner, post_id)
    }

    /// See [`SocialNetwork::post`].
    pub fn post(&self, post_id: PostId) -> Result<Post> {
        self.inner.read().post(post_id).cloned()
    }

    /// See [`SocialNetwork::posts_of`].
    pub fn posts_of(&self, owner: UserId) -> Result<Vec<Post>> {
        self.inner.read().posts_of(owner).map(|posts| posts.to_vec())
    }

    /// See [`SocialNetwork::all_posts`].
    pub fn all_posts(&self) -> Vec<(String, Post)> {
        self.inner
            .read()
            .all_posts()
            .map(|(author, post)| (author.to_string(), post.clone()))
            .collect()
    }

    /// See [`SocialNetwork::drain_notifications`].
    pub fn drain_notifications(&self, user: UserId) -> Result<Vec<Notification>> {
        self.inner.write().drain_notifications(user)
    }

    /// See [`SocialNetwork::unread_notifications`].
    pub fn unread_notifications(&self, user: UserId) -> Result<usize> {
        self.inner.read().unread_notifications(user)
    }

    /// See [`SocialNetwork::send_message`].
    pub fn send_message(&self, from: UserId, to_username: &str, text: impl Into<String>) -> Result<()> {
        self.inner.write().send_message(from, to_username, text)
    }

    /// See [`SocialNetwork::inbox_of`].
    pub fn inbox_of(&self, user: UserId) -> Result<Vec<Conversation>> {
        self.inner.read().inbox_of(user).map(|inbox| inbox.to_vec())
    }

    /// A snapshot of the operation counters.
    pub fn metrics(&self) -> NetworkMetrics {
        self.inner.read().metrics.clone()
    }
}

impl Default for ConcurrentSocialNetwork {
    fn default() -> Self {
        Self::new()
    }
}
