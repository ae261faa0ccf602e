//! Palaver is an in-memory social network engine.
//!
//! Users register into a central directory, link up through friend
//! requests, publish posts that collect likes and comments, exchange
//! direct messages, and receive an ordered notification stream for every
//! interaction that targets them.
//!
//! [`SocialNetwork`] is the single-writer core; all operations are
//! synchronous, bounded, and in-memory. [`ConcurrentSocialNetwork`] wraps
//! it behind a writer-preferring lock for shared use across threads.
//!
//! # Example
//!
//! ```rust
//! use palaver::{Profile, SocialNetwork};
//!
//! let mut net = SocialNetwork::new();
//! let alice = net.register("alice", Profile::default())?;
//! let bob = net.register("bob", Profile::default())?;
//!
//! net.send_friend_request(alice, "bob")?;
//! net.accept_friend_request(bob, "alice")?;
//!
//! let post = net.publish(alice, "hello")?;
//! net.like(post, bob)?;
//! assert_eq!(net.posts_of(alice)?[0].likes, 1);
//! # Ok::<(), palaver::SocialError>(())
//! ```

pub mod error;
pub mod logging;
pub mod model;
pub mod net;

pub use error::{Result, SocialError};
pub use model::{Conversation, Notification, Post, PostId, Profile, UserId};
pub use net::{Config, ConcurrentSocialNetwork, NetworkMetrics, SocialNetwork};
