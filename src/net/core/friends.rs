use tracing::{debug, warn};

use super::network::SocialNetwork;
use crate::error::{Result, SocialError};
use crate::model::UserId;

impl SocialNetwork {
    /// Sends a friend request from `from` to the named user.
    ///
    /// The request lands in the target's pending list and the target is
    /// notified. Resending stacks a second identical pending entry; the
    /// list is not deduplicated.
    ///
    /// # Errors
    /// * `SocialError::UserNotFound` - the target username is unknown
    pub fn send_friend_request(&mut self, from: UserId, to_username: &str) -> Result<()> {
        let from_name = self.user(from)?.username.clone();
        let to = self
            .resolve(to_username)
            .ok_or_else(|| SocialError::UserNotFound(to_username.to_string()))?;

        self.user_mut(to)?.pending_requests.push(from_name.clone());
        self.notify(to, format!("New friend request from {from_name}"))?;
        self.metrics.friend_requests_sent += 1;
        debug!(from = %from_name, to = %to_username, "friend request sent");
        Ok(())
    }

    /// Accepts a pending friend request and forms a mutual friendship.
    ///
    /// Removes the first pending entry matching `requester_name`, then
    /// writes both sides of the friendship as a single pair-update and
    /// notifies the requester. A request whose sender can no longer be
    /// resolved in the directory is consumed without forming a link.
    ///
    /// # Errors
    /// * `SocialError::RequestNotFound` - no pending request from that name
    pub fn accept_friend_request(&mut self, user: UserId, requester_name: &str) -> Result<()> {
        let accepter_name = self.user(user)?.username.clone();

        let pending = &mut self.user_mut(user)?.pending_requests;
        let position = pending
            .iter()
            .position(|name| name == requester_name)
            .ok_or_else(|| SocialError::RequestNotFound(requester_name.to_string()))?;
        pending.remove(position);

        let Some(requester) = self.resolve(requester_name) else {
            warn!(
                user = %accepter_name,
                requester = %requester_name,
                "pending request names an unknown user; friendship skipped"
            );
            return Ok(());
        };

        self.user_mut(user)?.friends.push(requester);
        self.user_mut(requester)?.friends.push(user);
        self.notify(
            requester,
            format!("{accepter_name} accepted your friend request!"),
        )?;
        self.metrics.friendships_formed += 1;
        debug!(user = %accepter_name, requester = %requester_name, "friendship formed");
        Ok(())
    }

    /// A user's confirmed friends, in the order the friendships formed.
    pub fn friends_of(&self, user: UserId) -> Result<&[UserId]> {
        Ok(self.user(user)?.friends.as_slice())
    }

    /// A user's pending inbound friend requests, in arrival order.
    pub fn pending_requests(&self, user: UserId) -> Result<&[String]> {
        Ok(self.user(user)?.pending_requests.as_slice())
    }
}
