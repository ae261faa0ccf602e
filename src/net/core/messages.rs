use tracing::debug;

use super::network::SocialNetwork;
use crate::error::{Result, SocialError};
use crate::model::{Conversation, UserId};

impl SocialNetwork {
    /// Delivers a direct message and notifies the recipient.
    ///
    /// The message is appended to the sender's conversation inside the
    /// recipient's inbox, creating the conversation on first contact.
    /// Messages are never edited or deleted.
    ///
    /// # Errors
    /// * `SocialError::UserNotFound` - the recipient username is unknown
    /// * `SocialError::InvalidArgument` - text exceeds the configured
    ///   ceiling
    pub fn send_message(
        &mut self,
        from: UserId,
        to_username: &str,
        text: impl Into<String>,
    ) -> Result<()> {
        let text = text.into();
        if text.len() > self.config.max_message_len {
            return Err(SocialError::InvalidArgument(format!(
                "message exceeds {} bytes",
                self.config.max_message_len
            )));
        }

        let from_name = self.user(from)?.username.clone();
        let to = self
            .resolve(to_username)
            .ok_or_else(|| SocialError::UserNotFound(to_username.to_string()))?;

        let inbox = &mut self.user_mut(to)?.conversations;
        match inbox
            .iter_mut()
            .find(|conversation| conversation.sender == from_name)
        {
            Some(conversation) => conversation.messages.push(text),
            None => inbox.push(Conversation {
                sender: from_name.clone(),
                messages: vec![text],
            }),
        }

        self.notify(to, format!("New message from {from_name}"))?;
        self.metrics.messages_sent += 1;
        debug!(from = %from_name, to = %to_username, "message sent");
        Ok(())
    }

    /// A user's inbox: one conversation per sender, ordered by first
    /// contact, with messages in send order.
    pub fn inbox_of(&self, user: UserId) -> Result<&[Conversation]> {
        Ok(self.user(user)?.conversations.as_slice())
    }
}
