use super::network::SocialNetwork;
use crate::error::Result;
use crate::model::{Notification, UserId};

impl SocialNetwork {
    /// Returns every notification in delivery order and marks them read.
    ///
    /// The returned entries carry the read state as of this call, so the
    /// session layer can render seen/unseen markers; the stored entries
    /// are all read afterwards. Notifications enqueued later start unread
    /// again. The channel itself only grows; entries are never removed.
    pub fn drain_notifications(&mut self, user: UserId) -> Result<Vec<Notification>> {
        let notifications = &mut self.user_mut(user)?.notifications;
        let snapshot = notifications.clone();
        for notification in notifications.iter_mut() {
            notification.read = true;
        }
        Ok(snapshot)
    }

    /// Number of notifications not yet seen through
    /// [`drain_notifications`](Self::drain_notifications).
    pub fn unread_notifications(&self, user: UserId) -> Result<usize> {
        Ok(self
            .user(user)?
            .notifications
            .iter()
            .filter(|notification| !notification.read)
            .count())
    }

    pub(crate) fn notify(&mut self, user: UserId, message: String) -> Result<()> {
        self.user_mut(user)?
            .notifications
            .push(Notification::new(message));
        self.metrics.notifications_delivered += 1;
        Ok(())
    }
}
