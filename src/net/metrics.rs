#[derive(Debug, Clone, Default)]
pub struct NetworkMetrics {
    pub registrations: u64,
    pub logins: u64,
    pub friend_requests_sent: u64,
    pub friendships_formed: u64,
    pub posts_published: u64,
    pub posts_deleted: u64,
    pub likes_recorded: u64,
    pub comments_recorded: u64,
    pub messages_sent: u64,
    pub notifications_delivered: u64,
}

impl NetworkMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interactions(&self) -> u64 {
        self.likes_recorded + self.comments_recorded + self.messages_sent
    }

    pub fn notifications_per_interaction(&self) -> f64 {
        let interactions = self.interactions();
        if interactions == 0 {
            0.0
        } else {
            self.notifications_delivered as f64 / interactions as f64
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
