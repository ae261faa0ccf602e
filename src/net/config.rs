#[derive(Debug, Clone)]
pub struct Config {
    pub max_post_len: usize,
    pub max_comment_len: usize,
    pub max_message_len: usize,
    pub initial_user_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_post_len: usize::MAX,
            max_comment_len: usize::MAX,
            max_message_len: usize::MAX,
            initial_user_capacity: 16,
        }
    }
}

impl Config {
    pub fn strict() -> Self {
        Self {
            max_post_len: 4096,
            max_comment_len: 1024,
            max_message_len: 8192,
            initial_user_capacity: 16,
        }
    }
}
