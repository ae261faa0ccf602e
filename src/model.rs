use smallvec::SmallVec;

pub type UserId = u64;
pub type PostId = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub credential: String,
    pub date_of_birth: String,
    pub affiliation: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author: UserId,
    pub content: String,
    pub likes: u64,
    pub comments: Vec<String>,
}

impl Post {
    pub fn new(id: PostId, author: UserId, content: impl Into<String>) -> Self {
        Self {
            id,
            author,
            content: content.into(),
            likes: 0,
            comments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub read: bool,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            read: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub sender: String,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub profile: Profile,
    pub friends: SmallVec<[UserId; 8]>,
    pub pending_requests: Vec<String>,
    pub posts: Vec<Post>,
    pub notifications: Vec<Notification>,
    pub conversations: Vec<Conversation>,
}

impl User {
    pub fn new(username: impl Into<String>, profile: Profile) -> Self {
        Self {
            username: username.into(),
            profile,
            friends: SmallVec::new(),
            pending_requests: Vec::new(),
            posts: Vec::new(),
            notifications: Vec::new(),
            conversations: Vec::new(),
        }
    }
}
