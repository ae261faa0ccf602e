use tracing::debug;

use super::network::SocialNetwork;
use crate::error::{Result, SocialError};
use crate::model::{Post, PostId, UserId};

impl SocialNetwork {
    /// Publishes a post and notifies the owner's current friends.
    ///
    /// The fan-out uses the friend set as it exists at publish time;
    /// friends added later are never notified of this post.
    ///
    /// # Errors
    /// * `SocialError::InvalidArgument` - content exceeds the configured
    ///   ceiling
    pub fn publish(&mut self, owner: UserId, content: impl Into<String>) -> Result<PostId> {
        let content = content.into();
        let owner_name = self.user(owner)?.username.clone();
        if content.len() > self.config.max_post_len {
            return Err(SocialError::InvalidArgument(format!(
                "post content exceeds {} bytes",
                self.config.max_post_len
            )));
        }

        let id = self.post_ids.allocate();
        let friends: Vec<UserId> = self.user(owner)?.friends.to_vec();
        self.user_mut(owner)?.posts.push(Post::new(id, owner, content));
        for friend in friends {
            self.notify(friend, format!("Your friend {owner_name} added a new post!"))?;
        }

        self.metrics.posts_published += 1;
        debug!(owner = %owner_name, post_id = id, "post published");
        Ok(id)
    }

    /// Likes a post, wherever it lives, and notifies its owner.
    ///
    /// There is no per-liker dedup: liking the same post N times yields a
    /// counter of N, and owners may like their own posts.
    ///
    /// # Errors
    /// * `SocialError::PostNotFound` - no post has this id
    pub fn like(&mut self, post_id: PostId, liker: UserId) -> Result<()> {
        let liker_name = self.user(liker)?.username.clone();

        let post = self.find_post_mut(post_id)?;
        post.likes += 1;
        let owner = post.author;

        self.notify(owner, format!("{liker_name} liked your post (ID: {post_id})"))?;
        self.metrics.likes_recorded += 1;
        debug!(liker = %liker_name, post_id, "post liked");
        Ok(())
    }

    /// Appends a comment to a post and notifies its owner.
    ///
    /// Only the comment text is stored; the commenter's identity is not
    /// attached to the comment.
    ///
    /// # Errors
    /// * `SocialError::PostNotFound` - no post has this id
    /// * `SocialError::InvalidArgument` - text exceeds the configured
    ///   ceiling
    pub fn comment(
        &mut self,
        post_id: PostId,
        commenter: UserId,
        text: impl Into<String>,
    ) -> Result<()> {
        let text = text.into();
        if text.len() > self.config.max_comment_len {
            return Err(SocialError::InvalidArgument(format!(
                "comment exceeds {} bytes",
                self.config.max_comment_len
            )));
        }
        let commenter_name = self.user(commenter)?.username.clone();

        let post = self.find_post_mut(post_id)?;
        post.comments.push(text);
        let owner = post.author;

        self.notify(owner, format!("{commenter_name} commented on your post."))?;
        self.metrics.comments_recorded += 1;
        debug!(commenter = %commenter_name, post_id, "comment added");
        Ok(())
    }

    /// Deletes one of the caller's own posts and notifies their friends.
    ///
    /// The scan is scoped to the owner's collection, so an id belonging to
    /// another user reports `PostNotFound` rather than touching their
    /// post. Deletion is permanent; the id is never reused.
    ///
    /// # Errors
    /// * `SocialError::PostNotFound` - the owner has no post with this id
    pub fn delete_post(&mut self, owner: UserId, post_id: PostId) -> Result<()> {
        let owner_name = self.user(owner)?.username.clone();
        let friends: Vec<UserId> = self.user(owner)?.friends.to_vec();

        let posts = &mut self.user_mut(owner)?.posts;
        let position = posts
            .iter()
            .position(|post| post.id == post_id)
            .ok_or(SocialError::PostNotFound(post_id))?;
        posts.remove(position);

        // Every current friend is told, whether or not they ever saw the
        // post.
        for friend in friends {
            self.notify(
                friend,
                format!("{owner_name} deleted a post you interacted with."),
            )?;
        }

        self.metrics.posts_deleted += 1;
        debug!(owner = %owner_name, post_id, "post deleted");
        Ok(())
    }

    /// A single post, looked up globally by id.
    pub fn post(&self, post_id: PostId) -> Result<&Post> {
        self.users
            .iter()
            .flat_map(|user| user.posts.iter())
            .find(|post| post.id == post_id)
            .ok_or(SocialError::PostNotFound(post_id))
    }

    /// A user's own posts, in publish order.
    pub fn posts_of(&self, owner: UserId) -> Result<&[Post]> {
        Ok(self.user(owner)?.posts.as_slice())
    }

    /// Every post in the network with its author's username, users in
    /// registration order and posts in publish order.
    pub fn all_posts(&self) -> impl Iterator<Item = (&str, &Post)> {
        self.users.iter().flat_map(|user| {
            user.posts
                .iter()
                .map(move |post| (user.username.as_str(), post))
        })
    }

    pub(crate) fn find_post_mut(&mut self, post_id: PostId) -> Result<&mut Post> {
        self.users
            .iter_mut()
            .flat_map(|user| user.posts.iter_mut())
            .find(|post| post.id == post_id)
            .ok_or(SocialError::PostNotFound(post_id))
    }
}
