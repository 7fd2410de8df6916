use crate::core::errors::PostboardError;
use crate::core::models::{NewPost, NewUser, Post, PostWithUser, User, UserChanges, UserWithPosts};
use crate::infrastructure::storage::Storage;
use std::collections::HashMap;
use tracing::{info, warn};
use uuid::Uuid;

pub struct PostboardService<S: Storage> {
    storage: S,
}

impl<S: Storage> PostboardService<S> {
    pub fn new(storage: S) -> Self {
        PostboardService { storage }
    }

    /// Unparseable uuids can never match a stored user.
    fn parse_user_uuid(raw: &str) -> Result<Uuid, PostboardError> {
        Uuid::parse_str(raw).map_err(|_| PostboardError::UserNotFound(raw.to_string()))
    }

    async fn find_user(&self, raw_uuid: &str) -> Result<User, PostboardError> {
        let uuid = Self::parse_user_uuid(raw_uuid)?;
        self.storage
            .get_user_by_uuid(uuid)
            .await?
            .ok_or_else(|| PostboardError::UserNotFound(raw_uuid.to_string()))
    }

    pub async fn create_user(&self, user: NewUser) -> Result<User, PostboardError> {
        if self.storage.get_user_by_email(&user.email).await?.is_some() {
            return Err(PostboardError::EmailAlreadyExists(user.email));
        }
        // The storage re-checks the email index, so a concurrent create that
        // slipped past the lookup above still fails here.
        let created = self.storage.insert_user(user).await?;
        info!(user_uuid = %created.uuid, role = %created.role, "user created");
        Ok(created)
    }

    pub async fn list_users(&self) -> Result<Vec<UserWithPosts>, PostboardError> {
        let (users, posts) = self.storage.users_and_posts().await?;
        let mut posts_by_owner: HashMap<i64, Vec<Post>> = HashMap::new();
        for post in posts {
            posts_by_owner.entry(post.user_id).or_default().push(post);
        }
        Ok(users
            .into_iter()
            .map(|user| {
                let posts = posts_by_owner.remove(&user.id).unwrap_or_default();
                UserWithPosts { user, posts }
            })
            .collect())
    }

    pub async fn get_user(&self, uuid: &str) -> Result<User, PostboardError> {
        self.find_user(uuid).await
    }

    /// Overwrites name, email and (when given) role. The email is not
    /// re-checked against other users here; the storage index rejects a
    /// collision.
    pub async fn update_user(&self, uuid: &str, changes: UserChanges) -> Result<User, PostboardError> {
        let existing = self.find_user(uuid).await?;
        let updated = self
            .storage
            .update_user(existing.uuid, changes)
            .await?
            .ok_or_else(|| PostboardError::UserNotFound(uuid.to_string()))?;
        info!(user_uuid = %updated.uuid, "user updated");
        Ok(updated)
    }

    /// Removes the user together with the posts it owns.
    pub async fn delete_user(&self, uuid: &str) -> Result<(), PostboardError> {
        let existing = self.find_user(uuid).await?;
        if !self.storage.delete_user(existing.uuid).await? {
            return Err(PostboardError::UserNotFound(uuid.to_string()));
        }
        info!(user_uuid = %existing.uuid, "user deleted");
        Ok(())
    }

    pub async fn create_post(&self, title: String, body: Option<String>, user_uuid: &str) -> Result<Post, PostboardError> {
        let owner = self.find_user(user_uuid).await?;
        let post = self
            .storage
            .insert_post(NewPost {
                title,
                body,
                user_uuid: owner.uuid,
            })
            .await?
            .ok_or_else(|| PostboardError::UserNotFound(user_uuid.to_string()))?;
        info!(post_uuid = %post.uuid, user_uuid = %owner.uuid, "post created");
        Ok(post)
    }

    /// Newest first, each post with its owner.
    pub async fn list_posts(&self) -> Result<Vec<PostWithUser>, PostboardError> {
        let (users, mut posts) = self.storage.users_and_posts().await?;
        let users: HashMap<i64, User> = users.into_iter().map(|user| (user.id, user)).collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts
            .into_iter()
            .filter_map(|post| match users.get(&post.user_id) {
                Some(user) => Some(PostWithUser {
                    user: user.clone(),
                    post,
                }),
                None => {
                    // Snapshot should always include the owner.
                    warn!(post_uuid = %post.uuid, "skipping post without owner");
                    None
                }
            })
            .collect())
    }
}
