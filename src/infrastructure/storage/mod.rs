use crate::core::errors::StorageError;
use crate::core::models::{NewPost, NewUser, Post, User, UserChanges};
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence gateway for the `users` and `posts` tables.
///
/// Implementations own identity assignment (internal ids, uuids, post
/// timestamps) and must enforce email uniqueness atomically on write.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fails with [`StorageError::EmailTaken`] when the email is already used.
    async fn insert_user(&self, user: NewUser) -> Result<User, StorageError>;
    async fn get_user_by_uuid(&self, uuid: Uuid) -> Result<Option<User>, StorageError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;
    /// Returns `None` when no user has `uuid`.
    async fn update_user(&self, uuid: Uuid, changes: UserChanges) -> Result<Option<User>, StorageError>;
    /// Deletes the user and every post it owns. Returns `false` when absent.
    async fn delete_user(&self, uuid: Uuid) -> Result<bool, StorageError>;
    /// Returns `None` when the owning user does not exist.
    async fn insert_post(&self, post: NewPost) -> Result<Option<Post>, StorageError>;
    /// Every user and every post, read as one consistent snapshot: each
    /// returned post's owner is among the returned users.
    async fn users_and_posts(&self) -> Result<(Vec<User>, Vec<Post>), StorageError>;
}

pub mod in_memory;
