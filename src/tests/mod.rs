
use crate::core::errors::StorageError;
use crate::core::models::{NewPost, NewUser, Post, Role, User, UserChanges};
use crate::core::services::PostboardService;
use crate::infrastructure::storage::Storage;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use async_trait::async_trait;
use uuid::Uuid;

pub fn create_test_service() -> PostboardService<InMemoryStorage> {
    PostboardService::new(InMemoryStorage::new())
}

pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        role: Role::default(),
    }
}

/// Storage whose every call fails, standing in for a lost database connection.
pub struct UnavailableStorage;

fn unavailable() -> StorageError {
    StorageError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl Storage for UnavailableStorage {
    async fn insert_user(&self, _user: NewUser) -> Result<User, StorageError> {
        Err(unavailable())
    }

    async fn get_user_by_uuid(&self, _uuid: Uuid) -> Result<Option<User>, StorageError> {
        Err(unavailable())
    }

    async fn get_user_by_email(&self, _email: &str) -> Result<Option<User>, StorageError> {
        Err(unavailable())
    }

    async fn update_user(&self, _uuid: Uuid, _changes: UserChanges) -> Result<Option<User>, StorageError> {
        Err(unavailable())
    }

    async fn delete_user(&self, _uuid: Uuid) -> Result<bool, StorageError> {
        Err(unavailable())
    }

    async fn insert_post(&self, _post: NewPost) -> Result<Option<Post>, StorageError> {
        Err(unavailable())
    }

    async fn users_and_posts(&self) -> Result<(Vec<User>, Vec<Post>), StorageError> {
        Err(unavailable())
    }
}
