use crate::core::errors::StorageError;
use crate::core::models::{NewPost, NewUser, Post, User, UserChanges};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    users_by_uuid: HashMap<Uuid, i64>,
    users_by_email: HashMap<String, i64>,
    posts: BTreeMap<i64, Post>,
    last_user_id: i64,
    last_post_id: i64,
}

impl Tables {
    fn user_id(&self, uuid: &Uuid) -> Option<i64> {
        self.users_by_uuid.get(uuid).copied()
    }
}

/// Table-shaped in-process store. A single lock covers all tables so the
/// email index check and cascading deletes are atomic.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn insert_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut tables = self.tables.write().await;
        if tables.users_by_email.contains_key(&user.email) {
            return Err(StorageError::EmailTaken(user.email));
        }
        tables.last_user_id += 1;
        let created = User {
            id: tables.last_user_id,
            uuid: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            role: user.role,
        };
        tables.users_by_uuid.insert(created.uuid, created.id);
        tables.users_by_email.insert(created.email.clone(), created.id);
        tables.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_user_by_uuid(&self, uuid: Uuid) -> Result<Option<User>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.user_id(&uuid).and_then(|id| tables.users.get(&id).cloned()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users_by_email
            .get(email)
            .and_then(|id| tables.users.get(id).cloned()))
    }

    async fn update_user(&self, uuid: Uuid, changes: UserChanges) -> Result<Option<User>, StorageError> {
        let mut tables = self.tables.write().await;
        let Some(id) = tables.user_id(&uuid) else {
            return Ok(None);
        };
        if tables.users_by_email.get(&changes.email).is_some_and(|owner| *owner != id) {
            return Err(StorageError::EmailTaken(changes.email));
        }
        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(None);
        };
        let previous_email = std::mem::replace(&mut user.email, changes.email);
        user.name = changes.name;
        if let Some(role) = changes.role {
            user.role = role;
        }
        let updated = user.clone();
        tables.users_by_email.remove(&previous_email);
        tables.users_by_email.insert(updated.email.clone(), id);
        Ok(Some(updated))
    }

    async fn delete_user(&self, uuid: Uuid) -> Result<bool, StorageError> {
        let mut tables = self.tables.write().await;
        let Some(id) = tables.users_by_uuid.remove(&uuid) else {
            return Ok(false);
        };
        if let Some(user) = tables.users.remove(&id) {
            tables.users_by_email.remove(&user.email);
        }
        tables.posts.retain(|_, post| post.user_id != id);
        Ok(true)
    }

    async fn insert_post(&self, post: NewPost) -> Result<Option<Post>, StorageError> {
        let mut tables = self.tables.write().await;
        let Some(user_id) = tables.user_id(&post.user_uuid) else {
            return Ok(None);
        };
        tables.last_post_id += 1;
        let created = Post {
            id: tables.last_post_id,
            uuid: Uuid::new_v4(),
            title: post.title,
            body: post.body,
            created_at: Utc::now(),
            user_id,
            user_uuid: post.user_uuid,
        };
        tables.posts.insert(created.id, created.clone());
        Ok(Some(created))
    }

    async fn users_and_posts(&self) -> Result<(Vec<User>, Vec<Post>), StorageError> {
        let tables = self.tables.read().await;
        Ok((
            tables.users.values().cloned().collect(),
            tables.posts.values().cloned().collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Role;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn assigns_increasing_internal_ids() {
        let storage = InMemoryStorage::new();
        let first = storage.insert_user(new_user("Ann", "ann@x.com")).await.unwrap();
        let second = storage.insert_user(new_user("Bob", "bob@x.com")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_ne!(first.uuid, second.uuid);
    }

    #[tokio::test]
    async fn unique_email_index_rejects_second_insert() {
        let storage = InMemoryStorage::new();
        storage.insert_user(new_user("Ann", "ann@x.com")).await.unwrap();
        let result = storage.insert_user(new_user("Other Ann", "ann@x.com")).await;
        assert_eq!(result, Err(StorageError::EmailTaken("ann@x.com".to_string())));
        assert_eq!(storage.users_and_posts().await.unwrap().0.len(), 1);
    }

    #[tokio::test]
    async fn update_moves_email_index() {
        let storage = InMemoryStorage::new();
        let ann = storage.insert_user(new_user("Ann", "ann@x.com")).await.unwrap();
        let changes = UserChanges {
            name: "Ann".to_string(),
            email: "ann@y.com".to_string(),
            role: None,
        };
        storage.update_user(ann.uuid, changes).await.unwrap();

        assert!(storage.get_user_by_email("ann@x.com").await.unwrap().is_none());
        assert_eq!(storage.get_user_by_email("ann@y.com").await.unwrap().map(|u| u.uuid), Some(ann.uuid));
        // The old address is free again.
        assert!(storage.insert_user(new_user("Ann 2", "ann@x.com")).await.is_ok());
    }

    #[tokio::test]
    async fn delete_cascades_to_owned_posts() {
        let storage = InMemoryStorage::new();
        let ann = storage.insert_user(new_user("Ann", "ann@x.com")).await.unwrap();
        let bob = storage.insert_user(new_user("Bob", "bob@x.com")).await.unwrap();
        for owner in [ann.uuid, bob.uuid] {
            storage
                .insert_post(NewPost {
                    title: "Hello".to_string(),
                    body: None,
                    user_uuid: owner,
                })
                .await
                .unwrap();
        }

        assert!(storage.delete_user(ann.uuid).await.unwrap());
        let (_, posts) = storage.users_and_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user_uuid, bob.uuid);
        assert!(!storage.delete_user(ann.uuid).await.unwrap());
    }

    #[tokio::test]
    async fn insert_post_for_unknown_owner_returns_none() {
        let storage = InMemoryStorage::new();
        let post = NewPost {
            title: "Orphan".to_string(),
            body: None,
            user_uuid: Uuid::new_v4(),
        };
        assert!(storage.insert_post(post).await.unwrap().is_none());
        assert!(storage.users_and_posts().await.unwrap().1.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn snapshot_never_shows_post_without_owner() {
        let storage = InMemoryStorage::new();
        let writer = {
            let storage = storage.clone();
            tokio::spawn(async move {
                for i in 0..200 {
                    let user = storage
                        .insert_user(new_user("Writer", &format!("writer{i}@x.com")))
                        .await
                        .unwrap();
                    storage
                        .insert_post(NewPost {
                            title: format!("Post {i}"),
                            body: None,
                            user_uuid: user.uuid,
                        })
                        .await
                        .unwrap();
                    if i % 2 == 0 {
                        storage.delete_user(user.uuid).await.unwrap();
                    }
                }
            })
        };

        while !writer.is_finished() {
            let (users, posts) = storage.users_and_posts().await.unwrap();
            for post in &posts {
                assert!(
                    users.iter().any(|user| user.id == post.user_id),
                    "post {} returned without its owner",
                    post.id
                );
            }
            tokio::task::yield_now().await;
        }
        writer.await.unwrap();

        let (users, posts) = storage.users_and_posts().await.unwrap();
        assert_eq!(users.len(), 100);
        assert_eq!(posts.len(), 100);
    }
}
