use super::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(skip)]
    pub id: i64,
    pub uuid: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Internal key of the owning user
    #[serde(skip)]
    pub user_id: i64,
    pub user_uuid: Uuid,
}

#[derive(Clone, Debug)]
pub struct NewPost {
    pub title: String,
    pub body: Option<String>,
    pub user_uuid: Uuid,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PostWithUser {
    #[serde(flatten)]
    pub post: Post,
    pub user: User,
}
