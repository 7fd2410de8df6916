use super::post::Post;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")] // JSON uses "USER" / "ADMIN" / "SUPERADMIN"
pub enum Role {
    #[default]
    User,
    Admin,
    Superadmin,
}

impl Role {
    /// Wire names accepted by the `role` field.
    pub const NAMES: [&'static str; 3] = ["USER", "ADMIN", "SUPERADMIN"];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
            Role::Superadmin => "SUPERADMIN",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct User {
    /// Internal key, never leaves the process
    #[serde(skip)]
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Full replacement of a user's fields. `role: None` keeps the stored role.
#[derive(Clone, Debug)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserWithPosts {
    #[serde(flatten)]
    pub user: User,
    pub posts: Vec<Post>,
}
