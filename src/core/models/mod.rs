pub mod post;
pub mod user;

pub use post::{NewPost, Post, PostWithUser};
pub use user::{NewUser, Role, User, UserChanges, UserWithPosts};
