use utoipa::OpenApi;

use crate::{
    api::models::{
        ConflictResponse, CreatePostRequest, CreateUserRequest, ErrorResponse, MessageResponse, NotFoundResponse,
        UpdateUserRequest,
    },
    core::models::{Post, PostWithUser, Role, User, UserWithPosts},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_user,
        super::handlers::list_users,
        super::handlers::get_user,
        super::handlers::update_user,
        super::handlers::delete_user,
        super::handlers::create_post,
        super::handlers::list_posts
    ),
    components(schemas(
        CreateUserRequest,
        UpdateUserRequest,
        CreatePostRequest,
        MessageResponse,
        NotFoundResponse,
        ConflictResponse,
        ErrorResponse,
        Role,
        User,
        UserWithPosts,
        Post,
        PostWithUser
    )),
    info(
        title = "Postboard API",
        description = "API for managing users and their posts",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
