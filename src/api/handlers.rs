use crate::{
    api::{
        extract::ValidatedJson,
        models::{
            ApiError, ConflictResponse, CreatePostRequest, CreateUserRequest, ErrorResponse, MessageResponse,
            NotFoundResponse, UpdateUserRequest,
        },
    },
    constants::USER_DELETED,
    core::{
        models::{Post, PostWithUser, User, UserWithPosts},
        services::PostboardService,
    },
    infrastructure::storage::Storage,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use std::sync::Arc;

// Define API routes
pub fn api_routes<S: Storage + 'static>(service: Arc<PostboardService<S>>) -> Router {
    Router::new()
        .route("/users", get(list_users::<S>).post(create_user::<S>))
        .route(
            "/users/{uuid}",
            get(get_user::<S>).put(update_user::<S>).delete(delete_user::<S>),
        )
        .route("/posts", get(list_posts::<S>).post(create_post::<S>))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Invalid fields (field -> message) or email already exists", body = ConflictResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_user<S: Storage>(
    State(service): State<Arc<PostboardService<S>>>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = service.create_user(req.into()).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users with their posts", body = [UserWithPosts]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn list_users<S: Storage>(
    State(service): State<Arc<PostboardService<S>>>,
) -> Result<Json<Vec<UserWithPosts>>, ApiError> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{uuid}",
    params(
        ("uuid" = String, Path, description = "uuid of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User retrieved", body = User),
        (status = 404, description = "User not found", body = NotFoundResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user<S: Storage>(
    State(service): State<Arc<PostboardService<S>>>,
    Path(uuid): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = service.get_user(&uuid).await?;
    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/users/{uuid}",
    request_body = UpdateUserRequest,
    params(
        ("uuid" = String, Path, description = "uuid of the user to replace")
    ),
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid fields (field -> message) or email already exists", body = ConflictResponse),
        (status = 404, description = "User not found", body = NotFoundResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn update_user<S: Storage>(
    State(service): State<Arc<PostboardService<S>>>,
    Path(uuid): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = service.update_user(&uuid, req.into()).await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/{uuid}",
    params(
        ("uuid" = String, Path, description = "uuid of the user to delete")
    ),
    responses(
        (status = 200, description = "User and owned posts deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = NotFoundResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn delete_user<S: Storage>(
    State(service): State<Arc<PostboardService<S>>>,
    Path(uuid): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    service.delete_user(&uuid).await?;
    Ok(Json(MessageResponse {
        message: USER_DELETED.to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Post created", body = Post),
        (status = 400, description = "Invalid fields (field -> message)"),
        (status = 404, description = "Owning user not found", body = NotFoundResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_post<S: Storage>(
    State(service): State<Arc<PostboardService<S>>>,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let post = service.create_post(req.title, req.body, &req.user_uuid).await?;
    Ok(Json(post))
}

#[utoipa::path(
    get,
    path = "/posts",
    responses(
        (status = 200, description = "All posts, newest first, with their owner", body = [PostWithUser]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn list_posts<S: Storage>(
    State(service): State<Arc<PostboardService<S>>>,
) -> Result<Json<Vec<PostWithUser>>, ApiError> {
    let posts = service.list_posts().await?;
    Ok(Json(posts))
}
