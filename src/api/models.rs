use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::api::extract::RequestRules;
use crate::constants::{EMAIL_ALREADY_EXISTS, SOMETHING_WENT_WRONG, USER_NOT_FOUND};
use crate::core::errors::PostboardError;
use crate::core::models::{NewUser, Role, UserChanges};
use crate::core::validation::{FieldRule, POST_RULES, USER_RULES};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
}

impl RequestRules for CreateUserRequest {
    const RULES: &'static [FieldRule] = USER_RULES;
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
            role: req.role.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    /// Omitted keeps the current role
    #[serde(default)]
    pub role: Option<Role>,
}

impl RequestRules for UpdateUserRequest {
    const RULES: &'static [FieldRule] = USER_RULES;
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        UserChanges {
            name: req.name,
            email: req.email,
            role: req.role,
        }
    }
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub user_uuid: String,
}

impl RequestRules for CreatePostRequest {
    const RULES: &'static [FieldRule] = POST_RULES;
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct NotFoundResponse {
    pub user: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ConflictResponse {
    pub email: String,
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for PostboardError to implement IntoResponse
#[derive(Debug)]
pub struct ApiError(pub PostboardError);

impl From<PostboardError> for ApiError {
    fn from(err: PostboardError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self.0 {
            PostboardError::Validation(fields) => {
                debug!(?fields, "request rejected by validation");
                (StatusCode::BAD_REQUEST, Json(fields)).into_response()
            }
            PostboardError::UserNotFound(uuid) => {
                debug!(%uuid, "user not found");
                let body = NotFoundResponse {
                    user: USER_NOT_FOUND.to_string(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            PostboardError::EmailAlreadyExists(email) => {
                debug!(%email, "duplicate email");
                let body = ConflictResponse {
                    email: EMAIL_ALREADY_EXISTS.to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            err @ PostboardError::UnexpectedError(_) => {
                // Cause stays server-side.
                error!(error = %err, "request failed");
                let body = ErrorResponse {
                    error: SOMETHING_WENT_WRONG.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
