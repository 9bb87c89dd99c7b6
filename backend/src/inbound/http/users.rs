//! User CRUD handlers.
//!
//! ```text
//! GET    /users          -> 200 [User]
//! GET    /users/{id}     -> 200 User | 404
//! POST   /users          -> 200 User
//! PUT    /users/{id}     -> 200 User | 404
//! DELETE /users/{id}     -> 200 | 404
//! ```
//!
//! A 404 carries no body. Store failures surface as the JSON error envelope.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Lookup, User, UserDetails, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Request body for create and update.
///
/// An `id` property is accepted but ignored; the path or the store decides
/// the id. Missing fields are stored as `null`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    #[schema(example = "Dino")]
    pub first_name: Option<String>,
    #[serde(default)]
    #[schema(example = "Petrucci")]
    pub last_name: Option<String>,
    #[serde(default)]
    #[schema(example = "dino@example.com")]
    pub email: Option<String>,
}

impl From<UserPayload> for UserDetails {
    fn from(payload: UserPayload) -> Self {
        Self {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
        }
    }
}

fn found_or_404<T: Serialize>(outcome: Lookup<T>) -> HttpResponse {
    match outcome {
        Lookup::Found(body) => HttpResponse::Ok().json(body),
        Lookup::NotFound => HttpResponse::NotFound().finish(),
    }
}

/// List every stored user in ascending id order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserSchema),
        (status = 404, description = "No user with this id"),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    let outcome = state.users.get_user(id).await?;
    Ok(found_or_404(outcome))
}

/// Create a user under a freshly allocated id.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "The stored user", body = UserSchema),
        (status = 400, description = "Body is not valid JSON"),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<User>> {
    let user = state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    Ok(web::Json(user))
}

/// Replace the details of an existing user; the id never changes.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "The updated user", body = UserSchema),
        (status = 400, description = "Body is not valid JSON"),
        (status = 404, description = "No user with this id"),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    let outcome = state
        .users_command
        .update_user(id, payload.into_inner().into())
        .await?;
    Ok(found_or_404(outcome))
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User removed"),
        (status = 404, description = "No user with this id"),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    let outcome = state.users_command.delete_user(id).await?;
    Ok(match outcome {
        Lookup::Found(()) => HttpResponse::Ok().finish(),
        Lookup::NotFound => HttpResponse::NotFound().finish(),
    })
}
