use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::auth::models::{AuthenticatedUser, Role};
use crate::error::WorkflowError;

/// Name of the session cookie carrying the serialized user.
pub const SESSION_COOKIE: &str = "docuflow_session";

/// Built-in demo user definition.
#[derive(Debug, Clone)]
struct DemoUser {
    username: &'static str,
    password: &'static str,
    role: Role,
}

/// The hard-coded demo users. Roles are resolved here, server-side; the
/// client never supplies its own role.
const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        username: "sam",
        password: "sam",
        role: Role::Submitter,
    },
    DemoUser {
        username: "pat",
        password: "pat",
        role: Role::Submitter,
    },
    DemoUser {
        username: "rita",
        password: "rita",
        role: Role::Reviewer,
    },
    DemoUser {
        username: "avery",
        password: "avery",
        role: Role::Approver,
    },
];

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: AuthenticatedUser,
}

/// Validate demo credentials and return the corresponding user.
pub fn authenticate_demo_user(
    username: &str,
    password: &str,
) -> Result<AuthenticatedUser, WorkflowError> {
    DEMO_USERS
        .iter()
        .find(|u| u.username == username && u.password == password)
        .map(|u| AuthenticatedUser {
            user_id: format!("user-{}", u.username),
            username: u.username.to_string(),
            role: u.role,
        })
        .ok_or_else(|| WorkflowError::Unauthorized("invalid username or password".into()))
}

/// `POST /api/auth/login` — validates credentials against the built-in user
/// table, sets the session cookie and returns the user with its resolved
/// role.
pub async fn login_handler(
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), WorkflowError> {
    let user = authenticate_demo_user(&req.username, &req.password)?;

    let user_json = serde_json::to_string(&user)
        .map_err(|e| WorkflowError::Store(format!("failed to serialize user: {e}")))?;

    let cookie = Cookie::build((SESSION_COOKIE, user_json))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    let jar = jar.add(cookie);
    tracing::info!(username = %user.username, role = %user.role, "login successful");

    Ok((
        jar,
        Json(LoginResponse {
            message: "Login successful".to_string(),
            user,
        }),
    ))
}

/// `GET /api/auth/me` — returns the current user from the session cookie.
pub async fn me_handler(user: AuthenticatedUser) -> Json<AuthenticatedUser> {
    Json(user)
}

/// `POST /api/auth/logout` — clears the session cookie.
pub async fn logout_handler(jar: CookieJar) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, "")).path("/").removal().build();
    jar.remove(cookie)
}
