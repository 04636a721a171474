use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::auth::models::AuthenticatedUser;
use crate::auth::session::SESSION_COOKIE;
use crate::error::WorkflowError;

/// Resolve the session cookie to an [`AuthenticatedUser`].
///
/// Handlers take `AuthenticatedUser` as an argument and get a 401 rejection
/// for free when no valid session is present.
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = WorkflowError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get(SESSION_COOKIE)
            .ok_or_else(|| WorkflowError::Unauthorized("not logged in".into()))?;

        serde_json::from_str(cookie.value())
            .map_err(|e| WorkflowError::Unauthorized(format!("invalid session: {e}")))
    }
}
