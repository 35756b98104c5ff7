//! Session-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::Utc;
use viz_core::account::suspension_expired;
use viz_core::error::CoreError;
use viz_core::types::DbId;
use viz_db::models::user::User;
use viz_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from a Bearer token in the `Authorization` header.
///
/// The token must validate, its subject must still exist, and the account
/// must be neither banned nor suspended. A timed suspension that has run
/// out is lifted here, on the account's next request.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    pub username: String,
    pub email: String,
    /// The user's role name (`"USER"` or `"ADMIN"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let mut user = UserRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "User",
                id: claims.sub,
            }))?;

        if user.is_banned {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is banned".into(),
            )));
        }
        if user.is_suspended {
            let lifted = if suspension_expired(user.suspended_until, Utc::now()) {
                UserRepo::lift_expired_suspension(&state.pool, user.id).await?
            } else {
                None
            };
            match lifted {
                Some(active) => {
                    tracing::info!(user_id = active.id, "Expired suspension lifted");
                    user = active;
                }
                None => return Err(suspended_error(&user)),
            }
        }

        Ok(AuthUser {
            user_id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        })
    }
}

fn suspended_error(user: &User) -> AppError {
    let message = match user.suspended_until {
        Some(until) => format!("Account is suspended until {}", until.format("%Y-%m-%d")),
        None => "Account is suspended".to_string(),
    };
    AppError::Core(CoreError::Forbidden(message))
}
