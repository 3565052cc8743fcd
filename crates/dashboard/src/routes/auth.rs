//! Login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Default, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub email: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub email: String,
}

/// Map an error code from the query string to a message.
fn error_message(code: &str) -> &'static str {
    match code {
        "credentials" => "Invalid email or password.",
        "session" => "Could not start your session. Please try again.",
        _ => "Something went wrong. Please try again.",
    }
}

/// Display the login page.
///
/// Already logged-in users go straight to the dashboard.
pub async fn login_page(
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    LoginTemplate {
        error: query.error.as_deref().map(|code| error_message(code).to_string()),
        email: query.email.unwrap_or_default(),
    }
    .into_response()
}

/// Handle login form submission.
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let user = match AuthService::new(state.pool())
        .login_with_password(&form.email, &form.password)
        .await
    {
        Ok(user) => user,
        Err(AuthError::InvalidCredentials | AuthError::InvalidEmail(_)) => {
            tracing::warn!("Login failed");
            let email = urlencoding::encode(form.email.trim());
            return Ok(Redirect::to(&format!("/login?error=credentials&email={email}")).into_response());
        }
        Err(e) => return Err(AppError::Auth(e)),
    };

    if let Err(e) = set_current_user(&session, &CurrentUser::from(&user)).await {
        tracing::error!("Failed to set session: {}", e);
        return Ok(Redirect::to("/login?error=session").into_response());
    }

    set_sentry_user(&user.id, Some(user.email.as_str()));
    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Redirect::to("/dashboard").into_response())
}

/// Handle logout.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }
    clear_sentry_user();

    Redirect::to("/login").into_response()
}
