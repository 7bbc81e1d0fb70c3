use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Router,
};
use tracing::{error, info, instrument, warn};

use crate::error::{is_duplicate_key, SignupError};
use crate::pages;
use crate::signup::password::hash_password;
use crate::signup::{SignupForm, SignupInput, User};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/submit", post(submit))
}

#[instrument]
pub async fn home() -> Html<String> {
    Html(pages::home_page())
}

#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Html<String>, SignupError> {
    let SignupInput {
        name,
        email,
        password,
        confirm_password,
    } = match form.into_input() {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "incomplete submission");
            return Err(e);
        }
    };

    if password != confirm_password {
        warn!(%email, "password confirmation mismatch");
        return Err(SignupError::PasswordMismatch);
    }

    // The plaintext stops here.
    let hash = hash_password(&password).map_err(SignupError::Hash)?;

    if User::find_by_email(&state.users, &email).await?.is_some() {
        warn!(%email, "email already registered");
        return Err(SignupError::DuplicateEmail(email));
    }

    let user = match User::create(&state.users, &name, &email, &hash).await {
        Ok(user) => user,
        // Lost the race between the lookup and the insert; the unique index
        // caught it.
        Err(e) if is_duplicate_key(&e) => {
            warn!(%email, "email already registered");
            return Err(SignupError::DuplicateEmail(email));
        }
        Err(e) => {
            error!(error = %e, %email, "create user failed");
            return Err(SignupError::Storage(e));
        }
    };

    info!(email = %user.email, "user registered");
    Ok(Html(pages::success_page(&user.name, &user.email)))
}
