use axum::Router;

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod password;
mod repo;
mod repo_types;

pub use dto::{SignupForm, SignupInput};
pub use repo_types::User;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
