pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod pages;
pub mod signup;
pub mod state;

pub use error::{SignupError, StartupError};
pub use state::AppState;
