use enroll::app::{build_app, serve};
use enroll::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "enroll=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Startup errors are fatal: print the diagnostic and bail with a failure
    // status instead of serving without a record store.
    let state = match AppState::init().await {
        Ok(state) => state,
        Err(e) => {
            match e.hint() {
                Some(hint) => tracing::error!(error = %e, hint, "startup failed"),
                None => tracing::error!(error = %e, "startup failed"),
            }
            std::process::exit(1);
        }
    };

    let app = build_app(state);
    serve(app).await
}
