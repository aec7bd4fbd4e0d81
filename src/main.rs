#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let profile = match &config.profile_seed_path {
        Some(path) => state::load_seed(path).expect("profile seed load failed"),
        None => {
            tracing::info!("PROFILE_SEED_PATH not set, serving demo profile");
            state::demo_profile()
        }
    };
    let state = state::AppState::new(profile);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "profile-desk listening");
    axum::serve(listener, app).await.expect("server failed");
}
