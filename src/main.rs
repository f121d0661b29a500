mod config;
mod error;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(
        columns = config.grid.columns(),
        max_rows = config.grid.max_rows(),
        resize_checks_overlap = config.policy.resize_checks_overlap,
        "grid configured"
    );

    let state = state::AppState::new(config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "gridboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
