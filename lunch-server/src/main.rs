use lunch_server::api::build_app;
use lunch_server::utils::logger::init_logger;
use lunch_server::{AppState, BoxError, Config, seed};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    init_logger();

    let config = Config::from_env()?;
    tracing::info!(
        "Starting lunch-server (env: {}, db: {}, timezone: {})",
        config.environment,
        config.database.backend_name(),
        config.timezone
    );

    let state = AppState::new(&config).await?;

    if config.seed_sample_data {
        match seed::insert_sample_data(&state.db.pool).await {
            Ok(0) => {}
            Ok(n) => tracing::info!("Seeded {n} sample restaurants"),
            Err(e) => tracing::warn!("Failed to insert sample data: {e}"),
        }
    }

    let app = build_app(state, &config);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("lunch-server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down...");
}
