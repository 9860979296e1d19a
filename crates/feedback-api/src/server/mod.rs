//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use feedback_common::{AppConfig, AppError, SignatureVerifier};
use feedback_core::MarkerClassifier;
use feedback_service::{GitHubClient, ServiceContextBuilder};
use feedback_store::JsonFileCommentRepository;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// Loads the record store from disk; a missing or unreadable file starts empty.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!(path = %config.storage.data_file.display(), "Loading record store...");
    let comment_repo = Arc::new(JsonFileCommentRepository::open(config.storage.data_file.clone()).await);

    let github = GitHubClient::from_config(&config.github)
        .map_err(|e| AppError::Config(format!("Failed to build GitHub client: {e}")))?;
    info!(api_url = %github.base_url(), "GitHub client ready");

    let classifier = Arc::new(MarkerClassifier::new(config.classifier.markers.iter()));

    let service_context = ServiceContextBuilder::new()
        .comment_repo(comment_repo)
        .reaction_source(Arc::new(github))
        .classifier(classifier)
        .verifier(SignatureVerifier::new(&config.webhook.secret))
        .batch_delay(config.batch.delay)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until `shutdown` resolves
pub async fn run_server<F>(app: Router, listener: TcpListener, shutdown: F) -> Result<(), AppError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read local address: {}", e)))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Run the complete server with configuration
///
/// The store is saved once more after the server stops accepting requests.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state.clone());

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(addr.as_str())
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    run_server(app, listener, shutdown_signal()).await?;

    match state.service_context().comment_repo().save().await {
        Ok(()) => info!("Record store saved"),
        Err(e) => warn!(error = %e, "Failed to save record store on shutdown"),
    }

    Ok(())
}
