//! HTTP CRUD service for a single in-memory "user" resource.
//!
//! # Overview
//! Five endpoints under `/api/v1/users` (list, get, create, update, delete)
//! operate on a `UserStore` seeded with three records. A health endpoint at
//! `/` reports static service metadata.
//!
//! # Design
//! - The store is injected through axum `State`; there is no global state.
//! - Validation lives in the `UserId` and `UserBody` extractors, so handlers
//!   only ever see a parsed id and a body with `name` and `email` present.
//! - Every failure is an `ApiError`, rendered as `{"error": "..."}`.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod store;
pub mod telemetry;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub use config::{Config, ConfigError, Environment};
pub use error::{ApiError, ApiResult};
pub use model::{ErrorBody, MessageBody, ServiceInfo, User, UserInput};
pub use store::{UserStore, Users};

/// Base path of the versioned API.
pub const API_PREFIX: &str = "/api/v1";

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub store: UserStore,
    pub info: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(store: UserStore, info: ServiceInfo) -> Self {
        Self {
            store,
            info: Arc::new(info),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            UserStore::seeded(),
            ServiceInfo::new(config.app_name.clone(), config.docs_url.clone()),
        )
    }
}

/// The seeded application with default metadata.
pub fn app() -> Router {
    router(AppState::default())
}

pub fn router(state: AppState) -> Router {
    let users = Router::new()
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        );

    Router::new()
        .route("/", get(handlers::health))
        .nest(API_PREFIX, users)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the default app until the listener fails.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serves `state` until Ctrl-C or SIGTERM, then drains in-flight requests.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
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

    info!("shutdown signal received");
}
