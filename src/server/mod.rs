//! HTTP server for the contact manager.
//!
//! [`build_router`] wires the routes to an explicit [`AppState`]; nothing is
//! registered globally. [`run_server`] binds a listener and serves until
//! Ctrl-C.

mod error;
pub mod flash;
pub mod handlers;
mod request_tracing;
pub mod views;

pub use error::AppError;

use crate::services::ContactService;
use anyhow::Result;
use axum::extract::FromRef;
use axum::middleware::from_fn;
use axum::routing::{any, get, post};
use axum::Router;
use axum_extra::extract::cookie::Key;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactService>,
    /// Signs the flash cookie.
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactService>, cookie_key: Key) -> Self {
        Self {
            contacts,
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/:id/edit/",
            get(handlers::edit_contact_form).post(handlers::update_contact),
        )
        .route("/:id/delete/", post(handlers::delete_contact))
        .route("/:id/edit", any(handlers::append_trailing_slash))
        .route("/:id/delete", any(handlers::append_trailing_slash))
        .layer(from_fn(request_tracing::request_tracing_middleware))
        .with_state(state)
}

/// Serve `router` on `addr` until a shutdown signal arrives.
pub async fn run_server(router: Router, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
