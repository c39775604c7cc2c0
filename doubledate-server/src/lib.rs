pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod registry;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::AdminGuard;
use crate::config::ServerConfig;
use crate::registry::UserRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: UserRegistry,
    pub auth: AdminGuard,
    pub admin_page: PathBuf,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        let auth = match &config.admin_code {
            Some(code) => AdminGuard::new(code.clone()),
            None => AdminGuard::disabled(),
        };

        Self {
            registry: UserRegistry::new(),
            auth,
            admin_page: config.admin_page.clone(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::health))
        .route("/admin", get(api::admin_page))
        // Admin API
        .route("/create", post(api::create_user))
        .route("/users", get(api::list_users))
        .route("/:id/delete", delete(api::delete_user))
        .route("/:id/admin-update", patch(api::admin_update))
        // Public, unauthenticated read path
        .route("/:id/stats", get(api::user_stats))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
