//! # Goal Tracker Backend
//!
//! In-memory goal tracking: goals are created, moved through a one-way
//! lifecycle (`pending → active → completed`), and annotated with
//! completion details. State lives for the lifetime of the process; there
//! is no persistence.
//!
//! The crate is layered the same way top to bottom:
//! - [`domain`] — the goal lifecycle state machine and view filter
//! - [`storage`] — the `GoalStorage` trait and in-memory repository
//! - [`io`] — the REST adapter a presentation layer talks to

use axum::{http::Method, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod domain;
pub mod io;
pub mod storage;

use domain::{EpochMillisIdProvider, GoalService};
use storage::MemoryGoalRepository;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub goal_service: GoalService,
}

/// Initialize the backend with all required services
pub fn initialize_backend() -> AppState {
    let goal_repository = Arc::new(MemoryGoalRepository::new());
    let id_provider = Arc::new(EpochMillisIdProvider::new());

    AppState {
        goal_service: GoalService::new(goal_repository, id_provider),
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow a browser frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new().nest("/goals", io::rest::goal_apis::router());

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
