//! HTTP routes

mod activities;
mod error;
mod health;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;

pub use error::ApiError;

use crate::context::AppContext;

/// Build the application router over a shared context.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(activities::root))
        .route("/activities", get(activities::list_activities))
        .route("/activities/{activity_name}/signup", post(activities::signup))
        .route("/activities/{activity_name}/unregister", delete(activities::unregister))
        .route("/health", get(health::health))
        .with_state(ctx)
}
