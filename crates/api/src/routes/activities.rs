//! Activity listing, signup and unregister handlers

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::Json;
use mergington_domain::ActivityCatalog;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::context::AppContext;
use crate::utils::logging::log_request_outcome;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: String,
}

pub async fn root() -> Redirect {
    Redirect::temporary("/activities")
}

pub async fn list_activities(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<ActivityCatalog>, ApiError> {
    let started = Instant::now();
    let result = ctx.signup.list_activities().await;
    log_request_outcome("list_activities", started.elapsed(), result.as_ref().map(|_| ()));

    Ok(Json(result?))
}

pub async fn signup(
    State(ctx): State<Arc<AppContext>>,
    Path(activity_name): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let started = Instant::now();
    let result = ctx.signup.signup(&activity_name, &email).await;
    log_request_outcome("signup", started.elapsed(), result.as_ref().copied());
    result?;

    Ok(Json(MessageResponse { message: format!("Signed up {email} for {activity_name}") }))
}

pub async fn unregister(
    State(ctx): State<Arc<AppContext>>,
    Path(activity_name): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let started = Instant::now();
    let result = ctx.signup.unregister(&activity_name, &email).await;
    log_request_outcome("unregister", started.elapsed(), result.as_ref().copied());
    result?;

    Ok(Json(MessageResponse { message: format!("Unregistered {email} from {activity_name}") }))
}
