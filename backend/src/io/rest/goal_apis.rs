//! # REST API for Goal Management
//!
//! Endpoints for creating goals, moving them through their lifecycle, and
//! listing the goals visible under a tab. Domain errors are translated to
//! HTTP status codes here: validation failures map to 400, stale ids to
//! 404, illegal lifecycle moves to 409.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post},
    Router,
};
use log::{error, info};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::commands::goal::{
    CompleteGoalCommand, CreateGoalCommand, DeleteGoalCommand, GoalListQuery, StartGoalCommand,
};
use crate::domain::errors::GoalError;
use crate::io::rest::mappers::goal_mapper::GoalMapper;
use crate::AppState;
use shared::{
    CompleteGoalRequest, CompleteGoalResponse, CreateGoalRequest, CreateGoalResponse,
    DeleteGoalResponse, GoalListResponse, StartGoalResponse, Tab,
};

/// Create a router for goal related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_goals).post(create_goal))
        .route("/:id/start", post(start_goal))
        .route("/:id/complete", post(complete_goal))
        .route("/:id", delete(delete_goal))
}

#[derive(Debug, Deserialize)]
pub struct ListGoalsParams {
    tab: Option<String>,
}

/// List the goals visible under a tab
pub async fn list_goals(
    State(state): State<AppState>,
    Query(params): Query<ListGoalsParams>,
) -> impl IntoResponse {
    info!("GET /api/goals - tab: {:?}", params.tab);

    let tab = match params.tab.as_deref() {
        Some(raw) => match Tab::parse(raw) {
            Some(tab) => tab,
            None => {
                let error_response = json!({
                    "error": format!("Unknown tab: {}", raw),
                    "code": "INVALID_INPUT"
                });
                return (StatusCode::BAD_REQUEST, Json(error_response)).into_response();
            }
        },
        None => Tab::Home,
    };

    match state.goal_service.list_goals(GoalListQuery { tab }) {
        Ok(result) => {
            let response = GoalListResponse {
                goals: GoalMapper::to_dto_list(result.goals),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list goals: {}", e);
            goal_error_response(e).into_response()
        }
    }
}

/// Create a new goal
pub async fn create_goal(
    State(state): State<AppState>,
    Json(request): Json<CreateGoalRequest>,
) -> impl IntoResponse {
    info!("POST /api/goals - request: {:?}", request);

    let command = CreateGoalCommand {
        title: request.title,
        description: request.description,
        category: request.category,
    };

    match state.goal_service.create_goal(command) {
        Ok(result) => {
            let response = CreateGoalResponse {
                goal: GoalMapper::to_dto(result.goal),
                success_message: result.success_message,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create goal: {}", e);
            goal_error_response(e).into_response()
        }
    }
}

/// Start a pending goal
pub async fn start_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/goals/{}/start", goal_id);

    match state.goal_service.start_goal(StartGoalCommand { goal_id }) {
        Ok(result) => {
            let response = StartGoalResponse {
                goal: GoalMapper::to_dto(result.goal),
                success_message: result.success_message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to start goal: {}", e);
            goal_error_response(e).into_response()
        }
    }
}

/// Complete an active goal
pub async fn complete_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
    Json(request): Json<CompleteGoalRequest>,
) -> impl IntoResponse {
    info!("POST /api/goals/{}/complete - request: {:?}", goal_id, request);

    let command = CompleteGoalCommand {
        goal_id,
        end_date: request.end_date,
        budget_spent: request.budget_spent,
        photo_url: request.photo_url,
        experience: request.experience,
    };

    match state.goal_service.complete_goal(command) {
        Ok(result) => {
            let response = CompleteGoalResponse {
                goal: GoalMapper::to_dto(result.goal),
                success_message: result.success_message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to complete goal: {}", e);
            goal_error_response(e).into_response()
        }
    }
}

/// Delete a pending goal
pub async fn delete_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/goals/{}", goal_id);

    match state.goal_service.delete_goal(DeleteGoalCommand { goal_id }) {
        Ok(result) => {
            let response = DeleteGoalResponse {
                success_message: result.success_message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to delete goal: {}", e);
            goal_error_response(e).into_response()
        }
    }
}

/// Map a domain error onto an HTTP status and a structured error body
fn goal_error_response(e: GoalError) -> (StatusCode, Json<Value>) {
    let (status, code) = match &e {
        GoalError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        GoalError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        GoalError::InvalidTransition { .. } => (StatusCode::CONFLICT, "INVALID_TRANSITION"),
        GoalError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
    };

    let error_response = json!({
        "error": e.to_string(),
        "code": code
    });
    (status, Json(error_response))
}
