use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    error::{AppError, Result},
    state::AppState,
};

use super::task_dto::{
    GetTasksRequest, SaveTaskRequest, SearchTasksRequest, TaskIdRequest, TaskListResponse,
    TaskResponse,
};

// validate() before every service call keeps required-field failures on
// the 400 path; ownership and lifecycle failures come back as 404.

/// List all tasks for an owner
#[utoipa::path(
    post,
    path = "/api/get-tasks",
    request_body = GetTasksRequest,
    responses(
        (status = 200, description = "Tasks for the owner", body = TaskListResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "tasks"
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    Json(payload): Json<GetTasksRequest>,
) -> Result<Json<TaskListResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let owner_id = payload
        .owner_id
        .ok_or_else(|| AppError::Validation("owner_id is required".to_string()))?;

    let tasks = state.task_service.list_tasks(owner_id).await?;

    Ok(Json(TaskListResponse {
        success: true,
        message: "Tasks fetched".to_string(),
        tasks,
    }))
}

/// Search an owner's tasks by title substring
#[utoipa::path(
    post,
    path = "/api/search-tasks",
    request_body = SearchTasksRequest,
    responses(
        (status = 200, description = "Matching tasks", body = TaskListResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "tasks"
)]
pub async fn search_tasks(
    State(state): State<AppState>,
    Json(payload): Json<SearchTasksRequest>,
) -> Result<Json<TaskListResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let owner_id = payload
        .owner_id
        .ok_or_else(|| AppError::Validation("owner_id is required".to_string()))?;

    let tasks = state
        .task_service
        .search_tasks(owner_id, &payload.title)
        .await?;

    Ok(Json(TaskListResponse {
        success: true,
        message: "Tasks fetched".to_string(),
        tasks,
    }))
}

/// Create or edit a task
#[utoipa::path(
    post,
    path = "/api/save-task",
    request_body = SaveTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 200, description = "Task updated", body = TaskResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Task not found for this owner"),
        (status = 500, description = "Internal server error")
    ),
    tag = "tasks"
)]
pub async fn save_task(
    State(state): State<AppState>,
    Json(payload): Json<SaveTaskRequest>,
) -> Result<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (task, created) = state.task_service.save_task(payload).await?;

    let (status, message) = if created {
        (StatusCode::CREATED, "Task created")
    } else {
        (StatusCode::OK, "Task updated")
    };

    Ok((
        status,
        Json(TaskResponse {
            success: true,
            message: message.to_string(),
            task,
        }),
    ))
}

/// Logically delete a task
#[utoipa::path(
    post,
    path = "/api/delete-task",
    request_body = TaskIdRequest,
    responses(
        (status = 200, description = "Task deleted", body = TaskResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Task not found or already deleted"),
        (status = 500, description = "Internal server error")
    ),
    tag = "tasks"
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskIdRequest>,
) -> Result<Json<TaskResponse>> {
    let (task_id, owner_id) = require_ids(&payload)?;

    let task = state.task_service.delete_task(task_id, owner_id).await?;

    Ok(Json(TaskResponse {
        success: true,
        message: "Task deleted".to_string(),
        task,
    }))
}

/// Mark a task finished
#[utoipa::path(
    post,
    path = "/api/finish-task",
    request_body = TaskIdRequest,
    responses(
        (status = 200, description = "Task finished", body = TaskResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Task not found, deleted, or already finished"),
        (status = 500, description = "Internal server error")
    ),
    tag = "tasks"
)]
pub async fn finish_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskIdRequest>,
) -> Result<Json<TaskResponse>> {
    let (task_id, owner_id) = require_ids(&payload)?;

    let task = state.task_service.finish_task(task_id, owner_id).await?;

    Ok(Json(TaskResponse {
        success: true,
        message: "Task finished".to_string(),
        task,
    }))
}

fn require_ids(payload: &TaskIdRequest) -> Result<(i64, i64)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let task_id = payload
        .task_id
        .ok_or_else(|| AppError::Validation("task_id is required".to_string()))?;
    let owner_id = payload
        .owner_id
        .ok_or_else(|| AppError::Validation("owner_id is required".to_string()))?;
    Ok((task_id, owner_id))
}
