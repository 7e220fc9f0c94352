use crate::error::{AppError, Result};
use crate::task::task_dto::SaveTaskRequest;
use crate::task::task_models::Task;
use crate::task::task_repository::TaskRepository;

/// Service layer for the task lifecycle: create, edit, logical delete,
/// single-shot finish, list and search, all scoped to the owner.
#[derive(Clone)]
pub struct TaskService {
    repo: TaskRepository,
}

impl TaskService {
    pub fn new(repo: TaskRepository) -> Self {
        Self { repo }
    }

    pub async fn list_tasks(&self, owner_id: i64) -> Result<Vec<Task>> {
        self.repo.find_all(owner_id).await
    }

    pub async fn search_tasks(&self, owner_id: i64, fragment: &str) -> Result<Vec<Task>> {
        self.repo.search_by_title(owner_id, fragment).await
    }

    /// Branches on task_id: absent or non-positive creates a fresh row,
    /// positive edits the caller's own row (404 when it isn't theirs).
    /// Returns the stored task and whether it was created.
    pub async fn save_task(&self, payload: SaveTaskRequest) -> Result<(Task, bool)> {
        let owner_id = payload
            .owner_id
            .ok_or_else(|| AppError::Validation("owner_id is required".to_string()))?;
        let title = payload
            .title
            .ok_or_else(|| AppError::Validation("title is required".to_string()))?;
        let start = payload
            .start
            .ok_or_else(|| AppError::Validation("start is required".to_string()))?;
        let end = payload
            .end
            .ok_or_else(|| AppError::Validation("end is required".to_string()))?;
        let color = payload
            .color
            .ok_or_else(|| AppError::Validation("color is required".to_string()))?;
        let content = payload.content.unwrap_or_default();

        match payload.task_id {
            Some(id) if id > 0 => {
                let task = self
                    .repo
                    .update(id, owner_id, &title, &content, start, end, &color)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
                Ok((task, false))
            }
            _ => {
                let task = self
                    .repo
                    .create(owner_id, &title, &content, start, end, &color)
                    .await?;
                Ok((task, true))
            }
        }
    }

    pub async fn delete_task(&self, task_id: i64, owner_id: i64) -> Result<Task> {
        self.repo
            .mark_deleted(task_id, owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }

    pub async fn finish_task(&self, task_id: i64, owner_id: i64) -> Result<Task> {
        self.repo
            .mark_finished(task_id, owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }
}
