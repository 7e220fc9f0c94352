use crate::error::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::task_models::Task;

/// Owner-scoped task persistence. Every mutation carries the owner id in
/// its WHERE clause, so one user can never touch another user's rows, and
/// lifecycle guards (`deleted`, `finished`) are re-checked atomically by
/// the database at write time.
#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All rows for the owner, deleted ones included. Callers filter.
    pub async fn find_all(&self, owner_id: i64) -> Result<Vec<Task>> {
        let tasks =
            sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE owner_id = $1 ORDER BY id")
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(tasks)
    }

    pub async fn search_by_title(&self, owner_id: i64, fragment: &str) -> Result<Vec<Task>> {
        let pattern = format!("%{}%", fragment);
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE owner_id = $1 AND title ILIKE $2 ORDER BY id",
        )
        .bind(owner_id)
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    pub async fn create(
        &self,
        owner_id: i64,
        title: &str,
        content: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        color: &str,
    ) -> Result<Task> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (owner_id, title, content, start_date, end_date, color)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(owner_id)
        .bind(title)
        .bind(content)
        .bind(start_date)
        .bind(end_date)
        .bind(color)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    /// Edits a row in place. The update also clears both lifecycle flags:
    /// editing a finished or deleted task puts it back in play. Returns
    /// None when no row matches (id, owner_id).
    pub async fn update(
        &self,
        id: i64,
        owner_id: i64,
        title: &str,
        content: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        color: &str,
    ) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET
                title = $1,
                content = $2,
                start_date = $3,
                end_date = $4,
                color = $5,
                finished = FALSE,
                deleted = FALSE,
                updated_at = NOW()
             WHERE id = $6 AND owner_id = $7
             RETURNING *",
        )
        .bind(title)
        .bind(content)
        .bind(start_date)
        .bind(end_date)
        .bind(color)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    /// Logical delete. Matches only live rows, so a second delete (or a
    /// delete of a row that never existed) returns None.
    pub async fn mark_deleted(&self, id: i64, owner_id: i64) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET deleted = TRUE, updated_at = NOW()
             WHERE id = $1 AND owner_id = $2 AND deleted = FALSE
             RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    /// Single-shot completion. The guard matches only live, unfinished
    /// rows; of two racing calls at most one gets the row back.
    pub async fn mark_finished(&self, id: i64, owner_id: i64) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET finished = TRUE, updated_at = NOW()
             WHERE id = $1 AND owner_id = $2 AND deleted = FALSE AND finished = FALSE
             RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }
}
