use crate::error::CoreError;
use crate::models::{NewTaskData, Priority, Task, TaskRow};
use crate::repository::SqliteTaskStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl super::TaskStore for SqliteTaskStore {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError> {
        let priority = data.priority.unwrap_or_default();
        let created_at = data.created_at.unwrap_or_else(Utc::now);

        // Write statements are drained with fetch_all so SQLite finishes the
        // statement and commits before the rows are handed back.
        let row: TaskRow = sqlx::query_as(
            r#"INSERT INTO tasks (title, done, created_at, priority)
            VALUES ($1, FALSE, $2, $3)
            RETURNING id, title, done, created_at, priority"#,
        )
        .bind(&data.title)
        .bind(created_at)
        .bind(priority.code())
        .fetch_all(self.pool())
        .await?
        .into_iter()
        .next()
        .ok_or(CoreError::Database(sqlx::Error::RowNotFound))?;

        tracing::debug!(id = row.id, title = %row.title, "task created");
        Ok(row.into_task())
    }

    async fn find_all_tasks(&self) -> Result<Vec<Task>, CoreError> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            "SELECT id, title, done, created_at, priority FROM tasks ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;

        tracing::debug!(count = rows.len(), "loaded all tasks");
        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    async fn find_tasks_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Task>, CoreError> {
        // created_at is stored as RFC 3339 text in UTC, so text comparison
        // follows time order. The bounds are bound as DateTime<Utc> to get the
        // same encoding.
        let rows: Vec<TaskRow> = sqlx::query_as(
            r#"SELECT id, title, done, created_at, priority FROM tasks
            WHERE created_at >= $1 AND created_at < $2
            ORDER BY id"#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.pool())
        .await?;

        tracing::debug!(%start, %end, count = rows.len(), "loaded tasks in window");
        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    async fn set_done(&self, id: i64, done: bool) -> Result<Task, CoreError> {
        let row: TaskRow = sqlx::query_as(
            r#"UPDATE tasks SET done = $1 WHERE id = $2
            RETURNING id, title, done, created_at, priority"#,
        )
        .bind(done)
        .bind(id)
        .fetch_all(self.pool())
        .await?
        .into_iter()
        .next()
        .ok_or(CoreError::NotFound(id))?;

        tracing::debug!(id, done, "task done flag updated");
        Ok(row.into_task())
    }

    async fn set_priority(&self, id: i64, priority: &str) -> Result<Task, CoreError> {
        let priority: Priority = priority.parse()?;

        let row: TaskRow = sqlx::query_as(
            r#"UPDATE tasks SET priority = $1 WHERE id = $2
            RETURNING id, title, done, created_at, priority"#,
        )
        .bind(priority.code())
        .bind(id)
        .fetch_all(self.pool())
        .await?
        .into_iter()
        .next()
        .ok_or(CoreError::NotFound(id))?;

        tracing::debug!(id, priority = %priority, "task priority updated");
        Ok(row.into_task())
    }
}
