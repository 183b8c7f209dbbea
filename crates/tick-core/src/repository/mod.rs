use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{NewTaskData, Task};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub mod tasks;

/// Persistence contract consumed by the command handlers.
#[async_trait]
pub trait TaskStore {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError>;
    async fn find_all_tasks(&self) -> Result<Vec<Task>, CoreError>;
    /// Tasks with `start <= created_at < end`.
    async fn find_tasks_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Task>, CoreError>;
    async fn set_done(&self, id: i64, done: bool) -> Result<Task, CoreError>;
    /// `priority` must be exactly `H`, `M` or `L`.
    async fn set_priority(&self, id: i64, priority: &str) -> Result<Task, CoreError>;
}

/// SQLite implementation of the task store
pub struct SqliteTaskStore {
    pool: DbPool,
}

impl SqliteTaskStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
