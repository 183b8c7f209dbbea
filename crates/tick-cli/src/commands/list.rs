use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tick_core::models::Task;
use tick_core::organize::organize;
use tick_core::repository::TaskStore;
use tick_core::timezone::day_bounds;

use crate::cli::ListCommand;
use crate::views::table::display_tasks;

/// Fetches the tasks for the list command, already in display order.
pub async fn collect_tasks(
    store: &impl TaskStore,
    command: &ListCommand,
    tz: Tz,
    now: DateTime<Utc>,
) -> Result<Vec<Task>> {
    let tasks = if command.all {
        store.find_all_tasks().await?
    } else {
        let (start, end) = day_bounds(tz, now);
        tracing::debug!(%tz, %start, %end, "listing today's tasks");
        store.find_tasks_created_between(start, end).await?
    };
    Ok(organize(tasks))
}

pub async fn list_tasks(store: &impl TaskStore, command: ListCommand, tz: Tz) -> Result<()> {
    let tasks = collect_tasks(store, &command, tz, Utc::now()).await?;
    display_tasks(&tasks);
    Ok(())
}
