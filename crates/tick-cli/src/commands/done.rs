use anyhow::Result;
use tick_core::repository::TaskStore;

/// Sets the done flag; a missing id is reported as an error, never as success.
pub async fn set_done(store: &impl TaskStore, id: i64, done: bool) -> Result<()> {
    let task = store.set_done(id, done).await?;
    if task.done {
        println!("Marked task {} as done", task.id);
    } else {
        println!("Marked task {} as not done", task.id);
    }
    Ok(())
}
