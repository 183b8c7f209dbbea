use anyhow::Result;
use tick_core::repository::TaskStore;

use crate::cli::PrioCommand;

/// Trims and upper-cases user input so `h` reaches the store as `H`.
pub fn normalize_priority(value: &str) -> String {
    value.trim().to_uppercase()
}

pub async fn set_priority(store: &impl TaskStore, command: PrioCommand) -> Result<()> {
    let value = normalize_priority(&command.value);
    let task = store.set_priority(command.id, &value).await?;
    println!("Set priority of task {} to {}", task.id, task.priority);
    Ok(())
}
