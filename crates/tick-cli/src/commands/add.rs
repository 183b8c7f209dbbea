use anyhow::Result;
use tick_core::models::{validate_title, NewTaskData};
use tick_core::repository::TaskStore;

use crate::cli::AddCommand;

/// Joins the words with single spaces and checks the minimum length.
pub fn title_from_words(words: &[String]) -> Result<String, tick_core::error::CoreError> {
    let title = words.join(" ");
    validate_title(&title)?;
    Ok(title)
}

pub async fn add_task(store: &impl TaskStore, command: AddCommand) -> Result<()> {
    let title = title_from_words(&command.words)?;
    let task = store.add_task(NewTaskData::new(title)).await?;
    println!("Added task {}: '{}'", task.id, task.title);
    Ok(())
}
