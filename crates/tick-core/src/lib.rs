//! # Tick Core Library
//!
//! Storage and ordering for a small daily task tracker.
//!
//! ## Core Modules
//!
//! - [`db`]: SQLite connection and migrations
//! - [`models`]: the `Task` record, priorities and title validation
//! - [`repository`]: the [`repository::TaskStore`] contract and its SQLite implementation
//! - [`organize`]: display ordering for the task list
//! - [`timezone`]: local-day boundaries for "today's tasks"
//! - [`error`]: error type shared by all of the above
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tick_core::{
//!     db, models::NewTaskData, organize::organize,
//!     repository::{SqliteTaskStore, TaskStore},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = db::establish_connection("tick.db").await?;
//!     let store = SqliteTaskStore::new(pool);
//!
//!     store.add_task(NewTaskData::new("Water the plants")).await?;
//!
//!     for task in organize(store.find_all_tasks().await?) {
//!         println!("{} {}", task.id, task.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod models;
pub mod organize;
pub mod repository;
pub mod timezone;
