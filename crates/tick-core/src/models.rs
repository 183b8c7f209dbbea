use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::CoreError;

/// Shortest title accepted by `add`, counted in characters.
pub const MIN_TITLE_LEN: usize = 4;

/// Task priority as stored in the `priority` column.
///
/// Writes through the store only ever produce `H`, `M` or `L`. Anything else
/// found in the table is kept verbatim in `Unrecognized` so it can still be
/// listed (it sorts with the low bucket).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
    Unrecognized(String),
}

impl Priority {
    pub fn code(&self) -> &str {
        match self {
            Priority::High => "H",
            Priority::Medium => "M",
            Priority::Low => "L",
            Priority::Unrecognized(raw) => raw,
        }
    }

    /// Lenient decoding used when reading rows back.
    pub fn from_code(code: &str) -> Self {
        code.parse()
            .unwrap_or_else(|_| Priority::Unrecognized(code.to_string()))
    }

    /// Bucket position in the list: high, medium, then everything else.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low | Priority::Unrecognized(_) => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

impl From<ParseTaskPriorityError> for CoreError {
    fn from(err: ParseTaskPriorityError) -> Self {
        CoreError::InvalidPriority(err.0)
    }
}

/// Strict parsing: exactly `H`, `M` or `L`. Callers normalize case first.
impl FromStr for Priority {
    type Err = ParseTaskPriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Priority::High),
            "M" => Ok(Priority::Medium),
            "L" => Ok(Priority::Low),
            _ => Err(ParseTaskPriorityError(s.to_string())),
        }
    }
}

impl From<String> for Priority {
    fn from(code: String) -> Self {
        Priority::from_code(&code)
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.code().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub priority: Priority,
}

/// Raw row shape of the `tasks` table.
#[derive(Debug, FromRow)]
pub(crate) struct TaskRow {
    pub id: i64,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub priority: String,
}

impl TaskRow {
    pub(crate) fn into_task(self) -> Task {
        Task {
            id: self.id,
            title: self.title,
            done: self.done,
            created_at: self.created_at,
            priority: Priority::from_code(&self.priority),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewTaskData {
    pub title: String,
    /// Defaults to `Priority::Low`.
    pub priority: Option<Priority>,
    /// Defaults to the time of insertion.
    pub created_at: Option<DateTime<Utc>>,
}

impl NewTaskData {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Rejects titles shorter than [`MIN_TITLE_LEN`] characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(CoreError::InvalidInput(format!(
            "Title must be at least {} characters long, got '{}'",
            MIN_TITLE_LEN, title
        )));
    }
    Ok(())
}
