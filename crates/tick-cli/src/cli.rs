use clap::{CommandFactory, Parser, Subcommand};

/// A small daily task tracker
#[derive(Parser, Debug)]
#[command(name = "tick", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// List today's tasks
    List(ListCommand),
    /// Mark a task as done
    Done(DoneCommand),
    /// Mark a task as not done
    Undone(UndoneCommand),
    /// Set the priority of a task
    Prio(PrioCommand),
}

/// Parses the process arguments, exiting on failure.
///
/// Argument errors always end with the usage line, including value errors
/// such as a non-numeric id, which clap reports without it.
pub fn parse_or_exit() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if !err.use_stderr() {
                err.exit();
            }
            let _ = err.print();
            if let Some(usage) = usage_hint(&err) {
                eprintln!("\n{usage}");
            }
            std::process::exit(err.exit_code());
        }
    }
}

/// The usage line to append to `err`, unless clap already printed one.
fn usage_hint(err: &clap::Error) -> Option<String> {
    if err.render().to_string().contains("Usage:") {
        return None;
    }
    Some(Cli::command().render_usage().to_string())
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task, joined with single spaces
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// List every task instead of only today's
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to mark as done
    #[arg(allow_negative_numbers = true)]
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct UndoneCommand {
    /// The ID of the task to mark as not done
    #[arg(allow_negative_numbers = true)]
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct PrioCommand {
    /// The ID of the task
    #[arg(allow_negative_numbers = true)]
    pub id: i64,
    /// H (high), M (medium) or L (low), case-insensitive
    pub value: String,
}
