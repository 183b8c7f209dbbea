use clap::CommandFactory;
use owo_colors::{OwoColorize, Style};
use tick_core::db;
use tick_core::error::CoreError;
use tick_core::repository::SqliteTaskStore;

mod cli;
mod commands;
mod config;
mod logging;
mod views;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let cli = cli::parse_or_exit();

    let config = match config::Config::new() {
        Ok(config) => config,
        Err(e) => fail(&format!("could not load configuration: {e}")),
    };
    tracing::debug!(?config, "configuration loaded");

    let db_pool = match db::establish_connection(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => fail(&describe(&e)),
    };
    let store = SqliteTaskStore::new(db_pool.clone());

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(&store, command).await,
        cli::Commands::List(command) => match config.timezone() {
            Ok(tz) => commands::list::list_tasks(&store, command, tz).await,
            Err(e) => Err(e),
        },
        cli::Commands::Done(command) => commands::done::set_done(&store, command.id, true).await,
        cli::Commands::Undone(command) => {
            commands::done::set_done(&store, command.id, false).await
        }
        cli::Commands::Prio(command) => commands::prio::set_priority(&store, command).await,
    };

    // Closing the pool lets pending writes reach the file before the process ends.
    db_pool.close().await;

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(core_error) if core_error.is_validation() => {
            eprintln!("{} {}", "Error:".style(error_style), core_error);
            eprintln!("{}", cli::Cli::command().render_usage());
        }
        Some(core_error) => {
            eprintln!("{} {}", "Error:".style(error_style), describe(core_error));
        }
        None => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}

/// The error message followed by its underlying cause, if any.
fn describe(err: &CoreError) -> String {
    match std::error::Error::source(err) {
        Some(source) => format!("{err}: {source}"),
        None => err.to_string(),
    }
}

fn fail(message: &str) -> ! {
    let error_style = Style::new().red().bold();
    eprintln!("{} {}", "Error:".style(error_style), message);
    std::process::exit(1);
}
