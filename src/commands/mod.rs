pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod list;
pub mod notify;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks with filtering and sorting")]
    List(list::ListArgs),
    #[command(about = "Edit an existing task")]
    Edit(edit::EditArgs),
    #[command(about = "Toggle task completion")]
    Done(done::DoneArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Remind about tasks due within 24 hours")]
    Notify(notify::NotifyArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Notify(args) => notify::cmd(args).await,
        }
    }
}

/// Parses a due date given as `YYYY-MM-DD HH:MM` or `YYYY-MM-DD` (midnight)
/// in the local time zone.
pub(crate) fn parse_due(raw: &str) -> Result<DateTime<Utc>> {
    let local = if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        dt
    } else {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| anyhow!("Invalid due date '{}': expected YYYY-MM-DD or YYYY-MM-DD HH:MM", raw))?;
        date.and_hms_opt(0, 0, 0).ok_or_else(|| anyhow!("Invalid due date '{}'", raw))?
    };
    Local
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("Ambiguous local time '{}'", raw))
}

/// Splits a comma-separated tag argument, dropping blank tokens.
pub(crate) fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty()).map(str::to_string).collect()
}
