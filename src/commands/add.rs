use crate::libs::operations::TaskOperations;
use crate::libs::task::NewTask;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Longer description
    #[arg(short, long)]
    description: Option<String>,
    /// Due date: YYYY-MM-DD or "YYYY-MM-DD HH:MM" (local time)
    #[arg(long)]
    due: Option<String>,
    /// Category (suggestions: Work, Personal, Shopping, Health, Education)
    #[arg(short, long)]
    category: Option<String>,
    /// Comma-separated tags
    #[arg(short, long)]
    tags: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let due_date = args.due.as_deref().map(super::parse_due).transpose()?;
    let fields = NewTask {
        title: args.title.clone(),
        description: args.description,
        due_date,
        category: args.category,
        tags: args.tags.as_deref().map(super::parse_tags).unwrap_or_default(),
    };

    TaskOperations::new()?.add_task(&fields)?;
    println!("✅ Task created: {}", args.title);

    Ok(())
}
