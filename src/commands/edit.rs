use crate::libs::operations::TaskOperations;
use anyhow::{anyhow, Result};
use clap::Args;
use dialoguer::Input;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the task to edit
    #[arg(required = true)]
    id: i64,
    /// New title (prompted interactively when omitted)
    #[arg(long)]
    title: Option<String>,
    /// New description
    #[arg(short, long)]
    description: Option<String>,
    /// New due date: YYYY-MM-DD or "YYYY-MM-DD HH:MM" (local time)
    #[arg(long)]
    due: Option<String>,
    /// New category
    #[arg(short, long)]
    category: Option<String>,
    /// New comma-separated tags
    #[arg(short, long)]
    tags: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let ops = TaskOperations::new()?;
    let mut task = ops.get_task(args.id)?.ok_or_else(|| anyhow!("Task with id {} not found", args.id))?;

    task.title = match args.title {
        Some(title) => title,
        None => Input::new().with_prompt("Title").default(task.title.clone()).interact_text()?,
    };
    if let Some(description) = args.description {
        task.description = Some(description);
    }
    if let Some(due) = args.due.as_deref() {
        task.due_date = Some(super::parse_due(due)?);
    }
    if let Some(category) = args.category {
        task.category = Some(category);
    }
    if let Some(tags) = args.tags.as_deref() {
        task.tags = super::parse_tags(tags);
    }

    ops.update_task(&task)?;
    println!("✅ Task {} updated", task.id);

    Ok(())
}
