use crate::libs::operations::TaskOperations;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Id of the task to toggle
    #[arg(required = true)]
    id: i64,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let ops = TaskOperations::new()?;
    ops.toggle_task_completion(args.id)?;

    let state = match ops.get_task(args.id)? {
        Some(task) if task.is_completed => "completed",
        _ => "reopened",
    };
    println!("✅ Task {} {}", args.id, state);

    Ok(())
}
