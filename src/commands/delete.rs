use crate::libs::operations::TaskOperations;
use anyhow::Result;
use clap::Args;
use dialoguer::Confirm;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the task to delete
    #[arg(required = true)]
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let ops = TaskOperations::new()?;

    match ops.get_task(args.id)? {
        Some(task) => {
            if !args.yes && !Confirm::new().with_prompt(format!("Delete task '{}'?", task.title)).interact()? {
                println!("Cancelled");
                return Ok(());
            }
            ops.delete_task(args.id)?;
            println!("✅ Task {} deleted", args.id);
        }
        // Hard delete is idempotent; nothing to do for an unknown id.
        None => println!("Task {} not found, nothing deleted", args.id),
    }

    Ok(())
}
