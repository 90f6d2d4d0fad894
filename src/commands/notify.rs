use crate::libs::config::Config;
use crate::libs::notifier::{DueSoonNotifier, LogSink};
use crate::libs::operations::TaskOperations;
use anyhow::Result;
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct NotifyArgs {
    /// Keep running and re-check on the configured period
    #[arg(short, long)]
    watch: bool,
}

pub async fn cmd(args: NotifyArgs) -> Result<()> {
    let notify = Config::read()?.notify();
    let ops = TaskOperations::new()?;
    let notifier = DueSoonNotifier::with_window(ops, LogSink, Duration::hours(notify.window_hours));

    if !args.watch {
        let delivered = notifier.run_once()?;
        println!("🔔 {} reminder(s) delivered", delivered);
        return Ok(());
    }

    // Warm-up run at start, then the periodic cadence. A failed run is
    // logged and skipped; the loop waits for the next tick.
    let period = std::time::Duration::from_secs(notify.period_hours * 3600);
    let mut interval = tokio::time::interval(period);
    println!("🔔 Watching for due tasks every {}h (Ctrl-C to stop)", notify.period_hours);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                match notifier.run_once() {
                    Ok(delivered) => tracing::info!(delivered, "due-soon run finished"),
                    Err(err) => tracing::error!(error = %err, "due-soon run failed"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("Stopped");
                return Ok(());
            }
        }
    }
}
