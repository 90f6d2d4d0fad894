use crate::libs::engine;
use crate::libs::operations::TaskOperations;
use crate::libs::task::{SortOrder, TaskFilter};
use crate::libs::view::View;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Active,
    Completed,
    Today,
    Week,
    Month,
    Custom,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Created,
    Modified,
    Due,
    Title,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Completion/date filter
    #[arg(short, long, value_enum, default_value = "all")]
    filter: FilterArg,
    /// Start of a custom due-date range (YYYY-MM-DD, inclusive)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// End of a custom due-date range (YYYY-MM-DD, inclusive)
    #[arg(long)]
    to: Option<NaiveDate>,
    /// Only tasks in this category
    #[arg(short, long)]
    category: Option<String>,
    /// Sort order
    #[arg(short, long, value_enum, default_value = "created")]
    sort: SortArg,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let filter = match args.filter {
        FilterArg::All => TaskFilter::All,
        FilterArg::Active => TaskFilter::Active,
        FilterArg::Completed => TaskFilter::Completed,
        FilterArg::Today => TaskFilter::Today,
        FilterArg::Week => TaskFilter::ThisWeek,
        FilterArg::Month => TaskFilter::ThisMonth,
        FilterArg::Custom => TaskFilter::Custom {
            start: args.from,
            end: args.to,
        },
    };
    let sort = match args.sort {
        SortArg::Created => SortOrder::DateCreated,
        SortArg::Modified => SortOrder::DateModified,
        SortArg::Due => SortOrder::DueDate,
        SortArg::Title => SortOrder::Title,
    };

    let ops = TaskOperations::new()?;
    let tasks = ops.get_tasks(&filter, args.category.as_deref()).snapshot()?;
    let displayed = engine::apply(&tasks, &filter, args.category.as_deref(), sort);
    View::tasks(&displayed);

    Ok(())
}
