use crate::libs::task::Task;
use chrono::Local;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders a task list as a console table.
    pub fn tasks(tasks: &[Task]) {
        if tasks.is_empty() {
            println!("No tasks.");
            return;
        }

        let mut table = Table::new();
        table.add_row(row!["ID", "TITLE", "CATEGORY", "TAGS", "DUE", "DONE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.category.as_deref().unwrap_or("-"),
                task.tags.join(", "),
                task.due_date
                    .map(|d| d.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string()),
                if task.is_completed { "✓" } else { "" }
            ]);
        }
        table.printstd();
    }
}
