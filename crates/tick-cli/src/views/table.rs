use comfy_table::{Attribute, Cell, Color, Row, Table};
use tick_core::models::{Priority, Task};

const ORANGE: Color = Color::AnsiValue(208);

/// Builds the task table. Expects tasks already in display order.
pub fn task_table(tasks: &[Task]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Done"]);

    for task in tasks {
        let color = row_color(task);
        let mut row = Row::new();
        for text in [
            task.id.to_string(),
            task.title.clone(),
            if task.done { "Yes" } else { "No" }.to_string(),
        ] {
            let mut cell = Cell::new(text);
            if let Some(color) = color {
                cell = cell.fg(color);
            }
            if task.priority == Priority::High && !task.done {
                cell = cell.add_attribute(Attribute::Bold);
            }
            row.add_cell(cell);
        }
        table.add_row(row);
    }

    table
}

fn row_color(task: &Task) -> Option<Color> {
    if task.done {
        return Some(Color::Green);
    }
    match task.priority {
        Priority::High => Some(Color::Red),
        Priority::Medium => Some(ORANGE),
        Priority::Low => Some(Color::Yellow),
        Priority::Unrecognized(_) => None,
    }
}

pub fn display_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    println!("{}", task_table(tasks));
}
