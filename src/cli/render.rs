//! Plain-text rendering for the non-interactive commands.

use chrono::{DateTime, Utc};
use colored::*;

use todos::domain::{Category, Priority, Todo, TodoStats};

/// Paint `text` with the terminal color for a category color token.
pub fn paint_category(text: &str, token: &str) -> ColoredString {
    match token {
        "primary" => text.blue(),
        "secondary" => text.magenta(),
        "accent" => text.yellow(),
        "success" => text.green(),
        "warning" => text.bright_red(),
        "error" => text.red(),
        "info" => text.cyan(),
        _ => text.normal(),
    }
}

fn paint_priority(priority: Priority) -> ColoredString {
    let label = format!("[{}]", priority);
    match priority {
        Priority::High => label.red().bold(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.dimmed(),
    }
}

/// One line per todo: checkbox, title, priority, category, due date, id.
pub fn todo_line(todo: &Todo, category: Option<&Category>, now: DateTime<Utc>, date_format: &str) -> String {
    let check = if todo.completed {
        "[x]".green()
    } else {
        "[ ]".normal()
    };
    let title = if todo.completed {
        todo.title.dimmed().strikethrough()
    } else {
        todo.title.bold()
    };

    let mut line = format!("{} {} {}", check, title, paint_priority(todo.priority));

    if let Some(cat) = category {
        line.push_str(&format!(" {}", paint_category(&cat.label(), &cat.color)));
    } else if let Some(id) = &todo.category {
        line.push_str(&format!(" {}", format!("#{}", id).dimmed()));
    }

    if let Some(due) = todo.due_date {
        let text = format!("due {}", due.format(date_format));
        if todo.is_overdue(now) {
            line.push_str(&format!(" {} {}", text.red(), "OVERDUE".red().bold()));
        } else {
            line.push_str(&format!(" {}", text.cyan()));
        }
    }

    line.push_str(&format!("  {}", todo.id.dimmed()));
    line
}

/// Multi-line statistics summary.
pub fn stats_block(stats: &TodoStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Statistics".bold()));
    out.push_str(&format!("  Total:     {}\n", stats.total));
    out.push_str(&format!("  Completed: {}\n", stats.completed.to_string().green()));
    out.push_str(&format!("  Pending:   {}\n", stats.pending.to_string().yellow()));
    let overdue = if stats.overdue > 0 {
        stats.overdue.to_string().red().bold()
    } else {
        stats.overdue.to_string().normal()
    };
    out.push_str(&format!("  Overdue:   {}\n", overdue));
    out.push_str(&format!("  Progress:  {}%", stats.completion_rate));
    out
}

/// `id  label  (color)  N todos`
pub fn category_line(category: &Category, todo_count: usize) -> String {
    format!(
        "{:>4}  {}  {}  {}",
        category.id,
        paint_category(&category.label(), &category.color),
        format!("({})", category.color).dimmed(),
        format!("{} todos", todo_count).dimmed()
    )
}
