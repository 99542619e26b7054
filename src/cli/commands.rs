//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - open: launch the TUI on a route (`/` or `/stats`)
//! - add / edit / toggle / delete: todo operations
//! - list / stats: plain-text views
//! - category: list, add, delete categories

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use todos::domain::{Priority, TodoFilter, TodoPatch, TodoSort};

/// todos - a local task manager
#[derive(Parser, Debug)]
#[command(name = "todos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the terminal UI on a view
    Open {
        /// View path: "/" for todos, "/stats" for statistics
        #[arg(default_value = "/")]
        path: String,
    },

    /// Add a new todo
    Add {
        /// Todo title
        title: String,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,

        /// Priority (low, medium, high)
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// Category id
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Due date (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_due_date)]
        due: Option<DateTime<Utc>>,
    },

    /// Change fields of an existing todo
    Edit {
        /// Todo ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long, conflicts_with = "clear_description")]
        description: Option<String>,

        /// Remove the description
        #[arg(long)]
        clear_description: bool,

        /// New priority (low, medium, high)
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// New category id
        #[arg(short = 'C', long, conflicts_with = "clear_category")]
        category: Option<String>,

        /// Remove the category
        #[arg(long)]
        clear_category: bool,

        /// New due date (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_due_date, conflicts_with = "clear_due")]
        due: Option<DateTime<Utc>>,

        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },

    /// Flip a todo between done and pending
    Toggle {
        /// Todo ID
        id: String,
    },

    /// Delete a todo
    Delete {
        /// Todo ID
        id: String,
    },

    /// List todos
    List {
        /// Only this category id
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Only this priority
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// Only completed todos
        #[arg(long, conflicts_with = "pending")]
        done: bool,

        /// Only pending todos
        #[arg(long)]
        pending: bool,

        /// Case-insensitive text in title or description
        #[arg(short, long)]
        search: Option<String>,

        /// Only overdue todos
        #[arg(long)]
        overdue: bool,

        /// Sort mode (createdAt, dueDate, priority, title)
        #[arg(long, value_parser = parse_sort)]
        sort: Option<TodoSort>,
    },

    /// Show statistics
    Stats,

    /// Category management
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
}

/// Category subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum CategoryCommands {
    /// List categories
    List,

    /// Add a category
    Add {
        /// Category name
        name: String,

        /// Color token (primary, secondary, accent, success, ...)
        #[arg(long, default_value = "primary")]
        color: String,

        /// Icon glyph
        #[arg(long)]
        icon: Option<String>,
    },

    /// Delete a category; its todos keep existing without it
    Delete {
        /// Category ID
        id: String,
    },
}

impl Commands {
    /// Build the store filter from `list` flags.
    pub fn list_filter(&self) -> Option<TodoFilter> {
        match self {
            Commands::List {
                category,
                priority,
                done,
                pending,
                search,
                overdue,
                ..
            } => Some(TodoFilter {
                category: category.clone(),
                priority: *priority,
                completed: if *done {
                    Some(true)
                } else if *pending {
                    Some(false)
                } else {
                    None
                },
                search: search.clone(),
                overdue: *overdue,
            }),
            _ => None,
        }
    }

    /// Build the patch from `edit` flags.
    pub fn edit_patch(&self) -> Option<TodoPatch> {
        match self {
            Commands::Edit {
                title,
                description,
                clear_description,
                priority,
                category,
                clear_category,
                due,
                clear_due,
                ..
            } => {
                let mut patch = TodoPatch::new();
                patch.title = title.clone();
                patch.priority = *priority;
                if *clear_description {
                    patch.description = Some(None);
                } else if let Some(d) = description {
                    patch.description = Some(Some(d.clone()));
                }
                if *clear_category {
                    patch.category = Some(None);
                } else if let Some(c) = category {
                    patch.category = Some(Some(c.clone()));
                }
                if *clear_due {
                    patch.due_date = Some(None);
                } else if let Some(d) = due {
                    patch.due_date = Some(Some(*d));
                }
                Some(patch)
            }
            _ => None,
        }
    }
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    s.parse().map_err(|e: todos::TodoError| e.to_string())
}

fn parse_sort(s: &str) -> Result<TodoSort, String> {
    s.parse().map_err(|e: todos::TodoError| e.to_string())
}

/// Parse a due date given as RFC 3339 or as a plain date (midnight UTC).
pub fn parse_due_date(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid date '{}': expected YYYY-MM-DD or RFC 3339", s))
}
