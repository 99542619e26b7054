use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::{CategoryCommands, Commands};
use cli::render;
use todos::TodoError;
use todos::clock::SystemClock;
use todos::config::Config;
use todos::domain::{NewCategory, NewTodo, Priority, TodoSort};
use todos::store::TodoStore;
use todos::tui::Route;

fn setup_logging(level: Option<LevelFilter>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todos")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("todos.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let mut builder = env_logger::Builder::new();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    // RUST_LOG wins over the configured level
    builder
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn open_store(config: &Config) -> Result<TodoStore> {
    let storage = todos::storage::open(&config.storage).context("Failed to open storage")?;
    let mut store = TodoStore::open(storage, Box::new(SystemClock));
    store.set_sort(config.view.default_sort);
    Ok(store)
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let mut store = open_store(config)?;

    match &cli.command {
        None => run_tui(store, "/", config),
        Some(Commands::Open { path }) => run_tui(store, path, config),
        Some(Commands::Add {
            title,
            description,
            priority,
            category,
            due,
        }) => handle_add_command(
            &mut store,
            title,
            description.as_deref(),
            *priority,
            category.as_deref(),
            *due,
            config,
        ),
        Some(command @ Commands::Edit { id, .. }) => {
            let patch = command.edit_patch().unwrap_or_default();
            handle_edit_command(&mut store, id, patch, config)
        }
        Some(Commands::Toggle { id }) => handle_toggle_command(&mut store, id, config),
        Some(Commands::Delete { id }) => handle_delete_command(&mut store, id),
        Some(command @ Commands::List { sort, .. }) => {
            if let Some(filter) = command.list_filter() {
                store.set_filter(filter);
            }
            handle_list_command(&mut store, *sort, config)
        }
        Some(Commands::Stats) => handle_stats_command(&store),
        Some(Commands::Category { command }) => handle_category_command(&mut store, command),
    }
}

fn run_tui(store: TodoStore, path: &str, config: &Config) -> Result<()> {
    let route = Route::from_path(path).ok_or_else(|| TodoError::RouteNotFound(path.to_string()))?;
    info!("Launching TUI on {}", route);
    let store = todos::tui::run(store, route, config.view.tick_rate_ms, &config.view.date_format)?;
    info!("TUI exited with {} todos", store.all_todos().len());
    Ok(())
}

fn print_todo(store: &TodoStore, todo: &todos::domain::Todo, config: &Config) {
    let category = todo.category.as_deref().and_then(|id| store.category(id));
    println!(
        "{}",
        render::todo_line(todo, category, store.now(), &config.view.date_format)
    );
}

fn handle_add_command(
    store: &mut TodoStore,
    title: &str,
    description: Option<&str>,
    priority: Option<Priority>,
    category: Option<&str>,
    due: Option<chrono::DateTime<chrono::Utc>>,
    config: &Config,
) -> Result<()> {
    let mut data = NewTodo::new(title).priority(priority.unwrap_or_default());
    data.description = description.map(String::from);
    data.category = category.map(String::from);
    data.due_date = due;

    let todo = store.add_todo(data);
    println!("{} {}", "Added".green(), todo.id);
    print_todo(store, &todo, config);
    Ok(())
}

fn handle_edit_command(
    store: &mut TodoStore,
    id: &str,
    patch: todos::domain::TodoPatch,
    config: &Config,
) -> Result<()> {
    if patch.is_empty() {
        store.todo(id).ok_or_else(|| TodoError::TodoNotFound(id.to_string()))?;
        println!("{}", "Nothing to change".yellow());
        return Ok(());
    }
    let todo = store
        .update_todo(id, patch)
        .ok_or_else(|| TodoError::TodoNotFound(id.to_string()))?;
    print_todo(store, &todo, config);
    Ok(())
}

fn handle_toggle_command(store: &mut TodoStore, id: &str, config: &Config) -> Result<()> {
    let todo = store
        .toggle_todo(id)
        .ok_or_else(|| TodoError::TodoNotFound(id.to_string()))?;
    print_todo(store, &todo, config);
    Ok(())
}

fn handle_delete_command(store: &mut TodoStore, id: &str) -> Result<()> {
    let todo = store
        .delete_todo(id)
        .ok_or_else(|| TodoError::TodoNotFound(id.to_string()))?;
    println!("{} {}", "Deleted".red(), todo.title);
    Ok(())
}

fn handle_list_command(store: &mut TodoStore, sort: Option<TodoSort>, config: &Config) -> Result<()> {
    if let Some(sort) = sort {
        store.set_sort(sort);
    }

    let todos = store.filtered_todos();
    if todos.is_empty() {
        println!("{}", "No todos".dimmed());
        return Ok(());
    }
    for todo in &todos {
        print_todo(store, todo, config);
    }
    println!(
        "{}",
        format!("{} of {} │ sort: {}", todos.len(), store.all_todos().len(), store.sort_by()).dimmed()
    );
    Ok(())
}

fn handle_stats_command(store: &TodoStore) -> Result<()> {
    println!("{}", render::stats_block(&store.stats()));
    Ok(())
}

fn handle_category_command(store: &mut TodoStore, command: &CategoryCommands) -> Result<()> {
    match command {
        CategoryCommands::List => {
            for category in store.categories() {
                let count = store
                    .all_todos()
                    .iter()
                    .filter(|t| t.category.as_deref() == Some(category.id.as_str()))
                    .count();
                println!("{}", render::category_line(category, count));
            }
        }
        CategoryCommands::Add { name, color, icon } => {
            let mut data = NewCategory::new(name.as_str(), color.as_str());
            data.icon = icon.clone();
            let category = store.add_category(data);
            println!("{} {}", "Added category".green(), category.id);
        }
        CategoryCommands::Delete { id } => {
            let category = store
                .delete_category(id)
                .ok_or_else(|| TodoError::CategoryNotFound(id.to_string()))?;
            println!("{} {}", "Deleted category".red(), category.label());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let level = if cli.is_verbose() {
        Some(LevelFilter::Debug)
    } else {
        config.log_level_filter()
    };
    setup_logging(level).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
