//! TUI Views
//!
//! Rendering for the two routes plus the shared header and footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs},
};

use super::app::App;
use super::colors;
use super::route::Route;
use super::state::InputMode;
use crate::domain::{Priority, Todo, TodoFilter};
use crate::store::TodoStore;

/// Render the whole screen.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(3)])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    match app.state().route {
        Route::Todos => render_todos(app, frame, chunks[1]),
        Route::Stats => render_stats(app.store(), frame, chunks[1]),
    }
    render_footer(app, frame, chunks[2]);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let titles: Vec<&str> = Route::ALL.iter().map(|r| r.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.state().route.index())
        .highlight_style(Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" todos "));
    frame.render_widget(tabs, area);
}

fn render_todos(app: &App, frame: &mut Frame, area: Rect) {
    let store = app.store();
    let todos = store.filtered_todos();
    let now = store.now();

    let items: Vec<ListItem> = todos
        .iter()
        .map(|todo| todo_item(store, todo, now, app.date_format()))
        .collect();

    let title = format!(
        " {} of {} │ sort: {} │ {} ",
        todos.len(),
        store.all_todos().len(),
        store.sort_by(),
        describe_filter(store, store.filter())
    );

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !todos.is_empty() {
        list_state.select(Some(app.state().selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn todo_item(store: &TodoStore, todo: &Todo, now: chrono::DateTime<chrono::Utc>, date_format: &str) -> ListItem<'static> {
    let (mark, title_style) = if todo.completed {
        ("[x] ", Style::default().fg(colors::DIM).add_modifier(Modifier::CROSSED_OUT))
    } else {
        ("[ ] ", Style::default())
    };

    let mut spans = vec![
        Span::raw(mark),
        Span::styled(todo.title.clone(), title_style),
        Span::raw(" "),
        Span::styled(format!("({})", todo.priority), Style::default().fg(priority_color(todo.priority))),
    ];

    if let Some(category) = todo.category.as_deref().and_then(|id| store.category(id)) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            category.label(),
            Style::default().fg(colors::category(&category.color)),
        ));
    }

    if let Some(due) = todo.due_date {
        let style = if todo.is_overdue(now) {
            Style::default().fg(colors::OVERDUE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::DIM)
        };
        spans.push(Span::styled(format!("  due {}", due.format(date_format)), style));
    }

    ListItem::new(Line::from(spans))
}

/// Short description of the active filter for the list title.
pub fn describe_filter(store: &TodoStore, filter: &TodoFilter) -> String {
    if filter.is_empty() {
        return "all".to_string();
    }

    let mut parts = Vec::new();
    if let Some(id) = filter.category.as_deref().filter(|c| !c.is_empty()) {
        let name = store.category(id).map(|c| c.name.clone()).unwrap_or_else(|| id.to_string());
        parts.push(format!("category={}", name));
    }
    if let Some(priority) = filter.priority {
        parts.push(format!("priority={}", priority));
    }
    match filter.completed {
        Some(true) => parts.push("done".to_string()),
        Some(false) => parts.push("pending".to_string()),
        None => {}
    }
    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("search=\"{}\"", search));
    }
    if filter.overdue {
        parts.push("overdue".to_string());
    }
    parts.join(" ")
}

fn render_stats(store: &TodoStore, frame: &mut Frame, area: Rect) {
    let stats = store.stats();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let counts = vec![
        stat_line("Total", stats.total, Color::White),
        stat_line("Completed", stats.completed, colors::COMPLETE),
        stat_line("Pending", stats.pending, colors::PENDING),
        stat_line("Overdue", stats.overdue, colors::OVERDUE),
    ];
    let summary = Paragraph::new(counts).block(Block::default().borders(Borders::ALL).title(" Summary "));
    frame.render_widget(summary, chunks[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Completion "))
        .gauge_style(Style::default().fg(colors::COMPLETE))
        .percent(stats.completion_rate.min(100) as u16)
        .label(format!("{}%", stats.completion_rate));
    frame.render_widget(gauge, chunks[1]);

    let by_category: Vec<ListItem> = store
        .categories()
        .iter()
        .map(|category| {
            let in_category = store
                .all_todos()
                .iter()
                .filter(|t| t.category.as_deref() == Some(category.id.as_str()));
            let total = in_category.clone().count();
            let done = in_category.filter(|t| t.completed).count();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<20}", category.label()),
                    Style::default().fg(colors::category(&category.color)),
                ),
                Span::raw(format!("{}/{} done", done, total)),
            ]))
        })
        .collect();
    let categories = List::new(by_category).block(Block::default().borders(Borders::ALL).title(" By category "));
    frame.render_widget(categories, chunks[2]);
}

fn stat_line(label: &str, value: usize, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<10} ", label)),
        Span::styled(value.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.state();
    let line = match state.mode {
        InputMode::Normal => match &state.status {
            Some(status) => Line::from(Span::raw(status.clone())),
            None => keybind_hints(state.route),
        },
        mode => Line::from(vec![
            Span::styled(mode.prompt(), Style::default().fg(colors::KEYBIND)),
            Span::raw(state.input.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
    };
    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn keybind_hints(route: Route) -> Line<'static> {
    let binds: &[(&str, &str)] = match route {
        Route::Todos => &[
            ("a", "add"),
            ("space", "toggle"),
            ("d", "delete"),
            ("/", "search"),
            ("s", "sort"),
            ("p/c/f/o", "filter"),
            ("esc", "clear"),
            ("tab", "stats"),
            ("q", "quit"),
        ],
        Route::Stats => &[("tab", "todos"), ("q", "quit")],
    };

    let mut spans = Vec::new();
    for (key, action) in binds {
        spans.push(Span::styled(format!("<{}>", key), Style::default().fg(colors::KEYBIND)));
        spans.push(Span::raw(format!(" {}  ", action)));
    }
    Line::from(spans)
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => colors::OVERDUE,
        Priority::Medium => colors::PENDING,
        Priority::Low => colors::DIM,
    }
}
