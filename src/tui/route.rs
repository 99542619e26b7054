//! Path-addressed views.
//!
//! Two views exist: the todo list at `/` and statistics at `/stats`.

use std::fmt;
use std::str::FromStr;

use crate::error::TodoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Filterable todo list
    #[default]
    Todos,
    /// Aggregate statistics
    Stats,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Todos, Route::Stats];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Todos => "/",
            Route::Stats => "/stats",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Todos => "todos",
            Route::Stats => "stats",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Todos => "Todos",
            Route::Stats => "Stats",
        }
    }

    /// Resolve a path. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            Route::Todos => Route::Stats,
            Route::Stats => Route::Todos,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Route::Todos => 0,
            Route::Stats => 1,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Route {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| TodoError::RouteNotFound(s.to_string()))
    }
}
