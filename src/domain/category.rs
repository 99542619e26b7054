//! Category record and the built-in seed set

use serde::{Deserialize, Serialize};

/// A user-defined label applicable to todos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Color token (`primary`, `secondary`, `accent`, `success`, ...)
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    /// Name prefixed with the icon, if there is one.
    pub fn label(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.name),
            None => self.name.clone(),
        }
    }
}

/// Input for creating a category: everything except the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub icon: Option<String>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub(crate) fn into_category(self, id: String) -> Category {
        Category {
            id,
            name: self.name,
            color: self.color,
            icon: self.icon,
        }
    }
}

/// Categories present before anything has been stored.
pub fn default_categories() -> Vec<Category> {
    [
        ("1", "Personal", "primary", "👤"),
        ("2", "Work", "secondary", "💼"),
        ("3", "Shopping", "accent", "🛒"),
        ("4", "Health", "success", "🏥"),
    ]
    .into_iter()
    .map(|(id, name, color, icon)| Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        icon: Some(icon.to_string()),
    })
    .collect()
}
