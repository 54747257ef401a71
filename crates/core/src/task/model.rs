//! Task model definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Maximum number of tasks the widget holds at once
pub const MAX_TASKS: usize = 10;

/// Category assigned when none is given or the stored one is unusable
pub const DEFAULT_CATEGORY: Category = Category::Work;

/// Task category, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Leisure,
}

impl Default for Category {
    fn default() -> Self {
        DEFAULT_CATEGORY
    }
}

impl Category {
    /// Every category, in the order the widget renders them
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Leisure];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Leisure => "leisure",
        }
    }

    /// Heading shown above the category's group
    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Leisure => "Leisure",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Work => "📋",
            Self::Personal => "👤",
            Self::Leisure => "🎮",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parses a category id, accepting the ids older widget builds stored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "work" | "werk" => Ok(Self::Work),
            "personal" | "persoonlijk" => Ok(Self::Personal),
            "leisure" | "vrije-tijd" => Ok(Self::Leisure),
            other => Err(Error::InvalidInput(format!("Unknown category: {}", other))),
        }
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub category: Category,
}

impl Task {
    /// Create a new, not yet completed task in the default category
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            category: Category::default(),
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

/// A task as read back from the persisted slot.
///
/// `category` is optional and free-form here; records go through
/// [`StoredTask::normalize`] before they reach the collection.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredTask {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    #[serde(default)]
    pub category: Option<String>,
}

impl StoredTask {
    /// Map a stored record onto the enabled categories.
    ///
    /// Missing, unknown or disabled categories fall back to `default`.
    pub fn normalize(self, enabled: &[Category], default: Category) -> Task {
        let category = self
            .category
            .as_deref()
            .and_then(|raw| raw.parse::<Category>().ok())
            .filter(|category| enabled.contains(category))
            .unwrap_or(default);

        Task {
            id: self.id,
            text: self.text,
            completed: self.completed,
            category,
        }
    }
}
