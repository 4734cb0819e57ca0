use std::fmt;
use thiserror::Error;

/// Task priority levels.
///
/// `None` is the sentinel produced by invalid user input. It is never stored
/// in a queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
    None,
}

impl Priority {
    /// The storable tiers, in announce order
    pub const TIERS: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Map a menu selector (`1`, `2`, `3`) onto a priority.
    ///
    /// Any other number maps to `None`.
    pub fn from_number(selector: i64) -> Self {
        match selector {
            1 => Priority::High,
            2 => Priority::Medium,
            3 => Priority::Low,
            _ => Priority::None,
        }
    }

    /// Upper-case label used in announce and list output
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
            Priority::None => "NONE",
        }
    }

    /// Header printed above this tier in a listing. `None` has no tier.
    pub fn header(&self) -> Option<&'static str> {
        match self {
            Priority::High => Some("High Priority Tasks:"),
            Priority::Medium => Some("Medium Priority Tasks:"),
            Priority::Low => Some("Low Priority Tasks:"),
            Priority::None => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A pending task. Identity is the description text alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    description: String,
    priority: Priority,
}

impl Task {
    pub fn new(description: impl Into<String>, priority: Priority) -> Self {
        Self {
            description: description.into(),
            priority,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Exact, case-sensitive description match used by removal
    pub fn matches(&self, description: &str) -> bool {
        self.description == description
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [Priority: {}]", self.description, self.priority)
    }
}

/// Errors returned by task manager operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Invalid priority {priority} for task '{description}'")]
    InvalidPriority {
        description: String,
        priority: Priority,
    },
}
