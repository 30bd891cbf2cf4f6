use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::task::{Category, Priority};

/// Completion-status filter axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        };
        f.write_str(s)
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            _ => Err(format!(
                "invalid status '{}' (expected all, active, completed)",
                s
            )),
        }
    }
}

/// The active filter selection, persisted separately from tasks.
///
/// `None` on category/priority means "all". Every field defaults so that
/// partial or older persisted records still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterSelection {
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: StatusFilter,
}

impl FilterSelection {
    /// True when no axis narrows anything
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.priority.is_none() && self.status == StatusFilter::All
    }
}
