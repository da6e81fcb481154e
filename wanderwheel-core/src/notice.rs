//! Transient user-facing notices.
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const INSUFFICIENT_SELECTION_MESSAGE: &str = "You need to select at least 2 countries!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
}

impl NoticeLevel {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Warning => "notice--warning",
        }
    }
}

/// A corner notification that dismisses itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub level: NoticeLevel,
    pub dismiss_after: Duration,
}

impl Notice {
    #[must_use]
    pub fn warning(message: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            title: String::from("Warning"),
            message: message.into(),
            level: NoticeLevel::Warning,
            dismiss_after,
        }
    }

    /// The notice shown when a pick is attempted with too few countries.
    #[must_use]
    pub fn insufficient_selection(dismiss_after: Duration) -> Self {
        Self::warning(INSUFFICIENT_SELECTION_MESSAGE, dismiss_after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_selection_is_a_warning() {
        let notice = Notice::insufficient_selection(Duration::from_secs(3));
        assert_eq!(notice.title, "Warning");
        assert_eq!(notice.level.css_class(), "notice--warning");
        assert_eq!(notice.message, INSUFFICIENT_SELECTION_MESSAGE);
    }
}
