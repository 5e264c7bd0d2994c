//! Fire-and-forget user-facing messages.

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

impl_domain_status_conversions!(NotificationVariant {
    Default => "default",
    Destructive => "destructive",
});

/// Structured `{title, description, variant?}` record rendered by the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<NotificationVariant>,
}

impl Notification {
    /// Informational message with the default variant left implicit.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: None }
    }

    /// Error-styled message (validation failures, lookup misses).
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Some(NotificationVariant::Destructive),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Some(NotificationVariant::Destructive)
    }
}
