//! Toast notification model.

use serde::{Deserialize, Serialize};

use crate::error::ImageIntakeError;
use crate::i18n::Translate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient, non-blocking message for the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Toast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Default,
            title: title.into(),
            description: None,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    /// Build the destructive toast shown for an intake error.
    pub fn from_intake_error<T: Translate + ?Sized>(err: &ImageIntakeError, tr: &T) -> Self {
        Self::destructive(tr.t(err.title_key()), tr.t(err.description_key()))
    }
}

/// Anything that can display a toast.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}
