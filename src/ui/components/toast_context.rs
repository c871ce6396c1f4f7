use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastVariant {
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

/// App-wide transient notification state, provided at the root so any page
/// can surface a toast. At most one toast is visible; showing a new one
/// replaces the current.
#[derive(Clone, Copy)]
pub struct ToastContext {
    current: Signal<Option<Toast>>,
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
        }
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.read().clone()
    }

    pub fn show(&self, title: impl Into<String>, message: impl Into<String>, variant: ToastVariant) {
        let mut current = self.current;
        current.set(Some(Toast {
            title: title.into(),
            message: message.into(),
            variant,
        }));
    }

    pub fn show_error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(title, message, ToastVariant::Destructive);
    }

    pub fn dismiss(&self) {
        let mut current = self.current;
        current.set(None);
    }
}
