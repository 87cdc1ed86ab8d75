//! Transient user notifications (toasts).
//!
//! DESIGN
//! ======
//! Notifying is fire-and-forget: `Notifier::push_notice` returns nothing and
//! callers never branch on it. The queue is bounded; the oldest notice is
//! evicted first.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

/// Upper bound on simultaneously visible notices.
pub const MAX_NOTICES: usize = 5;

/// How long a notice stays on screen before it is dismissed.
pub const NOTICE_DISPLAY_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// CSS modifier for the toast element.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// Queue of notices currently on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NotificationsState {
    /// Queue a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, text: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, level, text: text.to_owned() });
        if self.items.len() > MAX_NOTICES {
            let overflow = self.items.len() - MAX_NOTICES;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

/// Sink for user-visible transient messages.
pub trait Notifier {
    fn push_notice(&self, level: NoticeLevel, text: &str);
}

impl Notifier for RwSignal<NotificationsState> {
    fn push_notice(&self, level: NoticeLevel, text: &str) {
        log::debug!("notice ({}): {text}", level.class_suffix());
        self.update(|state| {
            state.push(level, text);
        });
    }
}
