//! Transient toast notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fire-and-forget user messages. Producers push and move on; the
//! `ToastHost` component renders the queue and expires entries.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticePosition {
    TopCenter,
    TopRight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub position: NoticePosition,
    pub text: String,
}

/// Ordered queue of visible notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Notices {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// Queue a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, position: NoticePosition, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, level, position, text: text.into() });
        id
    }

    /// Shorthand for a top-center error notice.
    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, NoticePosition::TopCenter, text)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }

    pub fn at(&self, position: NoticePosition) -> impl Iterator<Item = &Notice> {
        self.items.iter().filter(move |notice| notice.position == position)
    }
}
