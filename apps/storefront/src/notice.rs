//! # User Notices
//!
//! The toast analog: short, non-blocking messages the UI shows after a
//! command runs ("Dune added to cart", "Not enough stock available").
//!
//! Commands push notices into the queue; the frontend drains it once per
//! render cycle. A rejected mutation produces an error notice instead of an
//! `ApiError`, because rejection is normal storefront flow, not a failure
//! of the command itself.

use serde::Serialize;

/// Severity of a notice, mapped to toast styling by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// The action happened ("added to cart").
    Success,
    /// The action was rejected ("already in wishlist").
    Error,
}

/// One user-facing message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Pending notices, drained by the UI.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: Vec<Notice>,
}

impl NoticeQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        NoticeQueue::default()
    }

    /// Pushes a success notice.
    pub fn success(&mut self, message: impl Into<String>) {
        self.pending.push(Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        });
    }

    /// Pushes an error notice.
    pub fn error(&mut self, message: impl Into<String>) {
        self.pending.push(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }

    /// Takes every pending notice, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }

    /// Pending notices without draining them.
    pub fn pending(&self) -> &[Notice] {
        &self.pending
    }

    /// Checks if anything is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_drain() {
        let mut queue = NoticeQueue::new();
        queue.success("Dune added to cart");
        queue.error("Not enough stock available");

        assert_eq!(queue.pending().len(), 2);
        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].level, NoticeLevel::Success);
        assert_eq!(drained[1].level, NoticeLevel::Error);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_on_empty_queue() {
        let mut queue = NoticeQueue::new();
        assert!(queue.drain().is_empty());
    }
}
