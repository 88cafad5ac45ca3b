//! The single transient notice shown by the form.
//!
//! There is one slot per workflow. Raising a notice overwrites whatever
//! is showing; there is no queue. Each raise gets a fresh [`NoticeId`] so
//! a dismissal scheduled for an older notice cannot clear a newer one.

use std::fmt;

/// Notice severity, which drives its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Something finished as intended.
    Success,
    /// Validation failed or a service call failed.
    Error,
}

/// Identity of one raised notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notice-{}", self.0)
    }
}

/// A user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Identity used to match dismissals.
    pub id: NoticeId,
    /// Text shown to the user.
    pub message: String,
    /// Styling hint.
    pub severity: Severity,
}

/// Holder for the current notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeSlot {
    /// Show `message`, replacing any current notice.
    pub fn raise(&mut self, severity: Severity, message: impl Into<String>) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.current = Some(Notice {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Clear the notice if it is still `id`.
    ///
    /// Returns `false` when `id` has already been replaced or dismissed.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// The notice currently showing, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn newest_notice_overwrites() {
        let mut slot = NoticeSlot::default();
        slot.raise(Severity::Error, "first");
        slot.raise(Severity::Success, "second");
        let current = slot.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Success);
    }

    #[test]
    fn stale_dismissal_is_ignored() {
        let mut slot = NoticeSlot::default();
        let old = slot.raise(Severity::Error, "old");
        let new = slot.raise(Severity::Success, "new");
        assert!(!slot.dismiss(old));
        assert_eq!(slot.current().unwrap().id, new);
        assert!(slot.dismiss(new));
        assert!(slot.current().is_none());
    }

    #[test]
    fn dismissing_twice_is_a_no_op() {
        let mut slot = NoticeSlot::default();
        let id = slot.raise(Severity::Success, "done");
        assert!(slot.dismiss(id));
        assert!(!slot.dismiss(id));
    }

    #[test]
    fn ids_are_unique_per_raise() {
        let mut slot = NoticeSlot::default();
        let a = slot.raise(Severity::Success, "same");
        let b = slot.raise(Severity::Success, "same");
        assert_ne!(a, b);
        assert_eq!(b.to_string(), "notice-1");
    }
}
