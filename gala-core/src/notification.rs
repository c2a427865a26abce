use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a toast stays up before it is dismissed automatically
pub const TOAST_DURATION_MILLIS: i64 = 5_000;

/// Toasts visible at once
pub const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Destructive,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Destructive,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// A notification on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    pub expires_at: DateTime<Utc>,
}

/// Queue behind the notification surface. Newest toast first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toaster {
    toasts: Vec<Toast>,
    next_id: u64,
    limit: usize,
    duration: Duration,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(TOAST_LIMIT, Duration::milliseconds(TOAST_DURATION_MILLIS))
    }
}

impl Toaster {
    pub fn new(limit: usize, duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            limit: limit.max(1),
            duration,
        }
    }

    /// Show a notification, pushing out the oldest ones past the limit
    pub fn notify(&mut self, notification: Notification, now: DateTime<Utc>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.insert(
            0,
            Toast {
                id,
                notification,
                expires_at: now + self.duration,
            },
        );
        self.toasts.truncate(self.limit);
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose time is up; returns how many went away
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before - self.toasts.len()
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.first()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 18, 30, 0).unwrap()
    }

    #[test]
    fn test_newest_replaces_older() {
        let mut toaster = Toaster::default();
        toaster.notify(Notification::info("First", "one"), now());
        let second = toaster.notify(Notification::destructive("Second", "two"), now());

        assert_eq!(toaster.visible().len(), 1);
        assert_eq!(toaster.latest().map(|t| t.id), Some(second));
        assert_eq!(toaster.latest().unwrap().notification.kind, NotificationKind::Destructive);
    }

    #[test]
    fn test_auto_dismiss_after_duration() {
        let mut toaster = Toaster::default();
        toaster.notify(Notification::info("Saved", "ok"), now());

        assert_eq!(toaster.expire(now() + Duration::milliseconds(4_999)), 0);
        assert_eq!(toaster.expire(now() + Duration::milliseconds(5_000)), 1);
        assert!(toaster.visible().is_empty());
    }

    #[test]
    fn test_manual_dismiss() {
        let mut toaster = Toaster::new(3, Duration::seconds(5));
        let a = toaster.notify(Notification::info("A", "a"), now());
        let b = toaster.notify(Notification::info("B", "b"), now());

        assert!(toaster.dismiss(a));
        assert!(!toaster.dismiss(a));
        assert_eq!(toaster.visible().len(), 1);
        assert_eq!(toaster.visible()[0].id, b);
        assert!(b > a);
    }
}
