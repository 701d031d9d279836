//! Toast notifications
//!
//! Short-lived messages stacked in a corner of the screen. Each one expires
//! after a fixed lifetime.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
    pub created_at: Instant,
}

/// Queue of visible notifications, oldest first
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    items: VecDeque<Notification>,
    lifetime: Duration,
    capacity: usize,
}

impl NotificationCenter {
    const DEFAULT_CAPACITY: usize = 3;

    pub fn new(lifetime: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            lifetime,
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>, variant: Variant) {
        self.push_at(title, description, variant, Instant::now());
    }

    pub fn push_at(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: Variant,
        now: Instant,
    ) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(Notification {
            title: title.into(),
            description: description.into(),
            variant,
            created_at: now,
        });
    }

    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title, description, Variant::Success);
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title, description, Variant::Error);
    }

    /// Drop notifications older than the lifetime
    pub fn expire(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.items
            .retain(|n| now.saturating_duration_since(n.created_at) < lifetime);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_after_lifetime() {
        let mut center = NotificationCenter::new(Duration::from_secs(5));
        let t0 = Instant::now();
        center.push_at("a", "first", Variant::Info, t0);
        center.push_at("b", "second", Variant::Error, t0 + Duration::from_secs(3));

        center.expire(t0 + Duration::from_secs(4));
        assert_eq!(center.len(), 2);

        center.expire(t0 + Duration::from_secs(5));
        assert_eq!(center.len(), 1);
        assert_eq!(center.latest().unwrap().title, "b");

        center.expire(t0 + Duration::from_secs(9));
        assert!(center.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut center = NotificationCenter::new(Duration::from_secs(5));
        for i in 0..5 {
            center.push(format!("n{i}"), "", Variant::Info);
        }
        let titles: Vec<&str> = center.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["n2", "n3", "n4"]);
    }
}
