use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Issues `<prefix>_<millis>` ids that never repeat within a process.
///
/// If the clock has not moved since the last id, the next one is bumped by a
/// millisecond instead. Services keep one generator per entity in a `static`,
/// so every handle over the same stores draws from it.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: &'static str,
    last: AtomicI64,
}

impl IdGenerator {
    pub const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            last: AtomicI64::new(0),
        }
    }

    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let (Ok(previous) | Err(previous)) =
            self.last
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                    Some(millis.max(last + 1))
                });
        format!("{}_{}", self.prefix, millis.max(previous + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_within_same_millisecond() {
        let ids = IdGenerator::new("post");
        let now = Utc::now();
        let first = ids.next_id(now);
        let second = ids.next_id(now);
        assert_ne!(first, second);
        assert_eq!(first, format!("post_{}", now.timestamp_millis()));
        assert_eq!(second, format!("post_{}", now.timestamp_millis() + 1));
    }

    #[test]
    fn test_ids_follow_the_clock() {
        let ids = IdGenerator::new("user");
        let now = Utc::now();
        ids.next_id(now);
        let later = now + chrono::Duration::seconds(5);
        assert_eq!(ids.next_id(later), format!("user_{}", later.timestamp_millis()));
    }
}
