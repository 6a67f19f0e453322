//! Goal id generation.
//!
//! Id generation is injected into `GoalService` so that creation is
//! deterministic under test. The production provider keeps the
//! `goal::<epoch_millis>` format but guarantees uniqueness even when two
//! goals are created within the same millisecond.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh, unique goal ids
pub trait GoalIdProvider: Send + Sync {
    fn next_id(&self) -> String;
}

/// Time-based provider producing strictly increasing `goal::<epoch_millis>`
/// ids. When the clock has not advanced past the last issued value, the id
/// is bumped by one millisecond instead of colliding.
#[derive(Debug, Default)]
pub struct EpochMillisIdProvider {
    last_issued: AtomicU64,
}

impl EpochMillisIdProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GoalIdProvider for EpochMillisIdProvider {
    fn next_id(&self) -> String {
        let now_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut prev = self.last_issued.load(Ordering::Relaxed);
        loop {
            let next = now_millis.max(prev + 1);
            match self.last_issued.compare_exchange(
                prev,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return shared::Goal::generate_id(next),
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Counter-based provider for deterministic ids in tests
#[derive(Debug, Default)]
pub struct SequentialIdProvider {
    counter: AtomicU64,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GoalIdProvider for SequentialIdProvider {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        shared::Goal::generate_id(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_epoch_millis_ids_are_unique_under_rapid_calls() {
        let provider = EpochMillisIdProvider::new();

        let ids: HashSet<String> = (0..1000).map(|_| provider.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_epoch_millis_ids_parse_back() {
        let provider = EpochMillisIdProvider::new();
        let id = provider.next_id();
        assert!(shared::Goal::parse_id(&id).is_ok());
    }

    #[test]
    fn test_sequential_provider_counts_up() {
        let provider = SequentialIdProvider::new();
        assert_eq!(provider.next_id(), "goal::1");
        assert_eq!(provider.next_id(), "goal::2");
        assert_eq!(provider.next_id(), "goal::3");
    }
}
