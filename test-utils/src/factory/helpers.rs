//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// identifying fields to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
