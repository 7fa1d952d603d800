//! Task id generation
//!
//! Ids are minted once at creation time; the store never checks them for
//! uniqueness against existing records.

use rand::Rng;

/// Contract for minting task ids at creation time
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator: current wall-clock millis plus a zero-padded
/// 3-digit random suffix, e.g. `"1767225600000042"`.
///
/// Uniqueness is probabilistic only. Two calls in the same millisecond
/// that draw the same suffix collide; callers wanting a hard guarantee
/// should swap in a different `IdGenerator`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn generate(&self) -> String {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let suffix: u32 = rand::thread_rng().gen_range(0..1000);
        format!("{}{:03}", timestamp, suffix)
    }
}
