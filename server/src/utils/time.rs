//! Time utility functions

use chrono::Utc;

/// Current time as milliseconds since Unix epoch
///
/// All row timestamps use this resolution.
pub fn epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_ms_is_current() {
        let ms = epoch_ms();
        // After 2024-01-01 and before 2100
        assert!(ms > 1_704_067_200_000);
        assert!(ms < 4_102_444_800_000);
    }

    #[test]
    fn test_epoch_ms_monotonic_enough() {
        let a = epoch_ms();
        let b = epoch_ms();
        assert!(b >= a);
    }
}
