//! Time abstraction for testability.
//!
//! Provides a [`Clock`] trait so tests can inject a fixed instant when
//! asserting on generated build numbers, while production code uses the
//! real system clock.

use std::time::SystemTime;

/// Abstraction over system time.
///
/// # Example
///
/// ```
/// use chat_notify::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Production clock delegating to [`SystemTime::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// A clock pinned to a fixed instant.
    struct FixedClock(SystemTime);

    impl Clock for FixedClock {
        fn now(&self) -> SystemTime {
            self.0
        }
    }

    #[test]
    fn system_clock_returns_current_time() {
        let clock = SystemClock;
        let before = SystemTime::now();
        let result = clock.now();
        let after = SystemTime::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn fixed_clock_returns_pinned_time() {
        let instant = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
        let clock = FixedClock(instant);

        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn system_clock_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemClock>();
    }
}
