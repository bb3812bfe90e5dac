// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Retry and timeout policy for gateway requests.

use std::time::Duration;

/// How many times a request is attempted and how long each attempt may take.
///
/// Attempts that fail at the transport level are retried immediately.
/// Attempts the gateway answers without acknowledging are retried after
/// [`retry_delay`](Self::retry_delay).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ipx800_lib::protocol::RetryPolicy;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.attempts(), 3);
/// assert_eq!(policy.timeout(), Duration::from_secs(5));
///
/// let policy = RetryPolicy::new()
///     .with_attempts(5)
///     .with_timeout(Duration::from_secs(2))
///     .with_retry_delay(Duration::from_millis(200));
/// assert!(policy.should_retry(4));
/// assert!(!policy.should_retry(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    timeout: Duration,
    retry_delay: Duration,
}

impl RetryPolicy {
    /// Default number of attempts.
    pub const DEFAULT_ATTEMPTS: u32 = 3;
    /// Default per-attempt timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
    /// Default pause after an unacknowledged answer.
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

    /// Creates a policy with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total number of attempts (including the first one).
    #[must_use]
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Sets the timeout applied to each attempt.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the pause after an answer without success indicator.
    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Returns the total number of attempts.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns the per-attempt timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the pause after an unacknowledged answer.
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Returns true if another attempt may follow attempt number `attempt`
    /// (counted from 1).
    #[must_use]
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: Self::DEFAULT_ATTEMPTS,
            timeout: Self::DEFAULT_TIMEOUT,
            retry_delay: Self::DEFAULT_RETRY_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.attempts(), 3);
        assert_eq!(policy.timeout(), Duration::from_secs(5));
        assert_eq!(policy.retry_delay(), Duration::from_secs(1));
    }

    #[test]
    fn should_retry_until_attempts_exhausted() {
        let policy = RetryPolicy::new().with_attempts(3);
        assert!(policy.should_retry(1));
        assert!(policy.should_retry(2));
        assert!(!policy.should_retry(3));
    }

    #[test]
    fn single_attempt_never_retries() {
        let policy = RetryPolicy::new().with_attempts(1);
        assert!(!policy.should_retry(1));
    }
}
