//! Bounded retry engine
//!
//! Every assertion against the UI is one evaluation through here: run the
//! check, and if it fails sleep the poll interval and run it again, until
//! it succeeds or the global timeout has elapsed.

use std::thread;
use std::time::{Duration, Instant};

use crate::config::DriverConfig;
use crate::error::DriverError;

/// Poll-until-true evaluator with a fixed interval and global timeout
#[derive(Debug, Clone, Copy)]
pub struct RetryEngine {
    poll_interval: Duration,
    timeout: Duration,
}

impl RetryEngine {
    pub fn new(poll_interval: Duration, timeout: Duration) -> Self {
        Self {
            poll_interval,
            timeout,
        }
    }

    pub fn from_config(config: &DriverConfig) -> Self {
        Self::new(config.poll_interval(), config.timeout())
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Evaluate `check` until it returns `(true, _)`.
    ///
    /// On timeout the error carries the message from the last failing call.
    pub fn assert_with_retries<F>(&self, mut check: F) -> Result<(), DriverError>
    where
        F: FnMut() -> (bool, String),
    {
        self.poll(|| match check() {
            (true, _) => Ok(()),
            (false, message) => Err(message),
        })
    }

    /// Evaluate `check` until it returns `Ok`, yielding its value.
    ///
    /// The check is always run at least once, and is re-run after every
    /// sleep even if that sleep overshoots the deadline.
    pub fn poll<T, F>(&self, mut check: F) -> Result<T, DriverError>
    where
        F: FnMut() -> Result<T, String>,
    {
        let started = Instant::now();
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let message = match check() {
                Ok(value) => return Ok(value),
                Err(message) => message,
            };

            let elapsed = started.elapsed();
            if elapsed >= self.timeout {
                tracing::warn!(attempts, ?elapsed, %message, "check did not pass before timeout");
                return Err(DriverError::Timeout {
                    message,
                    attempts,
                    elapsed,
                });
            }

            tracing::debug!(attempt = attempts, %message, "check failed, retrying");
            thread::sleep(self.poll_interval);
        }
    }
}

impl Default for RetryEngine {
    fn default() -> Self {
        Self::from_config(&DriverConfig::default())
    }
}
