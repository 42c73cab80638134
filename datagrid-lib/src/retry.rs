//! Bounded immediate retry for failed fetches.

/// Default number of retries after a failed fetch attempt.
pub const DEFAULT_RETRY_BUDGET: u32 = 2;

/// Counts the retries left for remote fetches.
///
/// Each failed attempt consumes one retry; a successful fetch restores the
/// full budget. Retries are issued immediately with no delay. The counter is
/// not reset between passes, so a pass that follows an exhausted one gets a
/// single attempt until something succeeds.
///
/// # Example
///
/// ```
/// use datagrid_lib::retry::RetryPolicy;
///
/// let mut policy = RetryPolicy::default();
/// assert!(policy.try_retry());
/// assert!(policy.try_retry());
/// assert!(!policy.try_retry());
///
/// policy.on_success();
/// assert_eq!(policy.remaining(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    budget: u32,
    remaining: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_BUDGET)
    }
}

impl RetryPolicy {
    /// Creates a policy allowing `budget` retries.
    pub fn new(budget: u32) -> Self {
        Self {
            budget,
            remaining: budget,
        }
    }

    /// Creates a policy that never retries.
    pub fn no_retry() -> Self {
        Self::new(0)
    }

    /// Retries left before the next failure is surfaced.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Consumes a retry. Returns `false` when none are left.
    pub fn try_retry(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Restores the full budget.
    pub fn on_success(&mut self) {
        self.remaining = self.budget;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_is_zero() {
        let mut policy = RetryPolicy::new(1);
        assert!(policy.try_retry());
        assert!(!policy.try_retry());
        assert!(!policy.try_retry());
        assert_eq!(policy.remaining(), 0);
    }

    #[test]
    fn test_no_retry() {
        let mut policy = RetryPolicy::no_retry();
        assert!(!policy.try_retry());
        policy.on_success();
        assert_eq!(policy.remaining(), 0);
    }
}
