//! Session Configuration

/// Configuration for a feed session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum number of notifications the feed retains
    ///
    /// `None` keeps the feed unbounded. Long-lived dashboard sessions should
    /// set a bound so old entries are evicted instead of accumulating.
    pub feed_capacity: Option<usize>,
}

impl SessionConfig {
    /// Configuration with a bounded feed
    pub fn with_feed_capacity(capacity: usize) -> Self {
        Self {
            feed_capacity: Some(capacity),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            feed_capacity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feed_is_unbounded() {
        assert_eq!(SessionConfig::default().feed_capacity, None);
        assert_eq!(SessionConfig::with_feed_capacity(50).feed_capacity, Some(50));
    }
}
