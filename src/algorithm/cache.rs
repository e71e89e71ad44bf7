use crate::io::error::{Result, retries_exhausted};
use std::collections::VecDeque;

/// Bounded history of recently accepted results
///
/// Rejects values produced again while they are still among the last
/// `capacity` accepted results. Uniqueness is local to the window, not global.
#[derive(Debug)]
pub struct RecentResults {
    /// Accepted results, oldest first
    history: VecDeque<String>,
    /// Maximum number of remembered results
    capacity: usize,

    /// Cache effectiveness statistics
    pub stats: CacheStats,
}

/// Counters for accepted and rejected candidates
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of candidates accepted as fresh
    pub accepted: usize,
    /// Number of candidates discarded as recent repeats
    pub rejected: usize,
}

impl RecentResults {
    /// Create an empty history holding at most `capacity` results
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
            stats: CacheStats::default(),
        }
    }

    /// Maximum number of remembered results
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of results currently remembered
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether nothing has been remembered yet
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Whether `value` is among the remembered results
    pub fn contains(&self, value: &str) -> bool {
        self.history.iter().any(|seen| seen == value)
    }

    /// Call `generate` until it yields a value not in the history
    ///
    /// The accepted value is remembered, evicting the oldest entry once the
    /// history is full.
    ///
    /// # Errors
    ///
    /// Returns an error if `generate` fails, or if `max_attempts` candidates
    /// in a row were all recent repeats.
    pub fn produce<F>(&mut self, max_attempts: usize, mut generate: F) -> Result<String>
    where
        F: FnMut() -> Result<String>,
    {
        for _ in 0..max_attempts {
            let candidate = generate()?;
            if self.contains(&candidate) {
                self.stats.rejected += 1;
                log::debug!("Rejected recent repeat '{candidate}'");
                continue;
            }

            self.remember(candidate.clone());
            self.stats.accepted += 1;
            return Ok(candidate);
        }

        Err(retries_exhausted("unique result generation", max_attempts))
    }

    fn remember(&mut self, value: String) {
        if self.capacity == 0 {
            return;
        }
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(value);
    }
}
