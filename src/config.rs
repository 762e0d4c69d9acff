use std::time::{Duration, Instant};

/// Limits applied to every search run by a [`Searcher`](crate::Searcher).
///
/// The default configuration is unlimited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of nodes to expand before giving up.
    pub expansion_limit: Option<usize>,
    /// Maximum wall-clock time to spend before giving up.
    pub time_limit: Option<Duration>,
}

/// Which limit stopped a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelReason {
    ExpansionLimit,
    TimeLimit,
}

impl SearchConfig {
    pub fn unlimited() -> Self {
        SearchConfig::default()
    }

    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub(crate) fn start(&self) -> Budget {
        Budget {
            expansion_limit: self.expansion_limit,
            // a limit too large to represent never fires
            deadline: self.time_limit.and_then(|limit| Instant::now().checked_add(limit)),
        }
    }
}

/// Running state of the limits for one search call.
pub(crate) struct Budget {
    expansion_limit: Option<usize>,
    deadline: Option<Instant>,
}

impl Budget {
    /// Checked once per iteration, before a node is expanded.
    pub(crate) fn exhausted(&self, expanded: usize) -> Option<CancelReason> {
        if self.expansion_limit.is_some_and(|limit| expanded >= limit) {
            return Some(CancelReason::ExpansionLimit);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Some(CancelReason::TimeLimit);
        }
        None
    }
}
