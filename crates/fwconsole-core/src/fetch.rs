//! Fetch Guard
//!
//! Sequence numbers for child-list fetches. Requests are never aborted, so a
//! response is only applied while its token is still the latest one issued.

/// Ticket handed out with each list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchGuard {
    latest: u64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token that supersedes every earlier one
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Supersede outstanding tokens without issuing a new one
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Generation counter; changes whenever the list is re-bound
    pub fn generation(&self) -> u64 {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_wins() {
        let mut guard = FetchGuard::new();
        let first = guard.issue();
        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
        assert!(second.seq() > first.seq());
    }

    #[test]
    fn test_invalidate_supersedes_outstanding() {
        let mut guard = FetchGuard::new();
        let token = guard.issue();
        let before = guard.generation();
        guard.invalidate();
        assert!(!guard.is_current(token));
        assert_ne!(guard.generation(), before);
    }
}
