//! Comparison of a usage count against a resolved ceiling.
//!
//! Counters live with the caller (per-day or per-month, wherever they are stored); this
//! module only answers whether `used + requested` still fits under the limit. Units follow
//! the record: tenths of a credit for video, operations for burst caps.

use serde::{Deserialize, Serialize};

/// Anything that exposes a numeric allowance.
pub trait Ceiling {
    /// The allowance in the record's own unit.
    fn limit(&self) -> u64;

    /// Units left after `used`, never negative.
    fn remaining(&self, used: u64) -> u64 {
        self.limit().saturating_sub(used)
    }

    /// Decides whether `requested` more units fit on top of `used`.
    fn check(&self, used: u64, requested: u64) -> QuotaDecision {
        let limit = self.limit();
        match used.checked_add(requested) {
            Some(total) if total <= limit => QuotaDecision::Allowed { remaining: limit - total },
            _ => QuotaDecision::Denied { limit, used, requested },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum QuotaDecision {
    /// The request fits; `remaining` units are left afterwards.
    Allowed { remaining: u64 },
    /// The request would exceed `limit`.
    Denied { limit: u64, used: u64, requested: u64 },
}

impl QuotaDecision {
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}
