//! Lookup Result Module
//!
//! Models the three distinct outcomes of a cache read as a closed enum, so
//! callers can branch on absence and staleness separately and the compiler
//! checks the match for completeness.

// == Lookup ==
/// Result of a cache lookup.
///
/// `Miss` and `Expired` are deliberately separate variants: a consumer may
/// want to log expiry differently from absence, or trigger recomputation
/// only for stale keys. Note that the stored value type may itself be an
/// `Option`, so `Hit(None)` for a `TtlCache<K, Option<T>>` is a real hit,
/// distinct from `Miss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<V> {
    /// Key present and not expired
    Hit(V),
    /// Key absent
    Miss,
    /// Key present but past its expiration deadline
    Expired,
}

impl<V> Lookup<V> {
    /// Collapses the lookup to `Some(value)` on a hit, `None` otherwise.
    pub fn into_value(self) -> Option<V> {
        match self {
            Lookup::Hit(value) => Some(value),
            Lookup::Miss | Lookup::Expired => None,
        }
    }

    /// Returns true for `Hit`.
    pub fn is_hit(&self) -> bool {
        matches!(self, Lookup::Hit(_))
    }

    /// Returns true for `Miss`.
    pub fn is_miss(&self) -> bool {
        matches!(self, Lookup::Miss)
    }

    /// Returns true for `Expired`.
    pub fn is_expired(&self) -> bool {
        matches!(self, Lookup::Expired)
    }
}
