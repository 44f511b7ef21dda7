//! Flag verification.

/// Byte-for-byte comparison of a submitted flag against the stored one.
///
/// No case folding, no trimming, no hashing: flags in this game are meant
/// to be leaked through the injection itself, and the challenge contract
/// depends on exact-match semantics staying observable.
pub fn verify_flag(stored: &str, candidate: &str) -> bool {
    stored.as_bytes() == candidate.as_bytes()
}
