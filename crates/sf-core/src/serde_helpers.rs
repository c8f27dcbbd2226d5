//! Shared serde default helpers

/// Default for boolean fields that should be true when omitted
pub(crate) fn default_true() -> bool {
    true
}
