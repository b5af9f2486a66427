//! Resource ID formatting.

/// Prefix for extracted resource IDs.
pub const RESOURCE_PREFIX: &str = "res";

/// Format the ID for the `seq`-th resource extracted in a parse run.
///
/// IDs are only unique within one run; two runs over the same document
/// produce the same sequence.
#[must_use]
pub fn resource_id(seq: usize) -> String {
    format!("{RESOURCE_PREFIX}-{seq}")
}
