//! Stable list keys for static display records.
//!
//! DESIGN
//! ======
//! Every record rendered through a keyed list carries a synthetic `id`
//! instead of reusing display text (titles, names, authors) as identity.
//! `ensure_unique_keys` checks the per-list uniqueness invariant; the
//! card list renderer runs it as a debug assertion and the content tests
//! run it for every static list.

use std::collections::HashSet;

#[cfg(test)]
#[path = "keys_test.rs"]
mod tests;

/// A record that can be rendered in a keyed list.
pub trait Keyed {
    /// Identifier unique within the record's list.
    fn key(&self) -> &'static str;
}

/// Two records in the same list share a key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate list key `{key}` at positions {first} and {second}")]
pub struct DuplicateKeyError {
    pub key: &'static str,
    pub first: usize,
    pub second: usize,
}

/// Verify that no two records in `records` share a key.
///
/// # Errors
///
/// Returns the first collision found, reporting both positions.
pub fn ensure_unique_keys<T: Keyed>(records: &[T]) -> Result<(), DuplicateKeyError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (second, record) in records.iter().enumerate() {
        let key = record.key();
        if !seen.insert(key) {
            let first = records.iter().position(|r| r.key() == key).unwrap_or(second);
            return Err(DuplicateKeyError { key, first, second });
        }
    }
    Ok(())
}

/// Keys of `records` in list order.
pub fn keys_of<T: Keyed>(records: &[T]) -> Vec<&'static str> {
    records.iter().map(Keyed::key).collect()
}
