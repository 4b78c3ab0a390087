//! In-memory operations over the full list of entries.
//!
//! None of these touch the disk; [`crate::Diary`] wraps each one between a
//! load and a save.
use crate::entry::Entry;

/// Puts `entry` at the top of the list. Duplicates are allowed.
pub fn insert_front(entry: Entry, entries: &mut Vec<Entry>) {
    entries.insert(0, entry);
}

/// Drops every entry equal to `(date, content)`, not only the first one.
/// Returns how many were removed.
pub fn remove_matching(date: &str, content: &str, entries: &mut Vec<Entry>) -> usize {
    let before = entries.len();
    entries.retain(|e| !e.matches(date, content));
    before - entries.len()
}

/// Replaces the first entry equal to `original` with `replacement`, in place.
///
/// Later duplicates are left alone. Returns `false` when nothing matched, in
/// which case `entries` is untouched.
pub fn replace_first_matching(original: &Entry, replacement: Entry, entries: &mut [Entry]) -> bool {
    match entries
        .iter_mut()
        .find(|e| e.matches(&original.date, &original.content))
    {
        Some(slot) => {
            *slot = replacement;
            true
        }
        None => false,
    }
}
