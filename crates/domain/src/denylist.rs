use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct DenylistEntry {
    pub id: Option<i64>,
    pub address: String,
    pub created_at: Option<String>,
}

/// A single address that could not be written during a denylist replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenylistItemFailure {
    pub address: String,
    pub reason: String,
}

/// Outcome of the clear-then-insert denylist replacement.
///
/// The clear is never rolled back: `failures` lists the entries that were
/// dropped while the rest of the set was written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenylistReplaceReport {
    pub saved: u64,
    pub failures: Vec<DenylistItemFailure>,
}

impl DenylistReplaceReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Trims submitted addresses, drops blanks and collapses duplicates.
pub fn normalize_denylist<I, S>(addresses: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    addresses
        .into_iter()
        .map(|a| a.as_ref().trim().to_string())
        .filter(|a| !a.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
