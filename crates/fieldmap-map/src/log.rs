//! Append-only audit log of mapping changes since the last commit.

use fieldmap_model::{ChangeKind, ChangeRecord};
use serde::Serialize;

/// Ordered record of every connect and disconnect intent.
///
/// Nothing is deduplicated or compacted: connecting and then disconnecting a
/// field leaves two records until the next commit clears the log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeLog {
    records: Vec<ChangeRecord>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: ChangeRecord) {
        self.records.push(record);
    }

    /// Records in append order.
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    /// Owned copy of the records in append order.
    pub fn snapshot(&self) -> Vec<ChangeRecord> {
        self.records.clone()
    }

    /// Empty the log, returning how many records were dropped.
    pub fn clear(&mut self) -> usize {
        let cleared = self.records.len();
        self.records.clear();
        cleared
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> ChangeSummary {
        ChangeSummary::of(&self.records)
    }
}

impl Extend<ChangeRecord> for ChangeLog {
    fn extend<T: IntoIterator<Item = ChangeRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

/// Counts of changes by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    pub added: usize,
    pub removed: usize,
}

impl ChangeSummary {
    pub fn of(records: &[ChangeRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut summary, record| {
                match record.kind {
                    ChangeKind::Add => summary.added += 1,
                    ChangeKind::Remove => summary.removed += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.added + self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_records_in_append_order_without_compaction() {
        let mut log = ChangeLog::new();
        log.append(ChangeRecord::added("phone", "business_phone_primary"));
        log.append(ChangeRecord::removed("phone", "business_phone_primary"));

        assert_eq!(
            log.snapshot(),
            vec![
                ChangeRecord::added("phone", "business_phone_primary"),
                ChangeRecord::removed("phone", "business_phone_primary"),
            ]
        );
        assert_eq!(
            log.summary(),
            ChangeSummary {
                added: 1,
                removed: 1
            }
        );
    }

    #[test]
    fn clear_empties_and_reports_count() {
        let mut log = ChangeLog::new();
        log.extend([
            ChangeRecord::added("a", "b"),
            ChangeRecord::added("c", "d"),
        ]);
        assert_eq!(log.clear(), 2);
        assert!(log.is_empty());
        assert_eq!(log.summary().total(), 0);
    }

    #[test]
    fn snapshot_is_detached_from_later_appends() {
        let mut log = ChangeLog::new();
        log.append(ChangeRecord::added("a", "b"));
        let snapshot = log.snapshot();
        log.append(ChangeRecord::removed("a", "b"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }
}
