//! # Batch Driver
//!
//! Applies a set of classification entries to a parsed catalogue document,
//! one record at a time, each record's fields in the fixed dependency order
//! from [`CatalogueField::apply_order`]. The order is a hard invariant:
//! `usageNotes` must be rewritten before `remarque` can anchor on it, and
//! `remarque` before `toValidate`.
//!
//! Failures never escalate: a record that cannot be located is skipped with
//! a warning, a field that cannot be matched is recorded as a miss, and the
//! batch always attempts every remaining entry. Persistence is the caller's
//! concern — check [`CatalogueDocument::is_modified`] (or
//! [`BatchReport::changed`]) and write the text back once at the end.

use classif_core::{CatalogueField, Classification, SoftwareName};
use serde::Serialize;
use tracing::{debug, warn};

use crate::document::CatalogueDocument;

/// Per-entry result of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// At least one field of the record was rewritten or inserted.
    Updated,
    /// The record was located and already carried every target value.
    Unchanged,
    /// No record with this name exists in the document; entry skipped.
    NotFound,
}

/// Outcome for one classification entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryOutcome {
    /// The entry's record name.
    pub name: SoftwareName,
    /// Overall status.
    pub status: EntryStatus,
    /// Fields that could not be applied (pattern or anchor not matched).
    /// Distinct from `NotFound`: the record exists, a clause does not.
    pub field_misses: Vec<CatalogueField>,
}

/// Aggregated result of one batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// One outcome per supplied entry, in iteration order.
    pub outcomes: Vec<EntryOutcome>,
}

impl BatchReport {
    /// Number of entries that changed at least one byte.
    pub fn updated(&self) -> usize {
        self.count(EntryStatus::Updated)
    }

    /// Number of entries whose records were already fully conformant.
    pub fn unchanged(&self) -> usize {
        self.count(EntryStatus::Unchanged)
    }

    /// Number of entries with no matching record declaration.
    pub fn not_found(&self) -> usize {
        self.count(EntryStatus::NotFound)
    }

    /// Total number of per-field misses across located records.
    pub fn field_misses(&self) -> usize {
        self.outcomes.iter().map(|o| o.field_misses.len()).sum()
    }

    /// Whether the batch mutated the document at all.
    pub fn changed(&self) -> bool {
        self.updated() > 0
    }

    fn count(&self, status: EntryStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}

/// Apply every classification entry to the document, in the caller-supplied
/// entry order and the fixed per-record field order.
pub fn apply_classifications(
    doc: &mut CatalogueDocument,
    entries: &[Classification],
) -> BatchReport {
    let mut report = BatchReport::default();

    for entry in entries {
        let Some(idx) = doc.find(entry.name.as_str()) else {
            warn!(name = %entry.name, "record not found in catalogue; entry skipped");
            report.outcomes.push(EntryOutcome {
                name: entry.name.clone(),
                status: EntryStatus::NotFound,
                field_misses: Vec::new(),
            });
            continue;
        };

        let mut touched = false;
        let mut misses = Vec::new();
        for field in CatalogueField::apply_order() {
            // `toValidate` yields no target unless the entry requests it.
            let Some(value) = entry.target_value(*field) else {
                continue;
            };
            let outcome = doc.upsert(idx, *field, &value);
            debug!(name = %entry.name, field = %field, ?outcome, "field upsert");
            if outcome.changed() {
                touched = true;
            } else if outcome.missed() {
                misses.push(*field);
            }
        }

        if !misses.is_empty() {
            warn!(
                name = %entry.name,
                misses = misses.len(),
                "some fields could not be matched within the record"
            );
        }
        report.outcomes.push(EntryOutcome {
            name: entry.name.clone(),
            status: if touched {
                EntryStatus::Updated
            } else {
                EntryStatus::Unchanged
            },
            field_misses: misses,
        });
    }

    report
}
