//! # Field Upserter
//!
//! Replace-or-insert of a single compliance field inside a single record
//! span. The two paths share one clause scanner and the parse-time presence
//! set, so they cannot disagree about whether a field exists.
//!
//! - **Replace**: the field's current value token is substituted in place,
//!   keeping the keyword, the comma, and everything around it. A value that
//!   already matches is reported as [`UpsertOutcome::Unchanged`] without
//!   touching the text — repeated runs converge after the first.
//! - **Insert**: a new `key: value` clause is spliced immediately after the
//!   anchor field's value token as `,\n<indent>key: value`, with the
//!   indentation copied from the record's own field lines. The comma lands
//!   before the new clause so the anchor's original trailing punctuation
//!   keeps terminating the clause that now follows the insertion.
//!
//! All offsets come from the record's parsed span; an upsert can never
//! touch bytes belonging to another record.

use classif_core::{CatalogueField, FieldValue};
use serde::Serialize;

use crate::document::{field_index, lines_with_offsets, scan_quoted, split_key, CatalogueDocument};

/// Outcome of one field upsert against one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// The field already carried the target value; nothing was written.
    Unchanged,
    /// An existing value token was rewritten in place.
    Replaced,
    /// A new clause was inserted after the anchor field.
    Inserted,
    /// A rewrite-only field is absent from the record; nothing was written.
    FieldMissing,
    /// The field is absent and its insertion anchor is too; nothing was written.
    AnchorMissing,
}

impl UpsertOutcome {
    /// Whether the document text was mutated.
    pub fn changed(self) -> bool {
        matches!(self, Self::Replaced | Self::Inserted)
    }

    /// Whether the field could not be applied at all.
    pub fn missed(self) -> bool {
        matches!(self, Self::FieldMissing | Self::AnchorMissing)
    }
}

impl CatalogueDocument {
    /// Upsert `field` to `value` within record `idx`.
    ///
    /// Follows the contract of the batch driver: misses are outcomes, not
    /// errors, and never abort anything. `idx` must come from [`find`].
    ///
    /// [`find`]: CatalogueDocument::find
    pub fn upsert(&mut self, idx: usize, field: CatalogueField, value: &FieldValue) -> UpsertOutcome {
        let rendered = value.render();

        if self.records[idx].has_field(field) {
            // Replace path.
            let Some((vstart, vend)) = self.locate_clause(idx, field) else {
                return UpsertOutcome::FieldMissing;
            };
            if self.text[vstart..vend] == rendered {
                return UpsertOutcome::Unchanged;
            }
            let delta = rendered.len() as isize - (vend - vstart) as isize;
            self.text.replace_range(vstart..vend, &rendered);
            self.shift_spans(vend, delta);
            self.modified = true;
            return UpsertOutcome::Replaced;
        }

        // Insert path: only fields with a declared anchor can be added.
        let Some(anchor) = field.insert_anchor() else {
            return UpsertOutcome::FieldMissing;
        };
        if !self.records[idx].has_field(anchor) {
            return UpsertOutcome::AnchorMissing;
        }
        let Some((_, anchor_end)) = self.locate_clause(idx, anchor) else {
            return UpsertOutcome::AnchorMissing;
        };

        let indent = self.records[idx].indent.clone();
        let clause = format!(",\n{indent}{}: {rendered}", field.keyword());
        self.text.insert_str(anchor_end, &clause);
        self.shift_spans(anchor_end, clause.len() as isize);
        self.records[idx].present[field_index(field)] = true;
        self.modified = true;
        UpsertOutcome::Inserted
    }

    /// Locate `field`'s value token inside record `idx`, returning its
    /// absolute byte range. The scan is confined to the record's span and
    /// to clauses at the record's own indent level.
    fn locate_clause(&self, idx: usize, field: CatalogueField) -> Option<(usize, usize)> {
        let record = &self.records[idx];
        let keyword = field.keyword();
        for (line_start, line) in lines_with_offsets(&self.text, record.span.clone()) {
            let Some((indent_len, key, value_off)) = split_key(line) else {
                continue;
            };
            if key != keyword || line[..indent_len] != record.indent {
                continue;
            }
            let rest = &line[value_off..];
            let vstart_rel = value_off + (rest.len() - rest.trim_start().len());
            let token = &line[vstart_rel..];
            let token_len = match scan_quoted(token) {
                Some(len) => len,
                // Bare token: up to the clause comma or end of line,
                // trailing whitespace excluded.
                None => token.find(',').map_or(token, |i| &token[..i]).trim_end().len(),
            };
            return Some((line_start + vstart_rel, line_start + vstart_rel + token_len));
        }
        None
    }
}
