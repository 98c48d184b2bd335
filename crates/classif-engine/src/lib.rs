//! # classif-engine — Record Location and Field Upserting
//!
//! The core of the catalogue classifier: given the full text of the
//! catalogue source file and a set of classification entries, find each
//! named record's span and rewrite-or-insert its compliance fields without
//! touching anything else.
//!
//! ## Components
//!
//! - **Document model** ([`document`]): a single up-front scan parses the
//!   text into an ordered list of record nodes with explicit byte-range
//!   boundaries and per-record field-presence sets. Name declarations and
//!   field keys only match in key position (start of a line, after
//!   indentation), so a record name quoted inside another record's
//!   free-text description can never produce a false locate.
//!
//! - **Field upserter** ([`upsert`]): replace-or-insert of one field,
//!   strictly bounds-checked against the owning record's byte range.
//!   Replacement preserves the keyword and surrounding punctuation;
//!   insertion splices a comma-and-indentation-matched clause immediately
//!   after the anchor field's value. Writing a value that is already in
//!   place is a no-op, which is what makes repeated runs idempotent.
//!
//! - **Batch driver** ([`batch`]): applies every entry in the fixed field
//!   order (`remarque` anchors on `usageNotes`, `toValidate` on `remarque`)
//!   and accumulates a report that distinguishes records that were not
//!   found from individual field misses.
//!
//! ## What this is not
//!
//! Not a TypeScript parser. The document is treated as semi-structured
//! text; overall grammar is never validated, and concurrent edits are the
//! caller's problem.

pub mod batch;
pub mod document;
pub mod upsert;

// Re-export primary types.
pub use batch::{apply_classifications, BatchReport, EntryOutcome, EntryStatus};
pub use document::{CatalogueDocument, RecordNode};
pub use upsert::UpsertOutcome;
