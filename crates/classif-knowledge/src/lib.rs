//! # classif-knowledge — Curated Classification Knowledge Base
//!
//! The static tables that drive the catalogue updater: one
//! [`Classification`] per software record, carrying the certification
//! level, the data-residency location, the personal-data flag, the usage
//! guidance shown to staff, and the curator remark justifying the level.
//!
//! ## Curation batches
//!
//! - [`baseline`] — the primary curation pass over the full referential,
//!   including the institutional Microsoft block covered by the CEJEF DPA
//!   contract.
//! - [`supplemental`] — the follow-up research batch: browsers, AI
//!   assistants, developer tools, and miscellaneous applications.
//!
//! Entries marked `to_validate` carry an open research question (e.g. a
//! service in transition after an acquisition) and request the add-only
//! `toValidate: true` review flag in the catalogue.
//!
//! The tables are data, not logic: curation itself (vendor research,
//! jurisdiction analysis) happens outside this workspace and lands here as
//! reviewed constants.

pub mod baseline;
pub mod supplemental;

use classif_core::{CertificationLevel, Classification, SoftwareName};

pub use baseline::baseline;
pub use supplemental::supplemental;

/// The full knowledge base: baseline entries followed by the supplemental
/// batch, in curation order.
pub fn all() -> Vec<Classification> {
    let mut entries = baseline();
    entries.extend(supplemental());
    entries
}

/// Build one curated entry.
pub(crate) fn entry(
    name: &str,
    level: CertificationLevel,
    data_location: &str,
    personal_data: bool,
    usage_notes: &str,
    remarque: &str,
) -> Classification {
    Classification {
        // Table names are reviewed literals; emptiness would be a typo in
        // this crate, not a runtime condition.
        name: SoftwareName::new(name).expect("curated entry name must be non-empty"),
        level,
        data_location: data_location.to_string(),
        personal_data,
        usage_notes: usage_notes.to_string(),
        remarque: remarque.to_string(),
        to_validate: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_is_baseline_then_supplemental() {
        let all = all();
        assert_eq!(all.len(), baseline().len() + supplemental().len());
        assert_eq!(all[0].name, baseline()[0].name);
        assert_eq!(all.last().unwrap().name, supplemental().last().unwrap().name);
    }

    #[test]
    fn names_are_unique_across_the_whole_base() {
        let all = all();
        let names: HashSet<&str> = all.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn remarque_level_prefix_matches_entry_level() {
        for e in all() {
            let prefix = format!("Niveau {} :", e.level.as_u8());
            assert!(
                e.remarque.starts_with(&prefix),
                "{}: remarque does not open with '{prefix}'",
                e.name
            );
        }
    }

    #[test]
    fn prohibited_entries_say_interdit() {
        for e in all() {
            if e.level == CertificationLevel::Prohibited {
                assert!(
                    e.usage_notes.starts_with("INTERDIT"),
                    "{}: level 3 usage note must open with INTERDIT",
                    e.name
                );
            }
        }
    }

    #[test]
    fn flagged_entries_exist_but_are_rare() {
        let flagged: Vec<_> = all().into_iter().filter(|e| e.to_validate).collect();
        assert!(!flagged.is_empty());
        assert!(flagged.len() < 10, "review flags should stay exceptional");
    }

    #[test]
    fn no_empty_guidance_anywhere() {
        for e in all() {
            assert!(!e.data_location.is_empty(), "{}: empty dataLocation", e.name);
            assert!(!e.usage_notes.is_empty(), "{}: empty usageNotes", e.name);
            assert!(!e.remarque.is_empty(), "{}: empty remarque", e.name);
        }
    }
}
