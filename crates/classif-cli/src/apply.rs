//! # Apply CLI — Run a curation batch against the catalogue file.
//!
//! Reads the TypeScript catalogue, applies the selected classification
//! batch in memory, and writes the file back at most once, only when at
//! least one record actually changed. A missing catalogue file aborts the
//! run before any processing; a missing record only skips its entry.
//!
//! ## Usage
//!
//! ```bash
//! # Apply every curated classification to the default catalogue:
//! classif apply
//!
//! # Apply one batch, against an explicit file, without writing:
//! classif apply --set supplemental --catalogue app/data/software-list.ts --dry-run
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};

use classif_core::Classification;
use classif_engine::{apply_classifications, CatalogueDocument, EntryStatus};

/// Apply subcommand arguments.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Path to the catalogue file.
    /// Defaults to `app/data/software-list.ts` under the repository root.
    #[arg(long)]
    pub catalogue: Option<PathBuf>,

    /// Which curation batch to apply.
    #[arg(long, value_enum, default_value_t = ClassificationSet::All)]
    pub set: ClassificationSet,

    /// Report what would change without writing the file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Selectable curation batches.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSet {
    /// The primary curation pass.
    Baseline,
    /// The follow-up pass: browsers, AI assistants, developer tooling.
    Supplemental,
    /// Both batches, baseline first.
    All,
}

impl ClassificationSet {
    fn entries(self) -> Vec<Classification> {
        match self {
            ClassificationSet::Baseline => classif_knowledge::baseline(),
            ClassificationSet::Supplemental => classif_knowledge::supplemental(),
            ClassificationSet::All => classif_knowledge::all(),
        }
    }
}

/// Execute the apply subcommand.
pub fn run_apply(args: &ApplyArgs, repo_root: &Path) -> Result<u8> {
    let path = match &args.catalogue {
        Some(p) => crate::resolve_path(p, repo_root),
        None => repo_root.join(crate::CATALOGUE_PATH),
    };

    if !path.is_file() {
        bail!("Erreur: Fichier non trouvé: {}", path.display());
    }

    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read catalogue: {}", path.display()))?;

    let mut doc = CatalogueDocument::parse(text);
    tracing::debug!(records = doc.records().len(), "catalogue parsed");

    let entries = args.set.entries();
    let report = apply_classifications(&mut doc, &entries);

    // Outcomes come back in entry order, so the zip pairs up correctly.
    for (entry, outcome) in entries.iter().zip(&report.outcomes) {
        match outcome.status {
            EntryStatus::Updated => {
                println!("✅ {}: Niveau {}", entry.name, entry.level.as_u8());
            }
            EntryStatus::Unchanged => {
                println!("✓  {}: déjà à jour", entry.name);
            }
            EntryStatus::NotFound => {
                println!("⚠️  Non trouvé: {}", entry.name);
            }
        }
        for field in &outcome.field_misses {
            println!("   champ non appliqué: {field}");
        }
    }

    println!();
    println!("{}", "=".repeat(60));

    if doc.is_modified() {
        if args.dry_run {
            println!(
                "✅ {} logiciels mis à jour (simulation, fichier non modifié)",
                report.updated()
            );
        } else {
            fs::write(&path, doc.text())
                .with_context(|| format!("failed to write catalogue: {}", path.display()))?;
            println!("✅ {} logiciels mis à jour", report.updated());
            println!("Fichier sauvegardé: {}", path.display());
        }
    } else {
        println!("⚠️  Aucune modification effectuée");
    }

    if report.not_found() > 0 {
        println!("⚠️  {} logiciels introuvables dans le catalogue", report.not_found());
    }
    if report.field_misses() > 0 {
        println!("⚠️  {} champs non appliqués", report.field_misses());
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_set_matches_knowledge_crate() {
        assert_eq!(
            ClassificationSet::Baseline.entries().len(),
            classif_knowledge::baseline().len()
        );
    }

    #[test]
    fn all_set_is_both_batches() {
        let all = ClassificationSet::All.entries().len();
        let baseline = ClassificationSet::Baseline.entries().len();
        let supplemental = ClassificationSet::Supplemental.entries().len();
        assert_eq!(all, baseline + supplemental);
    }

    #[test]
    fn missing_catalogue_aborts_before_processing() {
        let dir = tempfile::tempdir().unwrap();
        let args = ApplyArgs {
            catalogue: Some(dir.path().join("nope.ts")),
            set: ClassificationSet::All,
            dry_run: false,
        };
        let err = run_apply(&args, dir.path()).unwrap_err();
        assert!(err.to_string().contains("Fichier non trouvé"));
    }
}
