//! # List CLI — Inspect the curated classification entries.

use anyhow::Result;
use clap::Args;

use crate::apply::ClassificationSet;

/// List subcommand arguments.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Which curation batch to list.
    #[arg(long, value_enum, default_value_t = ClassificationSet::All)]
    pub set: ClassificationSet,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs) -> Result<u8> {
    let entries = match args.set {
        ClassificationSet::Baseline => classif_knowledge::baseline(),
        ClassificationSet::Supplemental => classif_knowledge::supplemental(),
        ClassificationSet::All => classif_knowledge::all(),
    };

    println!("Classifications LGPD disponibles:");
    println!();
    for e in &entries {
        let flag = if e.to_validate { " (à valider)" } else { "" };
        println!(
            "  {:<45} Niveau {}  {}{}",
            e.name.as_str(),
            e.level.as_u8(),
            e.data_location,
            flag
        );
    }
    println!();

    let flagged = entries.iter().filter(|e| e.to_validate).count();
    if flagged > 0 {
        println!("Total: {} logiciels ({} à valider)", entries.len(), flagged);
    } else {
        println!("Total: {} logiciels", entries.len());
    }
    Ok(0)
}
