//! # classif CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing, keeping the apply output
//! format of the Python `scripts/apply-lgpd-*.py` scripts.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use classif_cli::apply::{run_apply, ApplyArgs};
use classif_cli::list::{run_list, ListArgs};

/// CEJEF LGPD classification tool
///
/// Applies curated LGPD/RGPD compliance classifications to the software
/// catalogue embedded in the referential site (`app/data/software-list.ts`).
#[derive(Parser, Debug)]
#[command(name = "classif", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply a curated classification batch to the catalogue file.
    Apply(ApplyArgs),

    /// List the curated classification entries.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Resolve the repository root: walk up from CWD looking for `app/data/`.
    let repo_root = resolve_repo_root().unwrap_or_else(|| {
        tracing::warn!("Could not locate repository root; using current directory");
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    });

    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let result = match cli.command {
        Commands::Apply(args) => run_apply(&args, &repo_root),
        Commands::List(args) => run_list(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Walk up from the current directory to find the repository root.
///
/// The repo root is identified by the presence of the `app/data/` directory,
/// matching the referential site layout.
fn resolve_repo_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut dir = cwd.as_path();
    loop {
        if dir.join("app").join("data").is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classif_cli::apply::ClassificationSet;

    #[test]
    fn cli_parse_apply_defaults() {
        let cli = Cli::try_parse_from(["classif", "apply"]).unwrap();
        assert!(matches!(cli.command, Commands::Apply(_)));
        if let Commands::Apply(args) = cli.command {
            assert!(args.catalogue.is_none());
            assert_eq!(args.set, ClassificationSet::All);
            assert!(!args.dry_run);
        }
    }

    #[test]
    fn cli_parse_apply_with_set() {
        let cli = Cli::try_parse_from(["classif", "apply", "--set", "baseline"]).unwrap();
        if let Commands::Apply(args) = cli.command {
            assert_eq!(args.set, ClassificationSet::Baseline);
        }
    }

    #[test]
    fn cli_parse_apply_supplemental_dry_run() {
        let cli =
            Cli::try_parse_from(["classif", "apply", "--set", "supplemental", "--dry-run"])
                .unwrap();
        if let Commands::Apply(args) = cli.command {
            assert_eq!(args.set, ClassificationSet::Supplemental);
            assert!(args.dry_run);
        }
    }

    #[test]
    fn cli_parse_apply_with_catalogue_path() {
        let cli = Cli::try_parse_from([
            "classif",
            "apply",
            "--catalogue",
            "app/data/software-list.ts",
        ])
        .unwrap();
        if let Commands::Apply(args) = cli.command {
            assert_eq!(
                args.catalogue,
                Some(PathBuf::from("app/data/software-list.ts"))
            );
        }
    }

    #[test]
    fn cli_parse_apply_invalid_set_errors() {
        let result = Cli::try_parse_from(["classif", "apply", "--set", "everything"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_list() {
        let cli = Cli::try_parse_from(["classif", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn cli_parse_list_with_set() {
        let cli = Cli::try_parse_from(["classif", "list", "--set", "supplemental"]).unwrap();
        if let Commands::List(args) = cli.command {
            assert_eq!(args.set, ClassificationSet::Supplemental);
        }
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["classif", "list"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli1 = Cli::try_parse_from(["classif", "-v", "list"]).unwrap();
        assert_eq!(cli1.verbose, 1);

        let cli2 = Cli::try_parse_from(["classif", "-vv", "list"]).unwrap();
        assert_eq!(cli2.verbose, 2);

        let cli3 = Cli::try_parse_from(["classif", "-vvv", "list"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        let result = Cli::try_parse_from(["classif"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_invalid_subcommand_errors() {
        let result = Cli::try_parse_from(["classif", "nonexistent"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_debug_impl() {
        let cli = Cli::try_parse_from(["classif", "list"]).unwrap();
        let debug = format!("{cli:?}");
        assert!(debug.contains("Cli"));
    }
}
