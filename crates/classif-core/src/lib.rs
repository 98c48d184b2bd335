//! # classif-core — Foundational Types for the Catalogue Classifier
//!
//! This crate defines the type-system primitives shared by the classifier
//! workspace. Every other crate depends on `classif-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrapper for the record identifier.** [`SoftwareName`] is a
//!    validated newtype — no bare strings for the catalogue key that every
//!    edit is scoped by.
//!
//! 2. **Single `CatalogueField` enum.** One definition of the closed set of
//!    compliance fields the engine recognizes, with the field keyword, the
//!    insertion anchor, and the fixed apply order attached to it. Adding a
//!    field forces every consumer to handle it at compile time.
//!
//! 3. **`CertificationLevel` is an enum, not an integer.** The document
//!    stores 1/2/3; the type system stores the meaning.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `classif-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod classification;
pub mod error;
pub mod field;
pub mod level;
pub mod name;

// Re-export primary types for ergonomic imports.
pub use classification::Classification;
pub use error::ValidationError;
pub use field::{CatalogueField, FieldValue, CATALOGUE_FIELD_COUNT};
pub use level::CertificationLevel;
pub use name::SoftwareName;
