//! # Catalogue Fields — Single Source of Truth
//!
//! Defines the closed set of compliance fields the upsert engine recognizes,
//! together with everything the engine needs to know about each field: its
//! document keyword, whether it is rewrite-only or insertable, which sibling
//! field anchors its insertion, and the fixed order fields are applied in.
//!
//! ## Ordering Invariant
//!
//! [`CatalogueField::apply_order`] is a hard dependency chain, not a styling
//! choice: `remarque` is inserted immediately after `usageNotes`'s clause and
//! `toValidate` immediately after `remarque`'s, so each anchor must already
//! be in place when its dependent field is processed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::level::CertificationLevel;

/// The compliance fields managed inside a catalogue record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogueField {
    /// `certificationLevel` — integer level 1..=3. Always present, rewritten.
    CertificationLevel,
    /// `dataLocation` — free-form hosting location string. Always present, rewritten.
    DataLocation,
    /// `personalData` — boolean personal-data flag. Always present, rewritten.
    PersonalData,
    /// `usageNotes` — usage guidance string, possibly `null`. Rewritten only.
    UsageNotes,
    /// `remarque` — curator remark. Rewritten, or inserted after `usageNotes`.
    Remarque,
    /// `toValidate` — review flag. Inserted after `remarque`, never removed.
    ToValidate,
}

/// Total number of managed fields. Used for compile-time assertions.
pub const CATALOGUE_FIELD_COUNT: usize = 6;

impl CatalogueField {
    /// The field keyword as it appears in the document (`keyword: value`).
    pub fn keyword(self) -> &'static str {
        match self {
            Self::CertificationLevel => "certificationLevel",
            Self::DataLocation => "dataLocation",
            Self::PersonalData => "personalData",
            Self::UsageNotes => "usageNotes",
            Self::Remarque => "remarque",
            Self::ToValidate => "toValidate",
        }
    }

    /// The sibling field a new clause is inserted after when this field is
    /// absent from a record. `None` means the field is rewrite-only: every
    /// record is expected to already declare it.
    pub fn insert_anchor(self) -> Option<CatalogueField> {
        match self {
            Self::Remarque => Some(Self::UsageNotes),
            Self::ToValidate => Some(Self::Remarque),
            Self::CertificationLevel | Self::DataLocation | Self::PersonalData | Self::UsageNotes => {
                None
            }
        }
    }

    /// All managed fields in the fixed batch apply order.
    pub fn apply_order() -> &'static [CatalogueField] {
        &[
            Self::CertificationLevel,
            Self::DataLocation,
            Self::PersonalData,
            Self::UsageNotes,
            Self::Remarque,
            Self::ToValidate,
        ]
    }
}

impl FromStr for CatalogueField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "certificationLevel" => Ok(Self::CertificationLevel),
            "dataLocation" => Ok(Self::DataLocation),
            "personalData" => Ok(Self::PersonalData),
            "usageNotes" => Ok(Self::UsageNotes),
            "remarque" => Ok(Self::Remarque),
            "toValidate" => Ok(Self::ToValidate),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

impl std::fmt::Display for CatalogueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A serialized clause value, rendered exactly as it is written after the
/// field keyword in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A certification level, rendered as its bare integer.
    Level(CertificationLevel),
    /// A string value, rendered double-quoted with `"` and `\` escaped.
    Text(String),
    /// A boolean literal, rendered as `true`/`false`.
    Flag(bool),
}

impl FieldValue {
    /// Render the value token as written into the document.
    pub fn render(&self) -> String {
        match self {
            Self::Level(level) => level.as_u8().to_string(),
            Self::Text(text) => {
                let mut out = String::with_capacity(text.len() + 2);
                out.push('"');
                for c in text.chars() {
                    match c {
                        '"' => out.push_str("\\\""),
                        '\\' => out.push_str("\\\\"),
                        other => out.push(other),
                    }
                }
                out.push('"');
                out
            }
            Self::Flag(flag) => if *flag { "true" } else { "false" }.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_match_document_spelling() {
        assert_eq!(CatalogueField::CertificationLevel.keyword(), "certificationLevel");
        assert_eq!(CatalogueField::Remarque.keyword(), "remarque");
        assert_eq!(CatalogueField::ToValidate.keyword(), "toValidate");
    }

    #[test]
    fn anchor_chain_is_usage_notes_then_remarque() {
        assert_eq!(
            CatalogueField::Remarque.insert_anchor(),
            Some(CatalogueField::UsageNotes)
        );
        assert_eq!(
            CatalogueField::ToValidate.insert_anchor(),
            Some(CatalogueField::Remarque)
        );
    }

    #[test]
    fn rewrite_only_fields_have_no_anchor() {
        assert_eq!(CatalogueField::CertificationLevel.insert_anchor(), None);
        assert_eq!(CatalogueField::DataLocation.insert_anchor(), None);
        assert_eq!(CatalogueField::PersonalData.insert_anchor(), None);
        assert_eq!(CatalogueField::UsageNotes.insert_anchor(), None);
    }

    #[test]
    fn apply_order_covers_every_field_once() {
        let order = CatalogueField::apply_order();
        assert_eq!(order.len(), CATALOGUE_FIELD_COUNT);
        for field in order {
            assert_eq!(order.iter().filter(|f| *f == field).count(), 1);
        }
    }

    #[test]
    fn apply_order_puts_anchors_before_dependents() {
        let order = CatalogueField::apply_order();
        let pos = |f: CatalogueField| order.iter().position(|x| *x == f).unwrap();
        assert!(pos(CatalogueField::UsageNotes) < pos(CatalogueField::Remarque));
        assert!(pos(CatalogueField::Remarque) < pos(CatalogueField::ToValidate));
    }

    #[test]
    fn from_str_roundtrip() {
        for field in CatalogueField::apply_order() {
            let parsed: CatalogueField = field.keyword().parse().unwrap();
            assert_eq!(parsed, *field);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("hosting".parse::<CatalogueField>().is_err());
    }

    #[test]
    fn render_level() {
        assert_eq!(FieldValue::Level(CertificationLevel::Prohibited).render(), "3");
    }

    #[test]
    fn render_text_quotes() {
        assert_eq!(
            FieldValue::Text("Usage autorisé - France".to_string()).render(),
            "\"Usage autorisé - France\""
        );
    }

    #[test]
    fn render_text_escapes_quotes_and_backslashes() {
        assert_eq!(
            FieldValue::Text("dit \"non\"".to_string()).render(),
            "\"dit \\\"non\\\"\""
        );
        assert_eq!(FieldValue::Text("a\\b".to_string()).render(), "\"a\\\\b\"");
    }

    #[test]
    fn render_flag() {
        assert_eq!(FieldValue::Flag(true).render(), "true");
        assert_eq!(FieldValue::Flag(false).render(), "false");
    }
}
