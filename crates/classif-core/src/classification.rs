//! # Classification Entry
//!
//! One record of the curated knowledge base: the full set of target field
//! values to apply to a single named software record in the catalogue.
//! Entries are supplied as static data by `classif-knowledge`; the engine
//! never derives or mutates them.

use serde::{Deserialize, Serialize};

use crate::field::{CatalogueField, FieldValue};
use crate::level::CertificationLevel;
use crate::name::SoftwareName;

/// Target compliance values for one named software record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// The record's unique name, as declared in the catalogue document.
    pub name: SoftwareName,
    /// Target certification level.
    #[serde(rename = "certificationLevel")]
    pub level: CertificationLevel,
    /// Target data-residency location.
    pub data_location: String,
    /// Whether the software processes personal data.
    pub personal_data: bool,
    /// Human-readable usage guidance.
    pub usage_notes: String,
    /// Curator remark justifying the level.
    pub remarque: String,
    /// Request the add-only `toValidate: true` review flag.
    #[serde(default)]
    pub to_validate: bool,
}

impl Classification {
    /// The serialized value this entry targets for `field`.
    ///
    /// Returns `None` for [`CatalogueField::ToValidate`] when the entry does
    /// not request the review flag — the flag is add-only and is never
    /// written as `false`.
    pub fn target_value(&self, field: CatalogueField) -> Option<FieldValue> {
        match field {
            CatalogueField::CertificationLevel => Some(FieldValue::Level(self.level)),
            CatalogueField::DataLocation => Some(FieldValue::Text(self.data_location.clone())),
            CatalogueField::PersonalData => Some(FieldValue::Flag(self.personal_data)),
            CatalogueField::UsageNotes => Some(FieldValue::Text(self.usage_notes.clone())),
            CatalogueField::Remarque => Some(FieldValue::Text(self.remarque.clone())),
            CatalogueField::ToValidate => self.to_validate.then_some(FieldValue::Flag(true)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Classification {
        Classification {
            name: SoftwareName::new("KAHOOT").unwrap(),
            level: CertificationLevel::Restricted,
            data_location: "Union Européenne/États-Unis".to_string(),
            personal_data: true,
            usage_notes: "Usage avec précautions - Kahoot ASA (Norvège)".to_string(),
            remarque: "Niveau 2 : Kahoot ASA (Norvège), hébergement AWS multi-région".to_string(),
            to_validate: false,
        }
    }

    #[test]
    fn target_values_for_rewrite_fields() {
        let entry = sample();
        assert_eq!(
            entry.target_value(CatalogueField::CertificationLevel),
            Some(FieldValue::Level(CertificationLevel::Restricted))
        );
        assert_eq!(
            entry.target_value(CatalogueField::PersonalData),
            Some(FieldValue::Flag(true))
        );
        assert_eq!(
            entry.target_value(CatalogueField::DataLocation),
            Some(FieldValue::Text("Union Européenne/États-Unis".to_string()))
        );
    }

    #[test]
    fn to_validate_suppressed_unless_requested() {
        let entry = sample();
        assert_eq!(entry.target_value(CatalogueField::ToValidate), None);

        let flagged = Classification {
            to_validate: true,
            ..sample()
        };
        assert_eq!(
            flagged.target_value(CatalogueField::ToValidate),
            Some(FieldValue::Flag(true))
        );
    }

    #[test]
    fn every_apply_order_field_maps_for_flagged_entry() {
        let flagged = Classification {
            to_validate: true,
            ..sample()
        };
        for field in CatalogueField::apply_order() {
            assert!(flagged.target_value(*field).is_some(), "no value for {field}");
        }
    }

    #[test]
    fn serde_roundtrip() {
        let entry = sample();
        let json = serde_json::to_string(&entry).unwrap();
        let deser: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deser);
    }

    #[test]
    fn serde_uses_document_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("certificationLevel").is_some());
        assert!(json.get("dataLocation").is_some());
        assert!(json.get("personalData").is_some());
        assert!(json.get("usageNotes").is_some());
    }

    #[test]
    fn to_validate_defaults_to_false_on_deserialize() {
        let json = r#"{
            "name": "FRAMASOFT",
            "certificationLevel": 1,
            "dataLocation": "France",
            "personalData": true,
            "usageNotes": "Usage autorisé - Association française",
            "remarque": "Niveau 1 : Framasoft, hébergement France"
        }"#;
        let entry: Classification = serde_json::from_str(json).unwrap();
        assert!(!entry.to_validate);
    }
}
