//! # Certification Level
//!
//! The three-tier LGPD certification level assigned to every catalogue
//! record. The document stores the level as a bare integer; this enum is
//! the single in-process representation.
//!
//! | # | Level | Meaning |
//! |---|-------|---------|
//! | 1 | Authorized | Usage autorisé (green) |
//! | 2 | Restricted | Usage avec précautions (orange) |
//! | 3 | Prohibited | Usage interdit (red) |

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// LGPD certification level of a catalogue record.
///
/// Serializes to/from the bare integer used in the catalogue document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CertificationLevel {
    /// Niveau 1 (vert) — usage autorisé.
    Authorized,
    /// Niveau 2 (orange) — usage avec précautions.
    Restricted,
    /// Niveau 3 (rouge) — usage interdit.
    Prohibited,
}

impl CertificationLevel {
    /// The integer value written into the document's `certificationLevel` field.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Authorized => 1,
            Self::Restricted => 2,
            Self::Prohibited => 3,
        }
    }

    /// French label used in console reports, matching the referential's wording.
    pub fn label(self) -> &'static str {
        match self {
            Self::Authorized => "Usage autorisé",
            Self::Restricted => "Usage avec précautions",
            Self::Prohibited => "Usage interdit",
        }
    }

    /// All levels in ascending order.
    pub fn all() -> &'static [CertificationLevel] {
        &[Self::Authorized, Self::Restricted, Self::Prohibited]
    }
}

impl TryFrom<u8> for CertificationLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Authorized),
            2 => Ok(Self::Restricted),
            3 => Ok(Self::Prohibited),
            other => Err(ValidationError::InvalidCertificationLevel(other)),
        }
    }
}

impl From<CertificationLevel> for u8 {
    fn from(level: CertificationLevel) -> Self {
        level.as_u8()
    }
}

impl std::fmt::Display for CertificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values() {
        assert_eq!(CertificationLevel::Authorized.as_u8(), 1);
        assert_eq!(CertificationLevel::Restricted.as_u8(), 2);
        assert_eq!(CertificationLevel::Prohibited.as_u8(), 3);
    }

    #[test]
    fn try_from_valid() {
        assert_eq!(
            CertificationLevel::try_from(1).unwrap(),
            CertificationLevel::Authorized
        );
        assert_eq!(
            CertificationLevel::try_from(3).unwrap(),
            CertificationLevel::Prohibited
        );
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert!(CertificationLevel::try_from(0).is_err());
        assert!(CertificationLevel::try_from(4).is_err());
    }

    #[test]
    fn serde_is_the_bare_integer() {
        let json = serde_json::to_string(&CertificationLevel::Restricted).unwrap();
        assert_eq!(json, "2");
        let level: CertificationLevel = serde_json::from_str("3").unwrap();
        assert_eq!(level, CertificationLevel::Prohibited);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let result: Result<CertificationLevel, _> = serde_json::from_str("9");
        assert!(result.is_err());
    }

    #[test]
    fn labels_are_french_referential_wording() {
        assert_eq!(CertificationLevel::Authorized.label(), "Usage autorisé");
        assert_eq!(CertificationLevel::Prohibited.label(), "Usage interdit");
    }

    #[test]
    fn all_levels_ascending() {
        let all = CertificationLevel::all();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].as_u8() < w[1].as_u8()));
    }

    #[test]
    fn display_is_the_integer() {
        assert_eq!(format!("{}", CertificationLevel::Restricted), "2");
    }
}
