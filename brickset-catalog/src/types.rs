//! Data model types for the LEGO set catalog.
//!
//! These types mirror the record schema of the bundled `brickset.json` data
//! file: set identity, theme, piece count, packaging, free-text tags, and
//! optional physical dimensions.

use serde::{Deserialize, Serialize};

// ── Set ─────────────────────────────────────────────────────────────────────

/// One LEGO set entry, loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegoSet {
    /// Unique set number (e.g., "75290-1"). Unique across the collection.
    pub number: String,
    pub name: String,
    /// Theme the set belongs to (e.g., "Star Wars"). Compared
    /// case-insensitively in queries.
    pub theme: String,
    pub pieces: u32,
    pub packaging_type: PackagingType,
    /// Free-text labels. Absent in the data for many sets.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Physical dimensions. Absent for sets that were never measured.
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

impl LegoSet {
    /// Weight of the set, if dimensions were recorded and include one.
    ///
    /// Any missing link in the chain yields `None`, never an error.
    pub fn weight(&self) -> Option<f64> {
        self.dimensions.as_ref().and_then(|d| d.weight)
    }
}

/// Physical dimensions of a packaged set. Units are whatever the data
/// source used; every field may be absent independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub depth: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

// ── Packaging ───────────────────────────────────────────────────────────────

/// Packaging type identifiers for all known set packagings.
///
/// This enum centralizes packaging identity in one place, replacing ad-hoc
/// string matching: the data file stores SCREAMING_SNAKE_CASE names, and
/// caller-supplied names parse case-insensitively via [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackagingType {
    Box,
    Polybag,
    BlisterPack,
    Bucket,
    Canister,
    FoilPack,
    Tub,
    ShrinkWrapped,
    Other,
    NotSpecified,
    None,
}

/// All packaging variants in registration order.
const ALL_PACKAGING_TYPES: &[PackagingType] = &[
    PackagingType::Box,
    PackagingType::Polybag,
    PackagingType::BlisterPack,
    PackagingType::Bucket,
    PackagingType::Canister,
    PackagingType::FoilPack,
    PackagingType::Tub,
    PackagingType::ShrinkWrapped,
    PackagingType::Other,
    PackagingType::NotSpecified,
    PackagingType::None,
];

impl PackagingType {
    /// Canonical name as stored in the JSON data file.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::Box => "BOX",
            Self::Polybag => "POLYBAG",
            Self::BlisterPack => "BLISTER_PACK",
            Self::Bucket => "BUCKET",
            Self::Canister => "CANISTER",
            Self::FoilPack => "FOIL_PACK",
            Self::Tub => "TUB",
            Self::ShrinkWrapped => "SHRINK_WRAPPED",
            Self::Other => "OTHER",
            Self::NotSpecified => "NOT_SPECIFIED",
            Self::None => "NONE",
        }
    }

    /// All packaging variants.
    pub fn all() -> &'static [PackagingType] {
        ALL_PACKAGING_TYPES
    }
}

impl std::fmt::Display for PackagingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

/// Error returned when a string cannot be parsed into a [`PackagingType`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown packaging type: '{0}'")]
pub struct PackagingTypeParseError(pub String);

impl std::str::FromStr for PackagingType {
    type Err = PackagingTypeParseError;

    /// Parse a packaging type from its canonical name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        for &packaging in ALL_PACKAGING_TYPES {
            if packaging.canonical_name() == upper {
                return Ok(packaging);
            }
        }
        Err(PackagingTypeParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_11_variants() {
        assert_eq!(PackagingType::all().len(), 11);
    }

    #[test]
    fn canonical_names_round_trip() {
        for &packaging in PackagingType::all() {
            let parsed: PackagingType = packaging.canonical_name().parse().unwrap();
            assert_eq!(parsed, packaging, "round-trip failed for {:?}", packaging);
        }
    }

    #[test]
    fn case_insensitive_parsing() {
        let parsed: PackagingType = "polybag".parse().unwrap();
        assert_eq!(parsed, PackagingType::Polybag);
        let parsed: PackagingType = "Blister_Pack".parse().unwrap();
        assert_eq!(parsed, PackagingType::BlisterPack);
        let parsed: PackagingType = "BOX".parse().unwrap();
        assert_eq!(parsed, PackagingType::Box);
    }

    #[test]
    fn unknown_string_returns_err() {
        let result: Result<PackagingType, _> = "paper bag".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("paper bag"));
    }

    #[test]
    fn display_returns_canonical_name() {
        assert_eq!(PackagingType::Polybag.to_string(), "POLYBAG");
        assert_eq!(PackagingType::NotSpecified.to_string(), "NOT_SPECIFIED");
    }

    #[test]
    fn weight_chain_short_circuits_on_missing_links() {
        let mut set = LegoSet {
            number: "1-1".to_string(),
            name: "Test".to_string(),
            theme: "Test".to_string(),
            pieces: 1,
            packaging_type: PackagingType::Box,
            tags: None,
            dimensions: None,
        };
        assert_eq!(set.weight(), None);

        set.dimensions = Some(Dimensions::default());
        assert_eq!(set.weight(), None);

        set.dimensions = Some(Dimensions {
            weight: Some(1.5),
            ..Dimensions::default()
        });
        assert_eq!(set.weight(), Some(1.5));
    }
}
