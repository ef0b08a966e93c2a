//! Parcel-year history and the extension bag
//!
//! Each parcel owns an ordered collection of yearly history entries. A
//! small stable subset of attributes (year, crop, applied eco-schemes,
//! liming date, soil pH) lives in real columns; everything that drifts
//! with the campaign year or the subsidy program travels in
//! [`ExtendedData`], stored as one sparse JSON value per entry.
//!
//! The bag contract:
//! - on write, fields that are `None` are omitted from the stored JSON;
//! - on read, keys missing from the stored JSON come back as `None` and
//!   keys outside the known set are dropped, never an error;
//! - a stored value that is not valid JSON is a deserialization error,
//!   surfaced to the caller rather than silently defaulted.

use serde::{Deserialize, Serialize};

/// One yearly history entry for a parcel
#[derive(Debug, Clone, Default)]
pub struct HistoryEntry {
    pub year: i32,
    pub crop: String,
    pub applied_eco_schemes: Vec<String>,
    /// YYYY-MM-DD
    pub liming_date: Option<String>,
    pub soil_ph: Option<f64>,
    pub extended: ExtendedData,
}

/// Per-crop breakdown for a parcel split between crops in one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropPart {
    pub crop: String,
    pub designation: String,
    pub area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eco_schemes: Vec<String>,
}

/// Campaign-year and program-specific history attributes.
///
/// The key set is fixed and shared by the read and write paths; extending
/// it is backward compatible because old stored rows simply lack the new
/// key. ONW, PRSK, ZRSK and RE are agri-environmental program families
/// whose attributes only exist for parcels enrolled in them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedData {
    /// Declared sub-area for this year, when it differs from the parcel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_parts: Option<Vec<CropPart>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation_zal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unreported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_mix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onw_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onw_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prsk_package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prsk_practice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prsk_fruit_tree_variety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prsk_fruit_tree_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prsk_intercrop_plant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prsk_usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prsk_variety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zrsk_package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zrsk_practice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zrsk_fruit_tree_variety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zrsk_fruit_tree_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zrsk_usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zrsk_variety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub re_package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExtendedData {
    /// Pack the bag for storage. Absent fields are omitted; a fully
    /// empty bag packs to `{}`.
    pub fn pack(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Unpack a stored bag. Missing keys default to absent, unknown
    /// keys are dropped; anything that is not a JSON object fails.
    pub fn unpack(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn is_empty(&self) -> bool {
        *self == ExtendedData::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_omits_absent_keys() {
        let bag = ExtendedData {
            eligible_area: Some(5.35),
            notes: Some("podzielona uprawa".to_string()),
            ..Default::default()
        };

        let packed = bag.pack().unwrap();
        let value: serde_json::Value = serde_json::from_str(&packed).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 2);
        assert_eq!(obj["eligibleArea"], 5.35);
        assert_eq!(obj["notes"], "podzielona uprawa");
        assert!(!obj.contains_key("limingDate"));
        assert!(!obj.contains_key("area"));
    }

    #[test]
    fn test_empty_bag_packs_to_empty_object() {
        assert_eq!(ExtendedData::default().pack().unwrap(), "{}");
        assert!(ExtendedData::unpack("{}").unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_sparse_fields() {
        let bag = ExtendedData {
            area: Some(5.4),
            eligible_area: Some(5.35),
            organic: Some(true),
            onw_type: Some("ONW_1".to_string()),
            prsk_fruit_tree_count: Some(120),
            crop_parts: Some(vec![CropPart {
                crop: "Pszenica".to_string(),
                designation: "A".to_string(),
                area: 3.2,
                eligible_area: Some(3.15),
                eco_schemes: vec!["E_IPR".to_string()],
            }]),
            ..Default::default()
        };

        let unpacked = ExtendedData::unpack(&bag.pack().unwrap()).unwrap();
        assert_eq!(unpacked, bag);
    }

    #[test]
    fn test_unpack_defaults_missing_keys() {
        let unpacked = ExtendedData::unpack(r#"{"eligibleArea": 5.35}"#).unwrap();
        assert_eq!(unpacked.eligible_area, Some(5.35));
        assert_eq!(unpacked.area, None);
        assert_eq!(unpacked.crop_parts, None);
        assert_eq!(unpacked.notes, None);
    }

    #[test]
    fn test_unpack_drops_unknown_keys() {
        // A key from a future campaign year must not break old readers.
        let unpacked =
            ExtendedData::unpack(r#"{"notes":"x","futureSchemeFlag":true}"#).unwrap();
        assert_eq!(unpacked.notes.as_deref(), Some("x"));

        // And it does not survive the next round trip.
        let repacked = unpacked.pack().unwrap();
        assert!(!repacked.contains("futureSchemeFlag"));
    }

    #[test]
    fn test_unpack_rejects_corrupt_payload() {
        assert!(ExtendedData::unpack("not-json").is_err());
        assert!(ExtendedData::unpack("[1,2,3]").is_err());
    }

    #[test]
    fn test_crop_parts_nested_round_trip() {
        let packed = r#"{"cropParts":[{"crop":"Rzepak","designation":"B","area":2.1}]}"#;
        let bag = ExtendedData::unpack(packed).unwrap();
        let parts = bag.crop_parts.as_ref().unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].crop, "Rzepak");
        assert_eq!(parts[0].eligible_area, None);
        assert!(parts[0].eco_schemes.is_empty());
    }
}
