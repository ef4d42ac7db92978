//! Column layout of the shop import sheet and the example row shown under it.

use std::collections::HashSet;

use anyhow::{Result, anyhow};

/// Header row, left to right. Downstream import matches these strings exactly.
pub const COLUMNS: [&str; 43] = [
    "name",
    "description",
    "address",
    "area",
    "categories",
    "latitude",
    "longitude",
    "rating",
    "amenities",
    "durationMinutes",
    "requiresPurchase",
    "priceRange",
    "buildingNumber",
    "buildingName",
    "soi",
    "district",
    "province",
    "landmark",
    "lineId",
    "facebookPage",
    "otherContacts",
    "cash",
    "QR",
    "credit",
    "mon",
    "tue",
    "wed",
    "thu",
    "fri",
    "sat",
    "sun",
    "instagramPage",
    "phoneNumber",
    "buildingFloor",
    "isapproved",
    "verification_status",
    "image_url",
    "paymentMethods",
    "tryOnAreaAvailable",
    "notesOrConditions",
    "usualOpeningTime",
    "gMap link",
    "Note",
];

/// Example values keyed by column name.
pub const SAMPLE_RECORD: &[(&str, &str)] = &[
    ("name", "Sample Repair Shop"),
    ("description", "A sample repair shop for testing"),
    ("address", "123 Sample Street"),
    ("area", "Sample Area"),
    ("categories", "Electronics, Computers"),
    ("latitude", "13.7563"),
    ("longitude", "100.5018"),
    ("rating", "4.5"),
    ("amenities", "WiFi, Parking, Air Conditioning"),
    ("durationMinutes", "60"),
    ("requiresPurchase", "false"),
    ("priceRange", "₿₿"),
    ("buildingNumber", "123"),
    ("buildingName", "Sample Building"),
    ("soi", "Sample Soi"),
    ("district", "Sample District"),
    ("province", "Bangkok"),
    ("landmark", "Sample Landmark"),
    ("lineId", "sample_line_id"),
    ("facebookPage", "https://facebook.com/sample"),
    ("otherContacts", "Additional contact info"),
    ("cash", "true"),
    ("QR", "true"),
    ("credit", "false"),
    ("mon", "09:00-18:00"),
    ("tue", "09:00-18:00"),
    ("wed", "09:00-18:00"),
    ("thu", "09:00-18:00"),
    ("fri", "09:00-18:00"),
    ("sat", "09:00-16:00"),
    ("sun", "Closed"),
    ("instagramPage", "https://instagram.com/sample"),
    ("phoneNumber", "02-123-4567"),
    ("buildingFloor", "2"),
    ("isapproved", "true"),
    ("verification_status", "Verified"),
    ("image_url", "https://example.com/image.jpg"),
    ("paymentMethods", "cash,qr"),
    ("tryOnAreaAvailable", "true"),
    ("notesOrConditions", "Sample notes and conditions"),
    ("usualOpeningTime", "09:00"),
    ("gMap link", "https://maps.google.com/?q=13.7563,100.5018"),
    ("Note", "Additional notes about the shop"),
];

pub fn sample_value(column: &str) -> Option<&'static str> {
    SAMPLE_RECORD
        .iter()
        .find(|(key, _)| *key == column)
        .map(|(_, value)| *value)
}

/// Sample keys that have no matching column.
pub fn orphan_sample_fields() -> Vec<&'static str> {
    SAMPLE_RECORD
        .iter()
        .map(|(key, _)| *key)
        .filter(|key| !COLUMNS.contains(key))
        .collect()
}

pub fn validate() -> Result<()> {
    let mut seen = HashSet::new();
    for column in COLUMNS {
        if !seen.insert(column) {
            return Err(anyhow!("duplicate column name: {column}"));
        }
    }

    let orphans = orphan_sample_fields();
    if !orphans.is_empty() {
        return Err(anyhow!("sample record has unknown columns: {}", orphans.join(", ")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_valid() {
        validate().unwrap();
        assert!(orphan_sample_fields().is_empty());
    }

    #[test]
    fn column_order_is_fixed() {
        assert_eq!(COLUMNS.len(), 43);
        assert_eq!(COLUMNS[0], "name");
        assert_eq!(COLUMNS[9], "durationMinutes");
        assert_eq!(COLUMNS[22], "QR");
        assert_eq!(COLUMNS[35], "verification_status");
        assert_eq!(COLUMNS[41], "gMap link");
        assert_eq!(COLUMNS[42], "Note");
    }

    #[test]
    fn every_column_has_a_sample() {
        for column in COLUMNS {
            assert!(sample_value(column).is_some(), "missing sample for {column}");
        }
        assert_eq!(sample_value("priceRange"), Some("₿₿"));
        assert_eq!(sample_value("sun"), Some("Closed"));
        assert_eq!(sample_value("unknown"), None);
    }
}
