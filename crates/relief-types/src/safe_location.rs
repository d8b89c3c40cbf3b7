//! Safe location types

use serde::{Deserialize, Serialize};

/// A shelter or other safe location
///
/// Occupancy is stored as reported and is never validated against capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeLocation {
    pub id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub capacity: i64,
    pub current_occupancy: i64,
    pub facilities: Vec<String>,
    pub contact: String,
}

/// Safe location creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSafeLocation {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub capacity: i64,
    #[serde(default)]
    pub current_occupancy: i64,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub contact: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_absent_fields() {
        let new: NewSafeLocation = serde_json::from_str(r#"{"name":"City Hall"}"#).unwrap();
        assert_eq!(new.address, None);
        assert_eq!(new.latitude, None);
        assert_eq!(new.capacity, 0);
        assert_eq!(new.current_occupancy, 0);
        assert!(new.facilities.is_empty());
        assert_eq!(new.contact, "");
    }

    #[test]
    fn facilities_preserve_order() {
        let new: NewSafeLocation =
            serde_json::from_str(r#"{"facilities":["Food","Water","WiFi"]}"#).unwrap();
        assert_eq!(new.facilities, vec!["Food", "Water", "WiFi"]);
    }
}
