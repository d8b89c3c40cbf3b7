//! Volunteer types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered volunteer
///
/// Email carries no uniqueness constraint; registering twice creates two
/// records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub availability: String,
    pub location: String,
    pub registered_at: DateTime<Utc>,
}

/// Volunteer registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVolunteer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "default_availability")]
    pub availability: String,
    #[serde(default)]
    pub location: String,
}

fn default_availability() -> String {
    "available".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_absent_fields() {
        let new: NewVolunteer = serde_json::from_str(r#"{"name":"John Doe"}"#).unwrap();
        assert_eq!(new.email, None);
        assert!(new.skills.is_empty());
        assert_eq!(new.availability, "available");
        assert_eq!(new.location, "");
    }
}
