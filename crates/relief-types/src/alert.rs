//! Alert types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored disaster alert
///
/// The identifier and timestamp are assigned by the store at insert time;
/// everything else comes from the creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub title: Option<String>,
    pub message: Option<String>,
    pub severity: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
}

/// Alert creation request
///
/// Fields without a documented default deserialize to `None` when absent
/// and are stored as null; nothing is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAlert {
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(default = "default_severity")]
    pub severity: String,
    #[serde(default)]
    pub location: String,
}

fn default_severity() -> String {
    "medium".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_absent_fields() {
        let new: NewAlert = serde_json::from_str("{}").unwrap();
        assert_eq!(new.title, None);
        assert_eq!(new.message, None);
        assert_eq!(new.severity, "medium");
        assert_eq!(new.location, "");
    }

    #[test]
    fn provided_fields_win_over_defaults() {
        let new: NewAlert = serde_json::from_str(
            r#"{"title":"Flood","message":"Evacuate","severity":"high","location":"Downtown"}"#,
        )
        .unwrap();
        assert_eq!(new.title.as_deref(), Some("Flood"));
        assert_eq!(new.severity, "high");
        assert_eq!(new.location, "Downtown");
    }
}
