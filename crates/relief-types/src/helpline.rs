//! Helpline types

use serde::{Deserialize, Serialize};

/// An emergency helpline entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Helpline {
    pub id: String,
    pub name: Option<String>,
    pub number: Option<String>,
    pub category: String,
    pub description: String,
}

/// Helpline creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHelpline {
    pub name: Option<String>,
    pub number: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

fn default_category() -> String {
    "general".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_absent_fields() {
        let new: NewHelpline =
            serde_json::from_str(r#"{"name":"Poison Control","number":"1-800-222-1222"}"#).unwrap();
        assert_eq!(new.name.as_deref(), Some("Poison Control"));
        assert_eq!(new.category, "general");
        assert_eq!(new.description, "");
    }
}
