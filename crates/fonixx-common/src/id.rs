use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// DOM id of an element created by the behavior layer (annotations, notices).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// A fresh id of the form `{prefix}-{8 hex chars}`.
    pub fn new(prefix: &str) -> Self {
        Self(format!("{prefix}-{}", new_correlation_id()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_id_length() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn element_id_has_prefix() {
        let id = ElementId::new("error");
        assert!(id.as_str().starts_with("error-"));
        assert_eq!(id.as_str().len(), "error-".len() + 8);
    }

    #[test]
    fn element_ids_are_unique() {
        assert_ne!(ElementId::new("notice"), ElementId::new("notice"));
    }

    #[test]
    fn element_id_display_and_serde() {
        let id = ElementId::from("notice-0badf00d");
        assert_eq!(id.to_string(), "notice-0badf00d");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"notice-0badf00d\"");
    }
}
