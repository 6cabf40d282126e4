//! Core types for LinkDeck

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::LinkError;

/// Unique identifier for a saved link
///
/// Uses ULID for time-ordered unique identifiers that sort lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(pub Ulid);

impl LinkId {
    /// Create a new LinkId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Get the underlying ULID
    pub fn as_ulid(&self) -> &Ulid {
        &self.0
    }
}

impl Default for LinkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LinkId {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s.trim())
            .map(Self)
            .map_err(|e| LinkError::InvalidId(format!("{s}: {e}")))
    }
}

/// Unique identifier for a group of links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub Ulid);

impl GroupId {
    /// Create a new GroupId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroupId {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s.trim())
            .map(Self)
            .map_err(|e| LinkError::InvalidId(format!("{s}: {e}")))
    }
}

/// A saved link
///
/// Components receive links by reference and never mutate them; changes
/// flow back to the owner of the [`Library`](crate::Library) as intents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Unique identifier
    pub id: LinkId,
    /// Target address, stored as entered
    pub url: String,
    /// Display title
    pub title: String,
    /// Optional one-line description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Group this link is filed under (None = ungrouped)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// Unix timestamp of creation
    #[serde(default)]
    pub created_at: i64,
}

impl Link {
    /// Create a new ungrouped link with the current timestamp
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: LinkId::new(),
            url: url.into(),
            title: title.into(),
            description: None,
            group_id: None,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Builder-style description setter; blank descriptions become None
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(description.into());
        self
    }

    /// Builder-style group setter
    pub fn in_group(mut self, group: Option<GroupId>) -> Self {
        self.group_id = group;
        self
    }
}

/// A named group of links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier
    pub id: GroupId,
    /// Display name
    pub name: String,
    /// Unix timestamp of creation
    #[serde(default)]
    pub created_at: i64,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Field changes submitted from the link editor
///
/// `None` leaves a field untouched. For `description`, `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkEdit {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

pub(crate) fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_id_parse_roundtrip() {
        let id = LinkId::new();
        let parsed: LinkId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_link_id_rejects_garbage() {
        let err = "not-a-ulid".parse::<LinkId>().unwrap_err();
        assert!(matches!(err, LinkError::InvalidId(_)));
    }

    #[test]
    fn test_link_serializes_id_as_string() {
        let link = Link::new("https://example.com", "Example");
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["id"], serde_json::Value::String(link.id.to_string()));
        assert!(json.get("description").is_none());
        assert!(json.get("group_id").is_none());
    }

    #[test]
    fn test_blank_description_is_none() {
        let link = Link::new("https://example.com", "Example").with_description("   ");
        assert_eq!(link.description, None);

        let link = Link::new("https://example.com", "Example").with_description(" docs ");
        assert_eq!(link.description.as_deref(), Some("docs"));
    }

    #[test]
    fn test_link_deserializes_without_optional_fields() {
        let json = format!(
            r#"{{"id":"{}","url":"https://a.b","title":"A"}}"#,
            LinkId::new()
        );
        let link: Link = serde_json::from_str(&json).unwrap();
        assert_eq!(link.group_id, None);
        assert_eq!(link.created_at, 0);
    }
}
