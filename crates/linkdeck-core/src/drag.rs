//! Payload carried from a dragged card to a drop target.

use serde::{Deserialize, Serialize};

use crate::types::LinkId;

/// What is being dragged. Serialized as `{"type":"link","id":"…"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DragPayload {
    Link { id: LinkId },
}

impl DragPayload {
    pub fn to_json(&self) -> String {
        // A tagged enum over a string id cannot fail to serialize
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let id = LinkId::new();
        let payload = DragPayload::Link { id };
        let value: serde_json::Value = serde_json::from_str(&payload.to_json()).unwrap();
        assert_eq!(value["type"], "link");
        assert_eq!(value["id"], id.to_string());
    }

    #[test]
    fn test_foreign_payload_ignored() {
        assert_eq!(DragPayload::from_json(r#"{"type":"file","id":"x"}"#), None);
        assert_eq!(DragPayload::from_json("plain text"), None);
    }
}
