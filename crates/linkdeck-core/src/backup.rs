//! Export/import documents for the settings panel and the CLI.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LinkError, LinkResult};
use crate::library::Library;
use crate::types::{Group, Link};

/// A full copy of the library as written by "Export"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backup {
    /// RFC 3339 timestamp of the export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Backup {
    /// Snapshot the library, stamped with the current time
    pub fn from_library(library: &Library) -> Self {
        Self {
            exported_at: Some(chrono::Utc::now().to_rfc3339()),
            links: library.links.clone(),
            groups: library.groups.clone(),
        }
    }

    pub fn to_json(&self) -> LinkResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate an imported document.
    ///
    /// Duplicate link or group ids reject the whole document. Links that
    /// point at a group missing from the document are kept, ungrouped.
    pub fn parse(json: &str) -> LinkResult<Self> {
        let mut backup: Backup = serde_json::from_str(json)?;

        let mut group_ids = HashSet::new();
        for group in &backup.groups {
            if !group_ids.insert(group.id) {
                return Err(LinkError::InvalidBackup(format!(
                    "duplicate group id {}",
                    group.id
                )));
            }
        }

        let mut link_ids = HashSet::new();
        for link in backup.links.iter_mut() {
            if !link_ids.insert(link.id) {
                return Err(LinkError::InvalidBackup(format!(
                    "duplicate link id {}",
                    link.id
                )));
            }
            if let Some(group) = link.group_id {
                if !group_ids.contains(&group) {
                    tracing::warn!(link = %link.id, %group, "dropping reference to unknown group");
                    link.group_id = None;
                }
            }
        }

        Ok(backup)
    }

    pub fn into_parts(self) -> (Vec<Link>, Vec<Group>) {
        (self.links, self.groups)
    }
}
