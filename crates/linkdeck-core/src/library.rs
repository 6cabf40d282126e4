//! The canonical list of links and groups.
//!
//! The app root owns exactly one [`Library`]; cards, the scanner, and the
//! settings panel only emit intents that end up as calls here.

use serde::{Deserialize, Serialize};

use crate::error::{LinkError, LinkResult};
use crate::types::{non_blank, Group, GroupId, Link, LinkEdit, LinkId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.groups.is_empty()
    }

    pub fn link(&self, id: &LinkId) -> Option<&Link> {
        self.links.iter().find(|l| &l.id == id)
    }

    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| &g.id == id)
    }

    /// Links filed under `group` (or ungrouped links for `None`), in insertion order
    pub fn links_in<'a>(&'a self, group: Option<&'a GroupId>) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |l| l.group_id.as_ref() == group)
    }

    /// Add a link and return its id.
    ///
    /// A blank title falls back to the URL itself.
    pub fn add_link(
        &mut self,
        url: &str,
        title: &str,
        description: Option<&str>,
        group: Option<GroupId>,
    ) -> LinkResult<LinkId> {
        if let Some(group_id) = &group {
            self.require_group(group_id)?;
        }
        let url = url.trim();
        let title = non_blank(title.to_string()).unwrap_or_else(|| url.to_string());
        let mut link = Link::new(url, title).in_group(group);
        if let Some(description) = description {
            link = link.with_description(description);
        }
        let id = link.id;
        tracing::debug!(%id, url = %link.url, "link added");
        self.links.push(link);
        Ok(id)
    }

    pub fn update_link(&mut self, id: &LinkId, edit: LinkEdit) -> LinkResult<()> {
        let link = self
            .links
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| LinkError::LinkNotFound(id.to_string()))?;

        if let Some(url) = edit.url {
            link.url = url.trim().to_string();
        }
        if let Some(title) = edit.title.and_then(non_blank) {
            link.title = title;
        }
        if let Some(description) = edit.description {
            link.description = non_blank(description);
        }
        tracing::debug!(%id, "link updated");
        Ok(())
    }

    pub fn delete_link(&mut self, id: &LinkId) -> LinkResult<Link> {
        let index = self
            .links
            .iter()
            .position(|l| &l.id == id)
            .ok_or_else(|| LinkError::LinkNotFound(id.to_string()))?;
        tracing::debug!(%id, "link deleted");
        Ok(self.links.remove(index))
    }

    /// Refile a link under another group (None = ungrouped).
    ///
    /// Moving a link to the group it is already in is a no-op.
    pub fn move_link(&mut self, id: &LinkId, group: Option<GroupId>) -> LinkResult<()> {
        if let Some(group_id) = &group {
            self.require_group(group_id)?;
        }
        let link = self
            .links
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| LinkError::LinkNotFound(id.to_string()))?;
        link.group_id = group;
        Ok(())
    }

    pub fn add_group(&mut self, name: &str) -> GroupId {
        let group = Group::new(name.trim());
        let id = group.id;
        self.groups.push(group);
        id
    }

    pub fn rename_group(&mut self, id: &GroupId, name: &str) -> LinkResult<()> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| &g.id == id)
            .ok_or_else(|| LinkError::GroupNotFound(id.to_string()))?;
        group.name = name.trim().to_string();
        Ok(())
    }

    /// Delete a group; its links become ungrouped rather than deleted.
    pub fn delete_group(&mut self, id: &GroupId) -> LinkResult<Group> {
        let index = self
            .groups
            .iter()
            .position(|g| &g.id == id)
            .ok_or_else(|| LinkError::GroupNotFound(id.to_string()))?;
        for link in self.links.iter_mut().filter(|l| l.group_id.as_ref() == Some(id)) {
            link.group_id = None;
        }
        Ok(self.groups.remove(index))
    }

    /// Replace the whole library (data import)
    pub fn replace(&mut self, links: Vec<Link>, groups: Vec<Group>) {
        tracing::info!(links = links.len(), groups = groups.len(), "library replaced");
        self.links = links;
        self.groups = groups;
    }

    pub fn clear(&mut self) {
        tracing::info!("library cleared");
        self.links.clear();
        self.groups.clear();
    }

    fn require_group(&self, id: &GroupId) -> LinkResult<()> {
        if self.group(id).is_some() {
            Ok(())
        } else {
            Err(LinkError::GroupNotFound(id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_link_defaults_title_to_url() {
        let mut lib = Library::new();
        let id = lib.add_link(" https://example.com ", "  ", None, None).unwrap();
        let link = lib.link(&id).unwrap();
        assert_eq!(link.url, "https://example.com");
        assert_eq!(link.title, "https://example.com");
    }

    #[test]
    fn test_add_link_to_unknown_group_fails() {
        let mut lib = Library::new();
        let err = lib
            .add_link("https://a.b", "A", None, Some(GroupId::new()))
            .unwrap_err();
        assert!(matches!(err, LinkError::GroupNotFound(_)));
        assert!(lib.links.is_empty());
    }

    #[test]
    fn test_update_link_partial() {
        let mut lib = Library::new();
        let id = lib.add_link("https://a.b", "A", Some("first"), None).unwrap();

        lib.update_link(
            &id,
            LinkEdit {
                title: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let link = lib.link(&id).unwrap();
        assert_eq!(link.title, "Renamed");
        assert_eq!(link.url, "https://a.b");
        assert_eq!(link.description.as_deref(), Some("first"));

        lib.update_link(
            &id,
            LinkEdit {
                description: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(lib.link(&id).unwrap().description, None);
    }

    #[test]
    fn test_delete_missing_link() {
        let mut lib = Library::new();
        assert!(matches!(
            lib.delete_link(&LinkId::new()),
            Err(LinkError::LinkNotFound(_))
        ));
    }

    #[test]
    fn test_move_link_between_groups() {
        let mut lib = Library::new();
        let work = lib.add_group("Work");
        let id = lib.add_link("https://a.b", "A", None, None).unwrap();

        assert_eq!(lib.links_in(None).count(), 1);
        lib.move_link(&id, Some(work)).unwrap();
        assert_eq!(lib.links_in(None).count(), 0);
        assert_eq!(lib.links_in(Some(&work)).count(), 1);

        lib.move_link(&id, None).unwrap();
        assert_eq!(lib.links_in(Some(&work)).count(), 0);
    }

    #[test]
    fn test_delete_group_ungroups_links() {
        let mut lib = Library::new();
        let work = lib.add_group("Work");
        let id = lib.add_link("https://a.b", "A", None, Some(work)).unwrap();

        lib.delete_group(&work).unwrap();
        assert!(lib.groups.is_empty());
        assert_eq!(lib.link(&id).unwrap().group_id, None);
    }

    #[test]
    fn test_clear() {
        let mut lib = Library::new();
        lib.add_group("Work");
        lib.add_link("https://a.b", "A", None, None).unwrap();
        lib.clear();
        assert!(lib.is_empty());
    }
}
