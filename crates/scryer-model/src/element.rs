//! Static structure elements that can be deployed: software systems and
//! their containers.

use serde::{Deserialize, Serialize};

use crate::tags::{self, TagSet};
use crate::ElementId;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    Internal,
    External,
    #[default]
    Unspecified,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareSystem {
    pub(crate) id: ElementId,
    pub(crate) name: String,
    pub description: String,
    pub location: Location,
    pub(crate) tags: TagSet,
}

impl SoftwareSystem {
    pub(crate) fn new(id: ElementId, location: Location, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            location,
            tags: TagSet::with_required(&[tags::ELEMENT, tags::SOFTWARE_SYSTEM]),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn add_tags(&mut self, tags: &[&str]) {
        self.tags.add_all(tags);
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    pub fn canonical_name(&self) -> String {
        format!("/{}", self.name)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub(crate) id: ElementId,
    pub(crate) name: String,
    pub description: String,
    pub technology: String,
    pub(crate) software_system_id: ElementId,
    pub(crate) tags: TagSet,
}

impl Container {
    pub(crate) fn new(
        id: ElementId,
        software_system_id: ElementId,
        name: &str,
        description: &str,
        technology: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            technology: technology.to_string(),
            software_system_id,
            tags: TagSet::with_required(&[tags::ELEMENT, tags::CONTAINER]),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the software system this container belongs to.
    pub fn software_system_id(&self) -> &str {
        &self.software_system_id
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn add_tags(&mut self, tags: &[&str]) {
        self.tags.add_all(tags);
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tags_are_required() {
        let mut system = SoftwareSystem::new("1".into(), Location::External, "System", "");
        assert_eq!(system.tags().to_string(), "Element,Software System");
        assert!(!system.remove_tag(tags::SOFTWARE_SYSTEM));

        let mut container = Container::new("2".into(), "1".into(), "Database", "", "MySQL");
        container.add_tags(&["Database"]);
        assert_eq!(container.tags().to_string(), "Element,Container,Database");
        assert!(!container.remove_tag(tags::CONTAINER));
        assert!(container.remove_tag("Database"));
    }

    #[test]
    fn location_serializes_in_camel_case() {
        assert_eq!(
            serde_json::to_string(&Location::External).unwrap(),
            "\"external\""
        );
        assert_eq!(Location::default(), Location::Unspecified);
    }
}
