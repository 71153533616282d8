//! Deployment nodes: the infrastructure that element instances are placed on.
//!
//! Nodes form a tree per deployment environment. Placing an element on a
//! node is done through the model (`Model::add_container_instance`,
//! `Model::add_software_system_instance`) since numbering the new instance
//! needs a view of every other instance in the model.

use serde::Serialize;

use crate::error::{ModelError, ModelResult};
use crate::model::Model;
use crate::tags::{self, TagSet};
use crate::ElementId;

pub const DEFAULT_ENVIRONMENT: &str = "Default";

pub(crate) fn environment_or_default(environment: &str) -> &str {
    match environment.trim() {
        "" => DEFAULT_ENVIRONMENT,
        env => env,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentNode {
    pub(crate) id: ElementId,
    pub(crate) name: String,
    pub description: String,
    pub technology: String,
    pub(crate) environment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parent_id: Option<ElementId>,
    pub(crate) instances: u32,
    pub(crate) tags: TagSet,
}

impl DeploymentNode {
    pub(crate) fn new(
        id: ElementId,
        environment: &str,
        parent_id: Option<ElementId>,
        name: &str,
        description: &str,
        technology: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            technology: technology.to_string(),
            environment: environment_or_default(environment).to_string(),
            parent_id,
            instances: 1,
            tags: TagSet::with_required(&[tags::ELEMENT, tags::DEPLOYMENT_NODE]),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// How many physical copies of this node exist (e.g. servers in a cluster).
    pub fn instances(&self) -> u32 {
        self.instances
    }

    pub fn set_instances(&mut self, instances: i64) -> ModelResult<()> {
        match u32::try_from(instances) {
            Ok(n) if n >= 1 => {
                self.instances = n;
                Ok(())
            }
            _ => Err(ModelError::InvalidInstanceCount),
        }
    }

    /// `/Deployment/<environment>/<ancestors...>/<name>`.
    pub fn canonical_name(&self, model: &Model) -> String {
        let mut names = vec![self.name.as_str()];
        let mut parent_id = self.parent_id.as_deref();
        while let Some(parent) = parent_id.and_then(|id| model.deployment_node(id)) {
            names.push(parent.name());
            parent_id = parent.parent_id();
        }
        names.reverse();
        format!("/Deployment/{}/{}", self.environment, names.join("/"))
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
