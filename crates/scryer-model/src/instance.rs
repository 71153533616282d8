//! Deployed occurrences of static elements.
//!
//! An instance is one placement of a container or software system onto a
//! deployment node. It has its own element id, plus an instance number that
//! counts placements of the same underlying element across the whole model
//! (1, 2, 3, ...). It has no name of its own: it is presented through the
//! underlying element's name and its number, and it inherits that element's
//! tags.
//!
//! Instances hold ids rather than references, so anything derived from the
//! underlying element takes the owning [`Model`] to resolve it. The same
//! goes for serialization: an instance is exported through
//! [`Model::export`], which writes the tags it inherits alongside its own.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::element::{Container, SoftwareSystem};
use crate::error::ModelResult;
use crate::health::{self, HealthCheckSpec, HttpHealthCheck};
use crate::model::Model;
use crate::tags::{self, TagSet};
use crate::ElementId;

/// Behaviour shared by every kind of element instance.
pub trait ElementInstance {
    /// Model-unique element id of the instance itself.
    fn id(&self) -> &str;

    /// Id of the deployed element (the durable link, even when unresolvable).
    fn element_id(&self) -> &str;

    /// Placement number among instances of the same element, starting at 1.
    fn instance_id(&self) -> u32;

    fn deployment_node_id(&self) -> &str;

    fn environment(&self) -> &str;

    /// Tags added to the instance itself, starting with its instance tag.
    fn own_tags(&self) -> &TagSet;

    /// Tags of the underlying element, if it resolves.
    fn element_tags<'m>(&self, model: &'m Model) -> Option<&'m TagSet>;

    /// Canonical name of the underlying element, if it resolves.
    fn element_canonical_name(&self, model: &Model) -> Option<String>;

    /// The software system that owns the underlying element, if any.
    fn parent<'m>(&self, model: &'m Model) -> Option<&'m SoftwareSystem>;

    /// Instances are never named; this is always `None`.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Accepted for symmetry with named elements. The name of an instance is
    /// derived, so the value is discarded.
    fn set_name(&mut self, name: &str) {
        trace!(instance = self.id(), name, "ignoring name set on element instance");
    }

    fn add_tags(&mut self, tags: &[&str]);

    /// Remove a tag added to this instance. Required tags, and tags inherited
    /// from the underlying element, stay in place and `false` is returned.
    fn remove_tag(&mut self, tag: &str) -> bool;

    /// Element tags followed by the instance's own tags.
    fn tags(&self, model: &Model) -> TagSet {
        match self.element_tags(model) {
            Some(element_tags) => element_tags.merged(self.own_tags()),
            None => self.own_tags().clone(),
        }
    }

    /// Tags that cannot be removed: the element type tags and the instance tag.
    fn required_tags(&self, model: &Model) -> Vec<&'static str> {
        self.tags(model).required().to_vec()
    }

    /// `<element canonical name>[<instance id>]`, e.g. `/System/Database[2]`.
    fn canonical_name(&self, model: &Model) -> String {
        format!(
            "{}[{}]",
            self.element_canonical_name(model).unwrap_or_default(),
            self.instance_id()
        )
    }
}

/// A container placed on a deployment node.
#[derive(Debug, Clone)]
pub struct ContainerInstance {
    pub(crate) id: ElementId,
    /// Cached link to the container; may be cleared independently of `container_id`.
    pub(crate) container: Option<ElementId>,
    pub(crate) container_id: ElementId,
    pub(crate) instance_id: u32,
    pub(crate) deployment_node_id: ElementId,
    pub(crate) environment: String,
    pub(crate) tags: TagSet,
    pub(crate) health_checks: Vec<HttpHealthCheck>,
}

impl ContainerInstance {
    pub(crate) fn new(
        id: ElementId,
        container: &Container,
        instance_id: u32,
        deployment_node_id: &str,
        environment: &str,
    ) -> Self {
        Self {
            id,
            container: Some(container.id.clone()),
            container_id: container.id.clone(),
            instance_id,
            deployment_node_id: deployment_node_id.to_string(),
            environment: environment.to_string(),
            tags: TagSet::with_required(&[tags::CONTAINER_INSTANCE]),
            health_checks: Vec::new(),
        }
    }

    /// The container this instance currently links to, if the link is set
    /// and resolves in `model`.
    pub fn container<'m>(&self, model: &'m Model) -> Option<&'m Container> {
        self.container.as_deref().and_then(|id| model.container(id))
    }

    /// Link to `container`, or clear the link with `None`. Clearing keeps
    /// `container_id`.
    pub fn set_container(&mut self, container: Option<&Container>) {
        match container {
            Some(container) => {
                self.container = Some(container.id.clone());
                self.container_id = container.id.clone();
            }
            None => self.container = None,
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Set the container id directly, for links that cannot be resolved yet.
    ///
    /// A cached link to a different container is dropped, so
    /// [`container`](Self::container) never disagrees with the id.
    pub fn set_container_id(&mut self, container_id: &str) {
        if self.container.as_deref() != Some(container_id) {
            self.container = None;
        }
        self.container_id = container_id.to_string();
    }

    pub fn health_checks(&self) -> &[HttpHealthCheck] {
        &self.health_checks
    }

    /// Add a health check polled every 60 seconds with no timeout.
    pub fn add_health_check(&mut self, name: &str, url: &str) -> ModelResult<&HttpHealthCheck> {
        self.add_health_check_with(name, url, health::DEFAULT_INTERVAL, health::DEFAULT_TIMEOUT)
    }

    pub fn add_health_check_with(
        &mut self,
        name: &str,
        url: &str,
        interval: i64,
        timeout: i64,
    ) -> ModelResult<&HttpHealthCheck> {
        let check = HttpHealthCheck::new(name, url, interval, timeout)?;
        Ok(self.push_health_check(check))
    }

    pub fn add_health_check_from(&mut self, spec: HealthCheckSpec) -> ModelResult<&HttpHealthCheck> {
        let check = HttpHealthCheck::try_from(spec)?;
        Ok(self.push_health_check(check))
    }

    fn push_health_check(&mut self, check: HttpHealthCheck) -> &HttpHealthCheck {
        debug!(
            instance = %self.id,
            name = check.name(),
            url = check.url(),
            interval = check.interval(),
            timeout = check.timeout(),
            "added health check"
        );
        self.health_checks.push(check);
        &self.health_checks[self.health_checks.len() - 1]
    }
}

impl ElementInstance for ContainerInstance {
    fn id(&self) -> &str {
        &self.id
    }

    fn element_id(&self) -> &str {
        &self.container_id
    }

    fn instance_id(&self) -> u32 {
        self.instance_id
    }

    fn deployment_node_id(&self) -> &str {
        &self.deployment_node_id
    }

    fn environment(&self) -> &str {
        &self.environment
    }

    fn own_tags(&self) -> &TagSet {
        &self.tags
    }

    fn add_tags(&mut self, tags: &[&str]) {
        self.tags.add_all(tags);
    }

    fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    fn element_tags<'m>(&self, model: &'m Model) -> Option<&'m TagSet> {
        model.container(&self.container_id).map(Container::tags)
    }

    fn element_canonical_name(&self, model: &Model) -> Option<String> {
        let container = model.container(&self.container_id)?;
        let system = model.software_system(container.software_system_id())?;
        Some(format!("{}/{}", system.canonical_name(), container.name()))
    }

    fn parent<'m>(&self, model: &'m Model) -> Option<&'m SoftwareSystem> {
        let container = model.container(&self.container_id)?;
        model.software_system(container.software_system_id())
    }
}

/// A software system placed on a deployment node.
#[derive(Debug, Clone)]
pub struct SoftwareSystemInstance {
    pub(crate) id: ElementId,
    pub(crate) software_system_id: ElementId,
    pub(crate) instance_id: u32,
    pub(crate) deployment_node_id: ElementId,
    pub(crate) environment: String,
    pub(crate) tags: TagSet,
}

impl SoftwareSystemInstance {
    pub(crate) fn new(
        id: ElementId,
        software_system: &SoftwareSystem,
        instance_id: u32,
        deployment_node_id: &str,
        environment: &str,
    ) -> Self {
        Self {
            id,
            software_system_id: software_system.id.clone(),
            instance_id,
            deployment_node_id: deployment_node_id.to_string(),
            environment: environment.to_string(),
            tags: TagSet::with_required(&[tags::SOFTWARE_SYSTEM_INSTANCE]),
        }
    }

    pub fn software_system_id(&self) -> &str {
        &self.software_system_id
    }

    pub fn software_system<'m>(&self, model: &'m Model) -> Option<&'m SoftwareSystem> {
        model.software_system(&self.software_system_id)
    }
}

impl ElementInstance for SoftwareSystemInstance {
    fn id(&self) -> &str {
        &self.id
    }

    fn element_id(&self) -> &str {
        &self.software_system_id
    }

    fn instance_id(&self) -> u32 {
        self.instance_id
    }

    fn deployment_node_id(&self) -> &str {
        &self.deployment_node_id
    }

    fn environment(&self) -> &str {
        &self.environment
    }

    fn own_tags(&self) -> &TagSet {
        &self.tags
    }

    fn add_tags(&mut self, tags: &[&str]) {
        self.tags.add_all(tags);
    }

    fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    fn element_tags<'m>(&self, model: &'m Model) -> Option<&'m TagSet> {
        self.software_system(model).map(SoftwareSystem::tags)
    }

    fn element_canonical_name(&self, model: &Model) -> Option<String> {
        self.software_system(model).map(SoftwareSystem::canonical_name)
    }

    /// Software systems sit at the top of the model.
    fn parent<'m>(&self, _model: &'m Model) -> Option<&'m SoftwareSystem> {
        None
    }
}

/// An instance as it is written out: its fields plus the tags it inherits
/// from the underlying element. Built by [`Model::export`].
#[derive(Debug)]
pub struct InstanceExport<'a, T> {
    pub(crate) instance: &'a T,
    pub(crate) model: &'a Model,
}

impl Serialize for InstanceExport<'_, ContainerInstance> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let instance = self.instance;
        let mut state = serializer.serialize_struct("ContainerInstance", 7)?;
        state.serialize_field("id", &instance.id)?;
        state.serialize_field("containerId", &instance.container_id)?;
        state.serialize_field("instanceId", &instance.instance_id)?;
        state.serialize_field("deploymentNodeId", &instance.deployment_node_id)?;
        state.serialize_field("environment", &instance.environment)?;
        state.serialize_field("tags", &instance.tags(self.model))?;
        if instance.health_checks.is_empty() {
            state.skip_field("healthChecks")?;
        } else {
            state.serialize_field("healthChecks", &instance.health_checks)?;
        }
        state.end()
    }
}

impl Serialize for InstanceExport<'_, SoftwareSystemInstance> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let instance = self.instance;
        let mut state = serializer.serialize_struct("SoftwareSystemInstance", 6)?;
        state.serialize_field("id", &instance.id)?;
        state.serialize_field("softwareSystemId", &instance.software_system_id)?;
        state.serialize_field("instanceId", &instance.instance_id)?;
        state.serialize_field("deploymentNodeId", &instance.deployment_node_id)?;
        state.serialize_field("environment", &instance.environment)?;
        state.serialize_field("tags", &instance.tags(self.model))?;
        state.end()
    }
}
