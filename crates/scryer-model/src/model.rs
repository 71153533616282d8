//! The model arena.
//!
//! [`Model`] owns every element and relationship. Entities refer to each
//! other by [`ElementId`] and are resolved through the lookup methods here.
//! Ids and instance numbers are computed by scanning the current contents
//! rather than kept in counters, so they always reflect what the model holds.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::deployment::{self, DeploymentNode};
use crate::element::{Container, Location, SoftwareSystem};
use crate::error::{ModelError, ModelResult};
use crate::instance::{ContainerInstance, ElementInstance, InstanceExport, SoftwareSystemInstance};
use crate::relationship::Relationship;
use crate::ElementId;

#[derive(Debug, Clone, Default)]
pub struct Model {
    software_systems: Vec<SoftwareSystem>,
    containers: Vec<Container>,
    deployment_nodes: Vec<DeploymentNode>,
    container_instances: Vec<ContainerInstance>,
    software_system_instances: Vec<SoftwareSystemInstance>,
    relationships: Vec<Relationship>,
}

/// Instances serialized through [`Model::export`].
struct Exports<'a, T> {
    model: &'a Model,
    instances: &'a [T],
}

impl<'a, T> Serialize for Exports<'a, T>
where
    InstanceExport<'a, T>: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let model = self.model;
        let instances: &'a [T] = self.instances;
        serializer.collect_seq(instances.iter().map(|instance| model.export(instance)))
    }
}

/// Writes `value` under `key`, or skips the key when `is_empty`.
fn serialize_unless_empty<S, T>(
    state: &mut S,
    key: &'static str,
    value: &T,
    is_empty: bool,
) -> Result<(), S::Error>
where
    S: SerializeStruct,
    T: Serialize + ?Sized,
{
    if is_empty {
        state.skip_field(key)
    } else {
        state.serialize_field(key, value)
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Model", 6)?;
        serialize_unless_empty(
            &mut state,
            "softwareSystems",
            &self.software_systems,
            self.software_systems.is_empty(),
        )?;
        serialize_unless_empty(
            &mut state,
            "containers",
            &self.containers,
            self.containers.is_empty(),
        )?;
        serialize_unless_empty(
            &mut state,
            "deploymentNodes",
            &self.deployment_nodes,
            self.deployment_nodes.is_empty(),
        )?;
        serialize_unless_empty(
            &mut state,
            "containerInstances",
            &Exports {
                model: self,
                instances: &self.container_instances,
            },
            self.container_instances.is_empty(),
        )?;
        serialize_unless_empty(
            &mut state,
            "softwareSystemInstances",
            &Exports {
                model: self,
                instances: &self.software_system_instances,
            },
            self.software_system_instances.is_empty(),
        )?;
        serialize_unless_empty(
            &mut state,
            "relationships",
            &self.relationships,
            self.relationships.is_empty(),
        )?;
        state.end()
    }
}

/// An instance-level relationship waiting to be created from an element-level one.
struct Replica {
    source_id: ElementId,
    destination_id: ElementId,
    description: String,
    technology: String,
    linked_relationship_id: ElementId,
}

fn require_name(name: &str) -> ModelResult<&str> {
    match name.trim() {
        "" => Err(ModelError::MissingName),
        name => Ok(name),
    }
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Ids ---

    fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.software_systems
            .iter()
            .map(|e| e.id())
            .chain(self.containers.iter().map(|e| e.id()))
            .chain(self.deployment_nodes.iter().map(|e| e.id()))
            .chain(self.instances().map(|e| e.id()))
    }

    /// Generate the next element id by scanning existing elements and
    /// relationships, which share one id space: "1", "2", ...
    pub fn next_element_id(&self) -> ElementId {
        let max = self
            .element_ids()
            .chain(self.relationships.iter().map(|r| r.id()))
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    pub fn contains_element(&self, id: &str) -> bool {
        self.element_ids().any(|e| e == id)
    }

    /// Number for the next placement of `element_id`: one past the highest
    /// instance number of that element on any deployment node, or 1.
    pub fn next_instance_id(&self, element_id: &str) -> u32 {
        self.instances_of(element_id)
            .map(|i| i.instance_id())
            .max()
            .unwrap_or(0)
            + 1
    }

    // --- Static structure ---

    pub fn add_software_system(
        &mut self,
        location: Location,
        name: &str,
        description: &str,
    ) -> ModelResult<&mut SoftwareSystem> {
        let name = require_name(name)?;
        if self.software_systems.iter().any(|s| s.name() == name) {
            return Err(ModelError::DuplicateName {
                kind: "software system",
                name: name.to_string(),
            });
        }

        let system = SoftwareSystem::new(self.next_element_id(), location, name, description);
        debug!(id = %system.id, name, "added software system");
        let index = self.software_systems.len();
        self.software_systems.push(system);
        Ok(&mut self.software_systems[index])
    }

    pub fn add_container(
        &mut self,
        software_system_id: &str,
        name: &str,
        description: &str,
        technology: &str,
    ) -> ModelResult<&mut Container> {
        if self.software_system(software_system_id).is_none() {
            return Err(ModelError::ElementNotFound(software_system_id.to_string()));
        }
        let name = require_name(name)?;
        if self
            .containers
            .iter()
            .any(|c| c.software_system_id() == software_system_id && c.name() == name)
        {
            return Err(ModelError::DuplicateName {
                kind: "container",
                name: name.to_string(),
            });
        }

        let container = Container::new(
            self.next_element_id(),
            software_system_id.to_string(),
            name,
            description,
            technology,
        );
        debug!(id = %container.id, software_system_id, name, "added container");
        let index = self.containers.len();
        self.containers.push(container);
        Ok(&mut self.containers[index])
    }

    pub fn software_system(&self, id: &str) -> Option<&SoftwareSystem> {
        self.software_systems.iter().find(|s| s.id() == id)
    }

    pub fn software_system_mut(&mut self, id: &str) -> Option<&mut SoftwareSystem> {
        self.software_systems.iter_mut().find(|s| s.id() == id)
    }

    pub fn software_systems(&self) -> &[SoftwareSystem] {
        &self.software_systems
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id() == id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.id() == id)
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    // --- Deployment nodes ---

    /// Add a top-level deployment node. A blank environment means "Default".
    pub fn add_deployment_node(
        &mut self,
        environment: &str,
        name: &str,
        description: &str,
        technology: &str,
    ) -> ModelResult<&mut DeploymentNode> {
        let environment = deployment::environment_or_default(environment);
        self.push_deployment_node(environment, None, name, description, technology)
    }

    /// Add a deployment node nested in `parent_id`, in the parent's environment.
    pub fn add_child_deployment_node(
        &mut self,
        parent_id: &str,
        name: &str,
        description: &str,
        technology: &str,
    ) -> ModelResult<&mut DeploymentNode> {
        let environment = self
            .deployment_node(parent_id)
            .map(|parent| parent.environment().to_string())
            .ok_or_else(|| ModelError::ElementNotFound(parent_id.to_string()))?;
        self.push_deployment_node(&environment, Some(parent_id), name, description, technology)
    }

    fn push_deployment_node(
        &mut self,
        environment: &str,
        parent_id: Option<&str>,
        name: &str,
        description: &str,
        technology: &str,
    ) -> ModelResult<&mut DeploymentNode> {
        let name = require_name(name)?;
        if self.deployment_nodes.iter().any(|n| {
            n.environment() == environment && n.parent_id() == parent_id && n.name() == name
        }) {
            return Err(ModelError::DuplicateName {
                kind: "deployment node",
                name: name.to_string(),
            });
        }

        let node = DeploymentNode::new(
            self.next_element_id(),
            environment,
            parent_id.map(str::to_string),
            name,
            description,
            technology,
        );
        debug!(id = %node.id, environment, parent_id, name, "added deployment node");
        let index = self.deployment_nodes.len();
        self.deployment_nodes.push(node);
        Ok(&mut self.deployment_nodes[index])
    }

    pub fn deployment_node(&self, id: &str) -> Option<&DeploymentNode> {
        self.deployment_nodes.iter().find(|n| n.id() == id)
    }

    pub fn deployment_node_mut(&mut self, id: &str) -> Option<&mut DeploymentNode> {
        self.deployment_nodes.iter_mut().find(|n| n.id() == id)
    }

    pub fn deployment_nodes(&self) -> &[DeploymentNode] {
        &self.deployment_nodes
    }

    pub fn children_of<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a DeploymentNode> {
        self.deployment_nodes
            .iter()
            .filter(move |n| n.parent_id() == Some(node_id))
    }

    // --- Instances ---

    /// Place `container_id` on `deployment_node_id`, replicating the
    /// container's relationships onto instances in the same environment.
    pub fn add_container_instance(
        &mut self,
        deployment_node_id: &str,
        container_id: &str,
    ) -> ModelResult<&mut ContainerInstance> {
        self.add_container_instance_with(deployment_node_id, container_id, true)
    }

    pub fn add_container_instance_with(
        &mut self,
        deployment_node_id: &str,
        container_id: &str,
        replicate_relationships: bool,
    ) -> ModelResult<&mut ContainerInstance> {
        let environment = self.environment_of(deployment_node_id)?;
        let container = self
            .container(container_id)
            .ok_or_else(|| ModelError::ElementNotFound(container_id.to_string()))?;

        let instance_id = self.next_instance_id(container_id);
        let instance = ContainerInstance::new(
            self.next_element_id(),
            container,
            instance_id,
            deployment_node_id,
            &environment,
        );
        debug!(
            id = %instance.id,
            container_id,
            instance_id,
            deployment_node_id,
            environment = %environment,
            "placed container instance"
        );

        let id = instance.id.clone();
        let index = self.container_instances.len();
        self.container_instances.push(instance);
        if replicate_relationships {
            self.replicate_relationships(&id, container_id, &environment);
        }
        Ok(&mut self.container_instances[index])
    }

    /// Place `software_system_id` on `deployment_node_id`, replicating the
    /// system's relationships onto instances in the same environment.
    pub fn add_software_system_instance(
        &mut self,
        deployment_node_id: &str,
        software_system_id: &str,
    ) -> ModelResult<&mut SoftwareSystemInstance> {
        self.add_software_system_instance_with(deployment_node_id, software_system_id, true)
    }

    pub fn add_software_system_instance_with(
        &mut self,
        deployment_node_id: &str,
        software_system_id: &str,
        replicate_relationships: bool,
    ) -> ModelResult<&mut SoftwareSystemInstance> {
        let environment = self.environment_of(deployment_node_id)?;
        let system = self
            .software_system(software_system_id)
            .ok_or_else(|| ModelError::ElementNotFound(software_system_id.to_string()))?;

        let instance_id = self.next_instance_id(software_system_id);
        let instance = SoftwareSystemInstance::new(
            self.next_element_id(),
            system,
            instance_id,
            deployment_node_id,
            &environment,
        );
        debug!(
            id = %instance.id,
            software_system_id,
            instance_id,
            deployment_node_id,
            environment = %environment,
            "placed software system instance"
        );

        let id = instance.id.clone();
        let index = self.software_system_instances.len();
        self.software_system_instances.push(instance);
        if replicate_relationships {
            self.replicate_relationships(&id, software_system_id, &environment);
        }
        Ok(&mut self.software_system_instances[index])
    }

    fn environment_of(&self, deployment_node_id: &str) -> ModelResult<String> {
        self.deployment_node(deployment_node_id)
            .map(|node| node.environment().to_string())
            .ok_or_else(|| ModelError::ElementNotFound(deployment_node_id.to_string()))
    }

    /// Every instance in the model, container instances first.
    pub fn instances(&self) -> impl Iterator<Item = &dyn ElementInstance> {
        self.container_instances
            .iter()
            .map(|i| i as &dyn ElementInstance)
            .chain(
                self.software_system_instances
                    .iter()
                    .map(|i| i as &dyn ElementInstance),
            )
    }

    /// Instances of one element, across every deployment node.
    pub fn instances_of<'a>(
        &'a self,
        element_id: &'a str,
    ) -> impl Iterator<Item = &'a dyn ElementInstance> {
        self.instances().filter(move |i| i.element_id() == element_id)
    }

    pub fn container_instance(&self, id: &str) -> Option<&ContainerInstance> {
        self.container_instances.iter().find(|i| i.id == id)
    }

    pub fn container_instance_mut(&mut self, id: &str) -> Option<&mut ContainerInstance> {
        self.container_instances.iter_mut().find(|i| i.id == id)
    }

    pub fn container_instances(&self) -> &[ContainerInstance] {
        &self.container_instances
    }

    pub fn container_instances_on<'a>(
        &'a self,
        deployment_node_id: &'a str,
    ) -> impl Iterator<Item = &'a ContainerInstance> {
        self.container_instances
            .iter()
            .filter(move |i| i.deployment_node_id == deployment_node_id)
    }

    pub fn software_system_instance(&self, id: &str) -> Option<&SoftwareSystemInstance> {
        self.software_system_instances.iter().find(|i| i.id == id)
    }

    pub fn software_system_instance_mut(
        &mut self,
        id: &str,
    ) -> Option<&mut SoftwareSystemInstance> {
        self.software_system_instances.iter_mut().find(|i| i.id == id)
    }

    pub fn software_system_instances(&self) -> &[SoftwareSystemInstance] {
        &self.software_system_instances
    }

    /// Pair an instance with this model for serialization, so the written
    /// tags include those inherited from the underlying element.
    pub fn export<'a, T>(&'a self, instance: &'a T) -> InstanceExport<'a, T> {
        InstanceExport {
            instance,
            model: self,
        }
    }

    // --- Relationships ---

    /// Add a relationship from `source_id` to `destination_id`.
    ///
    /// Works between any two elements, including instances. A missing
    /// destination, an unknown element or a relationship that already exists
    /// with the same description is rejected and nothing is added.
    pub fn uses(
        &mut self,
        source_id: &str,
        destination_id: Option<&str>,
        description: &str,
        technology: &str,
    ) -> ModelResult<&Relationship> {
        let destination_id = destination_id.ok_or(ModelError::MissingDestination)?;
        for id in [source_id, destination_id] {
            if !self.contains_element(id) {
                return Err(ModelError::ElementNotFound(id.to_string()));
            }
        }
        if self.has_relationship(source_id, destination_id, description) {
            return Err(ModelError::DuplicateRelationship {
                from: source_id.to_string(),
                to: destination_id.to_string(),
                description: description.to_string(),
            });
        }

        Ok(self.push_relationship(source_id, destination_id, description, technology, None))
    }

    pub fn relationship(&self, id: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.id() == id)
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Relationships whose source or destination is `element_id`.
    pub fn relationships_of<'a>(
        &'a self,
        element_id: &'a str,
    ) -> impl Iterator<Item = &'a Relationship> {
        self.relationships
            .iter()
            .filter(move |r| r.source_id() == element_id || r.destination_id() == element_id)
    }

    fn has_relationship(&self, source_id: &str, destination_id: &str, description: &str) -> bool {
        self.relationships
            .iter()
            .any(|r| r.duplicates(source_id, destination_id, description))
    }

    fn push_relationship(
        &mut self,
        source_id: &str,
        destination_id: &str,
        description: &str,
        technology: &str,
        linked_relationship_id: Option<&str>,
    ) -> &Relationship {
        let mut relationship = Relationship::new(
            self.next_element_id(),
            source_id,
            destination_id,
            description,
            technology,
        );
        relationship.linked_relationship_id = linked_relationship_id.map(str::to_string);
        debug!(
            id = %relationship.id,
            source_id,
            destination_id,
            description,
            linked_relationship_id,
            "added relationship"
        );
        let index = self.relationships.len();
        self.relationships.push(relationship);
        &self.relationships[index]
    }

    /// Mirror the relationships of `element_id` onto the new instance
    /// `instance_id`: each element-level relationship to or from another
    /// element becomes one relationship per instance of that element in the
    /// same environment. Existing duplicates are skipped.
    fn replicate_relationships(&mut self, instance_id: &str, element_id: &str, environment: &str) {
        let mut replicas = Vec::new();
        for relationship in &self.relationships {
            let outgoing = relationship.source_id() == element_id;
            let incoming = relationship.destination_id() == element_id;
            if !outgoing && !incoming {
                continue;
            }

            for other in self.instances().filter(|i| {
                i.environment() == environment && i.id() != instance_id
            }) {
                let mut push = |source_id: &str, destination_id: &str| {
                    replicas.push(Replica {
                        source_id: source_id.to_string(),
                        destination_id: destination_id.to_string(),
                        description: relationship.description().to_string(),
                        technology: relationship.technology().to_string(),
                        linked_relationship_id: relationship.id().to_string(),
                    })
                };
                if outgoing && other.element_id() == relationship.destination_id() {
                    push(instance_id, other.id());
                }
                if incoming && other.element_id() == relationship.source_id() {
                    push(other.id(), instance_id);
                }
            }
        }

        for replica in replicas {
            if self.has_relationship(&replica.source_id, &replica.destination_id, &replica.description) {
                continue;
            }
            self.push_relationship(
                &replica.source_id,
                &replica.destination_id,
                &replica.description,
                &replica.technology,
                Some(&replica.linked_relationship_id),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_container() -> (Model, ElementId, ElementId) {
        let mut model = Model::new();
        let system = model
            .add_software_system(Location::Internal, "System", "Description")
            .unwrap()
            .id()
            .to_string();
        let container = model
            .add_container(&system, "Database", "Stores data", "MySQL")
            .unwrap()
            .id()
            .to_string();
        (model, system, container)
    }

    #[test]
    fn element_ids_are_sequential() {
        let (mut model, system, container) = model_with_container();
        assert_eq!(system, "1");
        assert_eq!(container, "2");

        let node = model
            .add_deployment_node("Live", "Server", "", "")
            .unwrap()
            .id()
            .to_string();
        assert_eq!(node, "3");
        assert_eq!(model.next_element_id(), "4");
    }

    #[test]
    fn relationships_share_the_id_space() {
        let (mut model, system, container) = model_with_container();
        let relationship = model
            .uses(&container, Some(system.as_str()), "Reports to", "")
            .unwrap()
            .id()
            .to_string();
        assert_eq!(relationship, "3");
        assert_eq!(model.next_element_id(), "4");
    }

    #[test]
    fn next_instance_id_counts_per_element() {
        let (mut model, system, container) = model_with_container();
        let node = model
            .add_deployment_node("Live", "Server", "", "")
            .unwrap()
            .id()
            .to_string();

        assert_eq!(model.next_instance_id(&container), 1);
        model.add_container_instance(&node, &container).unwrap();
        model.add_container_instance(&node, &container).unwrap();
        assert_eq!(model.next_instance_id(&container), 3);

        assert_eq!(model.next_instance_id(&system), 1);
        let instance = model.add_software_system_instance(&node, &system).unwrap();
        assert_eq!(instance.instance_id(), 1);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let (mut model, system, _) = model_with_container();

        assert_eq!(
            model.add_software_system(Location::External, "System", "").unwrap_err(),
            ModelError::DuplicateName {
                kind: "software system",
                name: "System".to_string(),
            }
        );
        assert!(matches!(
            model.add_container(&system, "Database", "", ""),
            Err(ModelError::DuplicateName { kind: "container", .. })
        ));

        model.add_deployment_node("Live", "Server", "", "").unwrap();
        assert!(model.add_deployment_node("Live", "Server", "", "").is_err());
        assert!(model.add_deployment_node("Staging", "Server", "", "").is_ok());
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut model = Model::new();
        assert_eq!(
            model.add_software_system(Location::Internal, "  ", "").unwrap_err(),
            ModelError::MissingName
        );
        assert_eq!(
            model.add_deployment_node("Live", "", "", "").unwrap_err(),
            ModelError::MissingName
        );
    }

    #[test]
    fn unknown_ids_are_reported() {
        let (mut model, _, container) = model_with_container();
        assert_eq!(
            model.add_container_instance("42", &container).unwrap_err(),
            ModelError::ElementNotFound("42".to_string())
        );
        assert_eq!(
            model.add_container("42", "Api", "", "").unwrap_err(),
            ModelError::ElementNotFound("42".to_string())
        );
        assert_eq!(
            model.uses(&container, Some("42"), "", "").unwrap_err(),
            ModelError::ElementNotFound("42".to_string())
        );
        assert_eq!(
            model.uses("99", Some(container.as_str()), "", "").unwrap_err(),
            ModelError::ElementNotFound("99".to_string())
        );
        assert!(model.relationships().is_empty());
    }

    #[test]
    fn instances_can_use_static_elements() {
        let (mut model, system, container) = model_with_container();
        let node = model
            .add_deployment_node("Live", "Server", "", "")
            .unwrap()
            .id()
            .to_string();
        let instance = model
            .add_container_instance(&node, &container)
            .unwrap()
            .id()
            .to_string();

        let relationship = model
            .uses(&instance, Some(container.as_str()), "Mirrors", "rsync")
            .unwrap();
        assert_eq!(relationship.source_id(), instance);
        assert_eq!(relationship.destination_id(), container);
        assert_eq!(relationship.description(), "Mirrors");
        assert_eq!(relationship.technology(), "rsync");
        assert_eq!(relationship.linked_relationship_id(), None);

        model
            .uses(&instance, Some(system.as_str()), "Reports to", "")
            .unwrap();
        let destinations: Vec<&str> = model
            .relationships_of(&instance)
            .map(|r| r.destination_id())
            .collect();
        assert_eq!(destinations, [container.as_str(), system.as_str()]);
    }

    #[test]
    fn child_nodes_inherit_the_environment() {
        let mut model = Model::new();
        let parent = model
            .add_deployment_node("Live", "Amazon Web Services", "", "")
            .unwrap()
            .id()
            .to_string();
        let child = model
            .add_child_deployment_node(&parent, "eu-west-1", "", "")
            .unwrap();
        assert_eq!(child.environment(), "Live");
        assert_eq!(child.parent_id(), Some(parent.as_str()));

        // Sibling names only collide under the same parent.
        assert!(model.add_deployment_node("Live", "eu-west-1", "", "").is_ok());
        assert!(model
            .add_child_deployment_node(&parent, "eu-west-1", "", "")
            .is_err());
        assert_eq!(model.children_of(&parent).count(), 1);
    }

    #[test]
    fn failed_calls_leave_the_model_untouched() {
        let (mut model, _, container) = model_with_container();
        let node = model
            .add_deployment_node("Live", "Server", "", "")
            .unwrap()
            .id()
            .to_string();
        let instance = model
            .add_container_instance(&node, &container)
            .unwrap()
            .id()
            .to_string();

        assert!(model.uses(&instance, None, "", "").is_err());
        assert!(model.relationships().is_empty());

        let instance = model.container_instance_mut(&instance).unwrap();
        assert!(instance.add_health_check("Name", "localhost").is_err());
        assert!(instance.health_checks().is_empty());
    }

    #[test]
    fn serializes_without_empty_collections() {
        let (model, _, _) = model_with_container();
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["softwareSystems"][0]["tags"], "Element,Software System");
        assert_eq!(json["containers"][0]["softwareSystemId"], "1");
        assert!(json.get("containerInstances").is_none());
        assert!(json.get("relationships").is_none());
    }

    #[test]
    fn serialized_instances_carry_inherited_tags() {
        let (mut model, system, container) = model_with_container();
        let node = model
            .add_deployment_node("Live", "Server", "", "")
            .unwrap()
            .id()
            .to_string();
        model.add_container_instance(&node, &container).unwrap();
        model.add_software_system_instance(&node, &system).unwrap();

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(
            json["containerInstances"][0]["tags"],
            "Element,Container,Container Instance"
        );
        assert_eq!(json["containerInstances"][0]["containerId"], container.as_str());
        assert!(json["containerInstances"][0].get("healthChecks").is_none());
        assert_eq!(
            json["softwareSystemInstances"][0]["tags"],
            "Element,Software System,Software System Instance"
        );
        assert_eq!(json["softwareSystemInstances"][0]["instanceId"], 1);
    }
}
