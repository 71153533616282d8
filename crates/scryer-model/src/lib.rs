//! scryer-model — deployment model for Scryer architecture diagrams.
//!
//! Software systems and containers describe the static structure of an
//! architecture. Deployment nodes describe the infrastructure it runs on,
//! grouped into environments ("Development", "Live", ...). Placing a
//! container or software system on a node creates an *instance*: a separate
//! element with its own id, numbered per underlying element across the whole
//! model, carrying the element's tags plus its own, and (for containers) a
//! list of HTTP health checks.
//!
//! Everything lives in a [`Model`], which owns all entities; entities refer
//! to one another by [`ElementId`].
//!
//! ```
//! use scryer_model::{ElementInstance, Location, Model};
//!
//! let mut model = Model::new();
//! let system = model.add_software_system(Location::Internal, "System", "").unwrap().id().to_string();
//! let database = model.add_container(&system, "Database", "", "MySQL").unwrap().id().to_string();
//! let node = model.add_deployment_node("Live", "Server", "", "Ubuntu").unwrap().id().to_string();
//!
//! let primary = model.add_container_instance(&node, &database).unwrap();
//! assert_eq!(primary.instance_id(), 1);
//! primary.add_health_check("Database is up", "http://db.internal:8080/health").unwrap();
//!
//! let secondary = model.add_container_instance(&node, &database).unwrap().id().to_string();
//! let secondary = model.container_instance(&secondary).unwrap();
//! assert_eq!(secondary.canonical_name(&model), "/System/Database[2]");
//! ```

pub mod deployment;
pub mod element;
pub mod error;
pub mod health;
pub mod instance;
pub mod model;
pub mod relationship;
pub mod tags;

pub use deployment::DeploymentNode;
pub use element::{Container, Location, SoftwareSystem};
pub use error::{ModelError, ModelResult};
pub use health::{HealthCheckSpec, HttpHealthCheck};
pub use instance::{ContainerInstance, ElementInstance, InstanceExport, SoftwareSystemInstance};
pub use model::Model;
pub use relationship::Relationship;
pub use tags::TagSet;

/// Model-unique identifier of an element or relationship ("1", "2", ...).
pub type ElementId = String;
