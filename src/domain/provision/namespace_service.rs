use std::sync::Arc;

use tracing::{error, info, warn};

use crate::core::client::connector::EnvironmentKind;
use crate::core::client::resources::Namespace;
use crate::core::client::ClusterApi;
use crate::errors::ClusterError;

/// Namespaces the portal never shows to users: the control plane's own.
pub const HIDDEN_NAMESPACES: [&str; 2] = ["kube-system", "kube-public"];

/// What happened to a namespace deletion request. Refusal is a normal,
/// distinguishable outcome, not an error and not a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Refused locally; the cluster was never contacted.
    RefusedProduction,
}

/// Idempotent create-or-fetch of user namespaces, with an environment gate on
/// deletion.
#[derive(Clone)]
pub struct NamespaceService {
    cluster: Arc<dyn ClusterApi>,
}

impl NamespaceService {
    pub fn new(cluster: Arc<dyn ClusterApi>) -> Self {
        Self { cluster }
    }

    /// Create a namespace, or adopt it if it already exists.
    ///
    /// Calling twice with the same name never errors and yields equivalent
    /// records. Any failure other than the existence conflict propagates
    /// unchanged.
    pub async fn ensure_namespace(&self, name: &str) -> Result<Namespace, ClusterError> {
        info!("Creating Kubernetes namespace '{}'", name);
        match self.cluster.create_namespace(name).await {
            Ok(_) => {}
            Err(ClusterError::AlreadyExists { .. }) => {
                warn!(
                    "Tried to create already existing Kubernetes namespace '{}'. \
                     Skipping the creation and using the existing one.",
                    name
                );
            }
            Err(other) => return Err(other),
        }
        // The re-read is authoritative regardless of whose create won.
        self.get_namespace(name).await
    }

    /// Exact-match lookup through a field selector.
    ///
    /// Exactly one result is expected; zero or several is a consistency fault
    /// and fails loudly rather than picking an arbitrary item.
    pub async fn get_namespace(&self, name: &str) -> Result<Namespace, ClusterError> {
        let selector = format!("metadata.name={name}");
        let mut items = self.cluster.list_namespaces(Some(&selector)).await?;
        match items.len() {
            1 => Ok(items.remove(0)),
            0 => Err(ClusterError::NotFound {
                kind: "namespace",
                name: name.to_string(),
            }),
            count => Err(ClusterError::AmbiguousResult {
                name: name.to_string(),
                count,
            }),
        }
    }

    /// All namespaces, unfiltered.
    pub async fn list_namespaces(&self) -> Result<Vec<Namespace>, ClusterError> {
        self.cluster.list_namespaces(None).await
    }

    /// All namespaces except the control plane's own.
    pub async fn list_visible_namespaces(&self) -> Result<Vec<Namespace>, ClusterError> {
        let namespaces = self.list_namespaces().await?;
        Ok(namespaces
            .into_iter()
            .filter(|ns| match ns.metadata.name.as_deref() {
                Some(name) => !HIDDEN_NAMESPACES.contains(&name),
                None => true,
            })
            .collect())
    }

    /// Delete a namespace, allowed only against the local development
    /// cluster. Outside of it the request never reaches the cluster.
    pub async fn delete_namespace(&self, name: &str) -> Result<DeleteOutcome, ClusterError> {
        if self.cluster.environment() == EnvironmentKind::Development {
            warn!(
                "Deletion of Kubernetes namespace '{}', not happening in production.",
                name
            );
            self.cluster.delete_namespace(name).await?;
            Ok(DeleteOutcome::Deleted)
        } else {
            error!("K8s namespace deletion not allowed in production clusters");
            Ok(DeleteOutcome::RefusedProduction)
        }
    }
}
