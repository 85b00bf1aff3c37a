// Kube-rs based Kubernetes client
pub mod connector;
pub mod namespaces;
pub mod nodes;
pub mod pods;
pub mod resources;
pub mod secrets;
pub mod service_accounts;
pub mod volumes;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::core::client::connector::EnvironmentKind;
use crate::core::client::resources::{Namespace, Node, PersistentVolume, Pod, Secret, ServiceAccount};
use crate::errors::ClusterError;

/// Typed access to the cluster control plane.
///
/// The single seam between the portal and the cluster: the live
/// [`connector::ClusterConnection`] implements it against the real API server,
/// tests substitute an in-memory fake. Every operation is a stateless
/// request/response call; no retries, caching, or timeouts beyond the
/// transport defaults.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    async fn create_namespace(&self, name: &str) -> Result<Namespace, ClusterError>;
    async fn list_namespaces(
        &self,
        field_selector: Option<&str>,
    ) -> Result<Vec<Namespace>, ClusterError>;
    async fn delete_namespace(&self, name: &str) -> Result<(), ClusterError>;
    async fn get_service_account(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ServiceAccount, ClusterError>;
    async fn list_service_accounts(&self) -> Result<Vec<ServiceAccount>, ClusterError>;
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret, ClusterError>;
    async fn list_pods(&self) -> Result<Vec<Pod>, ClusterError>;
    async fn list_pods_in(&self, namespace: &str) -> Result<Vec<Pod>, ClusterError>;
    async fn list_nodes(&self) -> Result<Vec<Node>, ClusterError>;
    async fn list_persistent_volumes(&self) -> Result<Vec<PersistentVolume>, ClusterError>;

    fn environment(&self) -> EnvironmentKind;
    fn cluster_url(&self) -> &str;
}

/// Map recognized kube API failures onto their own variants; everything else
/// passes through unchanged.
pub(crate) fn map_kube_error(kind: &'static str, name: &str, err: kube::Error) -> ClusterError {
    match err {
        kube::Error::Api(ae) if ae.code == 409 => ClusterError::AlreadyExists {
            kind,
            name: name.to_string(),
        },
        kube::Error::Api(ae) if ae.code == 404 => ClusterError::NotFound {
            kind,
            name: name.to_string(),
        },
        other => ClusterError::Api(other),
    }
}
