use async_trait::async_trait;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use tracing::info;

use crate::core::client::resources::{
    ClusterRole, Namespace, Node, PersistentVolume, Pod, Secret, ServiceAccount,
};
use crate::core::client::{
    namespaces, nodes, pods, secrets, service_accounts, volumes, ClusterApi,
};
use crate::errors::ClusterError;

/// Cluster name the local single-node development tooling registers in the
/// kubeconfig. Any other cluster is treated as production.
pub const LOCAL_DEV_CLUSTER: &str = "minikube";

/// Whether the connection points at a local development cluster or a real
/// one. Gates destructive operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentKind {
    Development,
    Production,
}

/// The one live connection to the cluster control plane.
///
/// Built once at startup, never mutated, shared behind an `Arc` by every
/// request handler. The underlying `kube::Client` covers both the core and
/// the RBAC API groups.
pub struct ClusterConnection {
    client: Client,
    cluster_url: String,
    environment: EnvironmentKind,
}

impl ClusterConnection {
    /// Load cluster credentials and open the connection.
    ///
    /// Tries the in-cluster service account first (production deployment),
    /// then the local kubeconfig (development). Failing both is fatal: the
    /// portal cannot run without a cluster.
    pub async fn connect() -> Result<Self, ClusterError> {
        match Config::incluster() {
            Ok(config) => {
                info!("Loaded Kubernetes configuration in 'incluster' mode");
                // No kubeconfig context exists inside the cluster.
                Self::from_config(config, EnvironmentKind::Production)
            }
            Err(incluster_err) => {
                let kubeconfig = Kubeconfig::read().map_err(|kubeconfig_err| {
                    ClusterError::Configuration(format!(
                        "in-cluster credentials unavailable ({incluster_err}) and no kubeconfig either ({kubeconfig_err})"
                    ))
                })?;
                let environment = classify_environment(&kubeconfig);
                let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                    .await
                    .map_err(|e| {
                        ClusterError::Configuration(format!(
                            "kubeconfig present but not loadable: {e}"
                        ))
                    })?;
                info!("Loaded Kubernetes configuration in 'kubeconfig' mode");
                Self::from_config(config, environment)
            }
        }
    }

    fn from_config(config: Config, environment: EnvironmentKind) -> Result<Self, ClusterError> {
        let cluster_url = config.cluster_url.to_string();
        let client = Client::try_from(config)
            .map_err(|e| ClusterError::Configuration(format!("failed to build client: {e}")))?;
        Ok(Self {
            client,
            cluster_url,
            environment,
        })
    }

    /// RBAC API surface. Not exercised by the current portal operations but
    /// part of the connection contract.
    #[allow(dead_code)]
    pub fn rbac(&self) -> Api<ClusterRole> {
        Api::all(self.client.clone())
    }
}

/// A connection is development iff the active kubeconfig context points at
/// the known local cluster, compared case-sensitively.
fn classify_environment(kubeconfig: &Kubeconfig) -> EnvironmentKind {
    let active_cluster = kubeconfig
        .current_context
        .as_deref()
        .and_then(|name| kubeconfig.contexts.iter().find(|c| c.name == name))
        .and_then(|named| named.context.as_ref())
        .map(|context| context.cluster.as_str());

    match active_cluster {
        Some(LOCAL_DEV_CLUSTER) => EnvironmentKind::Development,
        _ => EnvironmentKind::Production,
    }
}

#[async_trait]
impl ClusterApi for ClusterConnection {
    async fn create_namespace(&self, name: &str) -> Result<Namespace, ClusterError> {
        namespaces::create_namespace(&self.client, name).await
    }

    async fn list_namespaces(
        &self,
        field_selector: Option<&str>,
    ) -> Result<Vec<Namespace>, ClusterError> {
        namespaces::fetch_namespaces(&self.client, field_selector).await
    }

    async fn delete_namespace(&self, name: &str) -> Result<(), ClusterError> {
        namespaces::delete_namespace(&self.client, name).await
    }

    async fn get_service_account(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ServiceAccount, ClusterError> {
        service_accounts::fetch_service_account(&self.client, namespace, name).await
    }

    async fn list_service_accounts(&self) -> Result<Vec<ServiceAccount>, ClusterError> {
        service_accounts::fetch_service_accounts(&self.client).await
    }

    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret, ClusterError> {
        secrets::fetch_secret(&self.client, namespace, name).await
    }

    async fn list_pods(&self) -> Result<Vec<Pod>, ClusterError> {
        pods::fetch_pods(&self.client).await
    }

    async fn list_pods_in(&self, namespace: &str) -> Result<Vec<Pod>, ClusterError> {
        pods::fetch_pods_by_namespace(&self.client, namespace).await
    }

    async fn list_nodes(&self) -> Result<Vec<Node>, ClusterError> {
        nodes::fetch_nodes(&self.client).await
    }

    async fn list_persistent_volumes(&self) -> Result<Vec<PersistentVolume>, ClusterError> {
        volumes::fetch_persistent_volumes(&self.client).await
    }

    fn environment(&self) -> EnvironmentKind {
        self.environment
    }

    fn cluster_url(&self) -> &str {
        &self.cluster_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::config::{Context, NamedContext};

    fn kubeconfig_with_context(current: Option<&str>, name: &str, cluster: &str) -> Kubeconfig {
        Kubeconfig {
            current_context: current.map(|s| s.to_string()),
            contexts: vec![NamedContext {
                name: name.to_string(),
                context: Some(Context {
                    cluster: cluster.to_string(),
                    ..Default::default()
                }),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn minikube_context_classifies_as_development() {
        let kc = kubeconfig_with_context(Some("minikube"), "minikube", "minikube");
        assert_eq!(classify_environment(&kc), EnvironmentKind::Development);
    }

    #[test]
    fn other_context_classifies_as_production() {
        let kc = kubeconfig_with_context(Some("prod-admin"), "prod-admin", "prod-eu-1");
        assert_eq!(classify_environment(&kc), EnvironmentKind::Production);
    }

    #[test]
    fn capitalized_cluster_name_is_not_development() {
        // Case-sensitive comparison
        let kc = kubeconfig_with_context(Some("minikube"), "minikube", "Minikube");
        assert_eq!(classify_environment(&kc), EnvironmentKind::Production);
    }

    #[test]
    fn missing_current_context_classifies_as_production() {
        let kc = kubeconfig_with_context(None, "minikube", "minikube");
        assert_eq!(classify_environment(&kc), EnvironmentKind::Production);
    }
}
