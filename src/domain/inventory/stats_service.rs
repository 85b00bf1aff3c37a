use std::sync::Arc;

use serde::Serialize;
use tracing::error;

use crate::core::client::resources::{Node, ServiceAccount};
use crate::core::client::ClusterApi;
use crate::errors::ClusterError;

/// Namespace where the control plane runs its own pods.
pub const SYSTEM_NAMESPACE: &str = "kube-system";

/// Image-name marker identifying the control-plane proxy container, the only
/// place a usable version tag can be scraped from.
const PROXY_IMAGE_MARKER: &str = "kube-proxy";

/// Point-in-time cluster statistics for the portal dashboard.
#[derive(Debug, Serialize)]
pub struct InventorySnapshot {
    pub pods: usize,
    pub nodes: usize,
    pub cpu_cores: u64,
    pub memory_gib: f64,
    pub volumes: usize,
    pub kubernetes_version: Option<String>,
    pub apiserver: String,
}

/// Side-effect-free aggregation reads over the cluster.
///
/// Every call re-queries the cluster: nothing is cached here, callers needing
/// repeated access cache externally.
#[derive(Clone)]
pub struct StatsService {
    cluster: Arc<dyn ClusterApi>,
    apiserver_override: Option<String>,
}

impl StatsService {
    pub fn new(cluster: Arc<dyn ClusterApi>, apiserver_override: Option<String>) -> Self {
        Self {
            cluster,
            apiserver_override,
        }
    }

    pub async fn get_number_of_pods(&self) -> Result<usize, ClusterError> {
        Ok(self.cluster.list_pods().await?.len())
    }

    pub async fn get_number_of_nodes(&self) -> Result<usize, ClusterError> {
        Ok(self.cluster.list_nodes().await?.len())
    }

    pub async fn get_number_of_volumes(&self) -> Result<usize, ClusterError> {
        Ok(self.cluster.list_persistent_volumes().await?.len())
    }

    /// Sum of the integer CPU core capacity advertised by each node.
    pub async fn get_number_of_cpu_cores(&self) -> Result<u64, ClusterError> {
        let nodes = self.cluster.list_nodes().await?;
        let mut cores = 0;
        for node in &nodes {
            if let Some(cpu) = capacity_field(node, "cpu") {
                cores += cpu.parse::<u64>().map_err(|_| ClusterError::Capacity {
                    node: node_name(node),
                    what: "cpu",
                    value: cpu.to_string(),
                })?;
            }
        }
        Ok(cores)
    }

    /// Total node memory in GiBytes.
    pub async fn get_memory_sum(&self) -> Result<f64, ClusterError> {
        let nodes = self.cluster.list_nodes().await?;
        let mut kibibytes = 0;
        for node in &nodes {
            if let Some(memory) = capacity_field(node, "memory") {
                kibibytes += parse_memory_kib(node, memory)?;
            }
        }
        // Decimal divisor, not 1024-based; the dashboard has always reported
        // this figure.
        Ok(kibibytes as f64 / 1_000_000.0)
    }

    /// Best-effort version scrape: the tag of the control-plane proxy image
    /// in the system namespace. No cluster API exposes a single version field
    /// directly, so a miss yields `None`, never a guess.
    pub async fn get_kubernetes_version(&self) -> Result<Option<String>, ClusterError> {
        let pods = self.cluster.list_pods_in(SYSTEM_NAMESPACE).await?;
        for pod in &pods {
            let containers = pod
                .spec
                .as_ref()
                .map(|spec| spec.containers.as_slice())
                .unwrap_or(&[]);
            for container in containers {
                if let Some(image) = &container.image {
                    if image.contains(PROXY_IMAGE_MARKER) {
                        if let Some((_, tag)) = image.rsplit_once(':') {
                            return Ok(Some(tag.to_string()));
                        }
                    }
                }
            }
        }
        error!(
            "Kubernetes version not identifiable, list of pods in '{}': {:?}",
            SYSTEM_NAMESPACE, pods
        );
        Ok(None)
    }

    /// The API server endpoint to hand out to users: the configured external
    /// override when present, otherwise the endpoint this process itself
    /// connects to.
    pub fn get_apiserver(&self) -> String {
        self.apiserver_override
            .clone()
            .unwrap_or_else(|| self.cluster.cluster_url().to_string())
    }

    pub async fn get_service_accounts(&self) -> Result<Vec<ServiceAccount>, ClusterError> {
        self.cluster.list_service_accounts().await
    }

    pub async fn get_cluster_stats(&self) -> Result<InventorySnapshot, ClusterError> {
        Ok(InventorySnapshot {
            pods: self.get_number_of_pods().await?,
            nodes: self.get_number_of_nodes().await?,
            cpu_cores: self.get_number_of_cpu_cores().await?,
            memory_gib: self.get_memory_sum().await?,
            volumes: self.get_number_of_volumes().await?,
            kubernetes_version: self.get_kubernetes_version().await?,
            apiserver: self.get_apiserver(),
        })
    }
}

fn node_name(node: &Node) -> String {
    node.metadata.name.clone().unwrap_or_default()
}

fn capacity_field<'a>(node: &'a Node, field: &str) -> Option<&'a str> {
    node.status
        .as_ref()
        .and_then(|status| status.capacity.as_ref())
        .and_then(|capacity| capacity.get(field))
        .map(|quantity| quantity.0.as_str())
}

/// Memory capacity arrives as an integer with a two-character unit suffix
/// ("Ki"); strip the suffix and parse.
fn parse_memory_kib(node: &Node, value: &str) -> Result<u64, ClusterError> {
    let digits = value.get(..value.len().saturating_sub(2)).unwrap_or("");
    digits.parse::<u64>().map_err(|_| ClusterError::Capacity {
        node: node_name(node),
        what: "memory",
        value: value.to_string(),
    })
}
