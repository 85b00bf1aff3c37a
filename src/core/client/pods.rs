use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::resources::Pod;
use crate::errors::ClusterError;

/// Fetch all pods in the cluster
pub async fn fetch_pods(client: &Client) -> Result<Vec<Pod>, ClusterError> {
    let pods: Api<Pod> = Api::all(client.clone());
    let pod_list = pods.list(&ListParams::default()).await?;

    debug!("Discovered {} pod(s)", pod_list.items.len());
    Ok(pod_list.items)
}

/// Fetch pods in a specific namespace
pub async fn fetch_pods_by_namespace(
    client: &Client,
    namespace: &str,
) -> Result<Vec<Pod>, ClusterError> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let pod_list = pods.list(&ListParams::default()).await?;

    debug!(
        "Discovered {} pod(s) in namespace '{}'",
        pod_list.items.len(),
        namespace
    );
    Ok(pod_list.items)
}
