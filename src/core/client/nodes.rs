use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::resources::Node;
use crate::errors::ClusterError;

/// Fetch all nodes in the cluster
pub async fn fetch_nodes(client: &Client) -> Result<Vec<Node>, ClusterError> {
    let nodes: Api<Node> = Api::all(client.clone());
    let node_list = nodes.list(&ListParams::default()).await?;

    debug!("Discovered {} node(s)", node_list.items.len());
    Ok(node_list.items)
}
