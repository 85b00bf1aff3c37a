use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::resources::PersistentVolume;
use crate::errors::ClusterError;

/// Fetch all persistent volumes (cluster-scoped, provider-agnostic)
pub async fn fetch_persistent_volumes(
    client: &Client,
) -> Result<Vec<PersistentVolume>, ClusterError> {
    let volumes: Api<PersistentVolume> = Api::all(client.clone());
    let volume_list = volumes.list(&ListParams::default()).await?;

    debug!("Discovered {} persistent volume(s)", volume_list.items.len());
    Ok(volume_list.items)
}
