use kube::{Api, Client};
use tracing::debug;

use crate::core::client::map_kube_error;
use crate::core::client::resources::Secret;
use crate::errors::ClusterError;

/// Fetch a single secret by name and namespace
pub async fn fetch_secret(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<Secret, ClusterError> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);
    let secret = secrets
        .get(name)
        .await
        .map_err(|e| map_kube_error("secret", name, e))?;

    debug!("Fetched secret: {}/{}", namespace, name);
    Ok(secret)
}
