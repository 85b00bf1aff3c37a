use kube::api::{DeleteParams, ListParams, PostParams};
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::map_kube_error;
use crate::core::client::resources::{Namespace, ObjectMeta};
use crate::errors::ClusterError;

/// Create a namespace object with the given name.
///
/// An existing namespace surfaces as `ClusterError::AlreadyExists`; recovery
/// is the caller's decision.
pub async fn create_namespace(client: &Client, name: &str) -> Result<Namespace, ClusterError> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let ns = Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let created = namespaces
        .create(&PostParams::default(), &ns)
        .await
        .map_err(|e| map_kube_error("namespace", name, e))?;

    debug!("Created namespace '{}'", name);
    Ok(created)
}

/// Fetch namespaces, optionally narrowed by a field selector
/// (e.g. "metadata.name=default")
pub async fn fetch_namespaces(
    client: &Client,
    field_selector: Option<&str>,
) -> Result<Vec<Namespace>, ClusterError> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let mut lp = ListParams::default();
    if let Some(fields) = field_selector {
        lp = lp.fields(fields);
    }
    let namespace_list = namespaces.list(&lp).await?;

    debug!("Discovered {} namespace(s)", namespace_list.items.len());
    Ok(namespace_list.items)
}

/// Delete a namespace by name.
pub async fn delete_namespace(client: &Client, name: &str) -> Result<(), ClusterError> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    namespaces
        .delete(name, &DeleteParams::default())
        .await
        .map_err(|e| map_kube_error("namespace", name, e))?;

    debug!("Deleted namespace '{}'", name);
    Ok(())
}
