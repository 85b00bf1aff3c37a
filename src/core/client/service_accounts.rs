use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::map_kube_error;
use crate::core::client::resources::ServiceAccount;
use crate::errors::ClusterError;

/// Fetch a single service account by name and namespace
pub async fn fetch_service_account(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<ServiceAccount, ClusterError> {
    let accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), namespace);
    let account = accounts
        .get(name)
        .await
        .map_err(|e| map_kube_error("serviceaccount", name, e))?;

    debug!("Fetched service account: {}/{}", namespace, name);
    Ok(account)
}

/// Fetch all service accounts across namespaces
pub async fn fetch_service_accounts(client: &Client) -> Result<Vec<ServiceAccount>, ClusterError> {
    let accounts: Api<ServiceAccount> = Api::all(client.clone());
    let account_list = accounts.list(&ListParams::default()).await?;

    debug!("Discovered {} service account(s)", account_list.items.len());
    Ok(account_list.items)
}
