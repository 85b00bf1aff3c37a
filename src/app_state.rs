use std::sync::Arc;

use crate::core::client::ClusterApi;
use crate::domain::access::token_service::TokenService;
use crate::domain::inventory::stats_service::StatsService;
use crate::domain::provision::namespace_service::NamespaceService;

#[derive(Clone)]
pub struct AppState {
    pub namespace_service: Arc<NamespaceService>,
    pub token_service: Arc<TokenService>,
    pub stats_service: Arc<StatsService>,
}

/// Wire the domain services to the one shared cluster connection.
pub fn build_app_state(
    cluster: Arc<dyn ClusterApi>,
    apiserver_override: Option<String>,
) -> AppState {
    AppState {
        namespace_service: Arc::new(NamespaceService::new(cluster.clone())),
        token_service: Arc::new(TokenService::new(cluster.clone())),
        stats_service: Arc::new(StatsService::new(cluster, apiserver_override)),
    }
}
