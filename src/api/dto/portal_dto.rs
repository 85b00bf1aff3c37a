//! Portal API DTOs

use serde::{Deserialize, Serialize};

use crate::core::client::resources::{Namespace, ServiceAccount};
use crate::domain::provision::namespace_service::DeleteOutcome;

#[derive(Deserialize, Debug)]
pub struct NamespaceCreateRequest {
    pub name: String,
}

#[derive(Serialize, Debug)]
pub struct NamespaceDto {
    pub name: String,
    pub phase: Option<String>,
}

impl From<Namespace> for NamespaceDto {
    fn from(ns: Namespace) -> Self {
        Self {
            name: ns.metadata.name.unwrap_or_default(),
            phase: ns.status.and_then(|status| status.phase),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct NamespaceDeleteDto {
    pub name: String,
    pub outcome: &'static str,
}

impl NamespaceDeleteDto {
    pub fn new(name: String, outcome: DeleteOutcome) -> Self {
        let outcome = match outcome {
            DeleteOutcome::Deleted => "deleted",
            DeleteOutcome::RefusedProduction => "refused_production",
        };
        Self { name, outcome }
    }
}

#[derive(Serialize)]
pub struct TokenDto {
    pub token: String,
}

#[derive(Serialize, Debug)]
pub struct ServiceAccountDto {
    pub namespace: String,
    pub name: String,
}

impl From<ServiceAccount> for ServiceAccountDto {
    fn from(sa: ServiceAccount) -> Self {
        Self {
            namespace: sa.metadata.namespace.unwrap_or_default(),
            name: sa.metadata.name.unwrap_or_default(),
        }
    }
}
