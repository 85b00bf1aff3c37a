//! In-memory stand-in for the live cluster connection, used by service tests.
//!
//! Objects live in plain `Mutex<Vec<_>>` stores; namespace deletions are
//! recorded so tests can assert the cluster was (or was not) contacted.

use std::sync::Mutex;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Container, NodeStatus, ObjectReference, PodSpec};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::ByteString;

use crate::core::client::connector::EnvironmentKind;
use crate::core::client::resources::{
    Namespace, Node, ObjectMeta, PersistentVolume, Pod, Secret, ServiceAccount,
};
use crate::core::client::ClusterApi;
use crate::errors::ClusterError;

pub struct FakeCluster {
    pub namespaces: Mutex<Vec<Namespace>>,
    pub pods: Mutex<Vec<Pod>>,
    pub nodes: Mutex<Vec<Node>>,
    pub volumes: Mutex<Vec<PersistentVolume>>,
    pub accounts: Mutex<Vec<ServiceAccount>>,
    pub secrets: Mutex<Vec<Secret>>,
    /// Spy log: names passed to `delete_namespace`.
    pub deleted_namespaces: Mutex<Vec<String>>,
    /// When set, the next `create_namespace` call fails with this error.
    pub create_failure: Mutex<Option<ClusterError>>,
    pub environment: EnvironmentKind,
    pub cluster_url: String,
}

impl FakeCluster {
    pub fn new(environment: EnvironmentKind) -> Self {
        Self {
            namespaces: Mutex::new(Vec::new()),
            pods: Mutex::new(Vec::new()),
            nodes: Mutex::new(Vec::new()),
            volumes: Mutex::new(Vec::new()),
            accounts: Mutex::new(Vec::new()),
            secrets: Mutex::new(Vec::new()),
            deleted_namespaces: Mutex::new(Vec::new()),
            create_failure: Mutex::new(None),
            environment,
            cluster_url: "https://10.96.0.1:443/".to_string(),
        }
    }
}

#[async_trait]
impl ClusterApi for FakeCluster {
    async fn create_namespace(&self, name: &str) -> Result<Namespace, ClusterError> {
        if let Some(err) = self.create_failure.lock().unwrap().take() {
            return Err(err);
        }
        let mut store = self.namespaces.lock().unwrap();
        if store.iter().any(|ns| ns.metadata.name.as_deref() == Some(name)) {
            return Err(ClusterError::AlreadyExists {
                kind: "namespace",
                name: name.to_string(),
            });
        }
        let ns = namespace(name);
        store.push(ns.clone());
        Ok(ns)
    }

    async fn list_namespaces(
        &self,
        field_selector: Option<&str>,
    ) -> Result<Vec<Namespace>, ClusterError> {
        let store = self.namespaces.lock().unwrap();
        let items = match field_selector.and_then(|s| s.strip_prefix("metadata.name=")) {
            Some(wanted) => store
                .iter()
                .filter(|ns| ns.metadata.name.as_deref() == Some(wanted))
                .cloned()
                .collect(),
            None => store.clone(),
        };
        Ok(items)
    }

    async fn delete_namespace(&self, name: &str) -> Result<(), ClusterError> {
        self.deleted_namespaces.lock().unwrap().push(name.to_string());
        self.namespaces
            .lock()
            .unwrap()
            .retain(|ns| ns.metadata.name.as_deref() != Some(name));
        Ok(())
    }

    async fn get_service_account(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ServiceAccount, ClusterError> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|sa| {
                sa.metadata.namespace.as_deref() == Some(namespace)
                    && sa.metadata.name.as_deref() == Some(name)
            })
            .cloned()
            .ok_or(ClusterError::NotFound {
                kind: "serviceaccount",
                name: name.to_string(),
            })
    }

    async fn list_service_accounts(&self) -> Result<Vec<ServiceAccount>, ClusterError> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret, ClusterError> {
        self.secrets
            .lock()
            .unwrap()
            .iter()
            .find(|s| {
                s.metadata.namespace.as_deref() == Some(namespace)
                    && s.metadata.name.as_deref() == Some(name)
            })
            .cloned()
            .ok_or(ClusterError::NotFound {
                kind: "secret",
                name: name.to_string(),
            })
    }

    async fn list_pods(&self) -> Result<Vec<Pod>, ClusterError> {
        Ok(self.pods.lock().unwrap().clone())
    }

    async fn list_pods_in(&self, namespace: &str) -> Result<Vec<Pod>, ClusterError> {
        Ok(self
            .pods
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.metadata.namespace.as_deref() == Some(namespace))
            .cloned()
            .collect())
    }

    async fn list_nodes(&self) -> Result<Vec<Node>, ClusterError> {
        Ok(self.nodes.lock().unwrap().clone())
    }

    async fn list_persistent_volumes(&self) -> Result<Vec<PersistentVolume>, ClusterError> {
        Ok(self.volumes.lock().unwrap().clone())
    }

    fn environment(&self) -> EnvironmentKind {
        self.environment
    }

    fn cluster_url(&self) -> &str {
        &self.cluster_url
    }
}

pub fn namespace(name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn pod_with_image(namespace: &str, name: &str, image: &str) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(PodSpec {
            containers: vec![Container {
                name: name.to_string(),
                image: Some(image.to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn node_with_capacity(name: &str, cpu: &str, memory: &str) -> Node {
    Node {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        status: Some(NodeStatus {
            capacity: Some(
                [
                    ("cpu".to_string(), Quantity(cpu.to_string())),
                    ("memory".to_string(), Quantity(memory.to_string())),
                ]
                .into(),
            ),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn volume(name: &str) -> PersistentVolume {
    PersistentVolume {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn service_account(namespace: &str, name: &str, secret_names: &[&str]) -> ServiceAccount {
    ServiceAccount {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        secrets: Some(
            secret_names
                .iter()
                .map(|s| ObjectReference {
                    name: Some(s.to_string()),
                    ..Default::default()
                })
                .collect(),
        ),
        ..Default::default()
    }
}

pub fn secret_with_token(namespace: &str, name: &str, token: &[u8]) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        data: Some([("token".to_string(), ByteString(token.to_vec()))].into()),
        ..Default::default()
    }
}
