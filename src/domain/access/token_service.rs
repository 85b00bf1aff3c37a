use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::core::client::ClusterApi;
use crate::errors::ClusterError;

/// Identifies a cluster-native service account. The account itself is owned
/// by the cluster, not by the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAccountRef {
    pub name: String,
    pub namespace: String,
}

/// Bearer credential for a service account.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

// Keep the credential out of log output.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// Resolves the current secret-backed bearer token of a service account.
///
/// The control plane links secrets to a fresh account asynchronously, so a
/// just-created account legitimately has none yet; that state is reported as
/// `SecretNotReady` and retrying is the caller's job. Nothing is cached,
/// tokens rotate.
#[derive(Clone)]
pub struct TokenService {
    cluster: Arc<dyn ClusterApi>,
}

impl TokenService {
    pub fn new(cluster: Arc<dyn ClusterApi>) -> Self {
        Self { cluster }
    }

    pub async fn resolve_token(&self, account: &ServiceAccountRef) -> Result<Token, ClusterError> {
        let sa = self
            .cluster
            .get_service_account(&account.namespace, &account.name)
            .await
            .map_err(|err| match err {
                ClusterError::NotFound { .. } => ClusterError::AccountNotFound {
                    namespace: account.namespace.clone(),
                    name: account.name.clone(),
                },
                other => other,
            })?;

        let secret_name = sa
            .secrets
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|secret_ref| secret_ref.name)
            .ok_or_else(|| ClusterError::SecretNotReady {
                namespace: account.namespace.clone(),
                name: account.name.clone(),
            })?;

        let secret = self
            .cluster
            .get_secret(&account.namespace, &secret_name)
            .await?;

        // The API server ships the token field base64-encoded; the client
        // layer hands it to us as raw bytes which must form a UTF-8 string.
        let bytes = secret
            .data
            .unwrap_or_default()
            .remove("token")
            .map(|b| b.0)
            .ok_or_else(|| ClusterError::TokenDecode {
                secret: secret_name.clone(),
                reason: "missing 'token' field".to_string(),
            })?;
        if bytes.is_empty() {
            return Err(ClusterError::TokenDecode {
                secret: secret_name,
                reason: "empty 'token' field".to_string(),
            });
        }
        let token = String::from_utf8(bytes).map_err(|e| ClusterError::TokenDecode {
            secret: secret_name.clone(),
            reason: e.to_string(),
        })?;

        debug!(
            "Resolved token for service account '{}/{}'",
            account.namespace, account.name
        );
        Ok(Token(token))
    }
}
