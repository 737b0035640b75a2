use std::num::NonZeroUsize;

use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder, WsConnect},
    rpc::client::RpcClient,
    transports::{
        BoxTransport, IntoBoxTransport,
        http::{Http, reqwest::Url},
        layers::FallbackLayer,
    },
};
use tower::ServiceBuilder;

use crate::error::BlockchainError;

/// Builds an RPC client over all usable endpoints with failover between them.
/// Supports both HTTP and WebSocket endpoints.
pub async fn connect_rpc_client(rpc_endpoints: &[String]) -> Result<RpcClient, BlockchainError> {
    let mut transports: Vec<BoxTransport> = Vec::new();
    let mut valid_endpoints = Vec::new();

    for endpoint in rpc_endpoints {
        if endpoint.starts_with("ws://") || endpoint.starts_with("wss://") {
            match RpcClient::connect_pubsub(WsConnect::new(endpoint)).await {
                Ok(client) => {
                    transports.push(client.transport().clone().into_box_transport());
                    valid_endpoints.push(endpoint.clone());
                    tracing::debug!("WebSocket RPC endpoint added: {}", endpoint);
                }
                Err(e) => {
                    tracing::warn!("Failed to connect to WebSocket RPC '{}': {}", endpoint, e);
                }
            }
        } else {
            match endpoint.parse::<Url>() {
                Ok(url) => {
                    transports.push(Http::new(url).into_box_transport());
                    valid_endpoints.push(endpoint.clone());
                    tracing::debug!("HTTP RPC endpoint added: {}", endpoint);
                }
                Err(e) => {
                    tracing::warn!("Invalid RPC URL '{}': {}", endpoint, e);
                }
            }
        }
    }

    if transports.is_empty() {
        return Err(BlockchainError::RpcConnectionFailed {
            attempts: rpc_endpoints.len(),
        });
    }

    // One transport at a time: pure failover, no parallel requests.
    let fallback_layer = FallbackLayer::default().with_active_transport_count(NonZeroUsize::MIN);
    let transport = ServiceBuilder::new()
        .layer(fallback_layer)
        .service(transports);

    tracing::debug!(endpoints = ?valid_endpoints, "RPC client built");

    Ok(RpcClient::builder().transport(transport, false))
}

/// Read-only provider over a shared RPC client.
pub fn read_only_provider(client: RpcClient) -> DynProvider {
    ProviderBuilder::new().connect_client(client).erased()
}

/// Checks the node answers and serves the expected chain.
pub async fn verify_chain_id(
    provider: &DynProvider,
    expected: u64,
    endpoints: usize,
) -> Result<(), BlockchainError> {
    let actual = provider.get_chain_id().await.map_err(|e| {
        tracing::error!("All RPC endpoints failed connectivity check: {}", e);
        BlockchainError::RpcConnectionFailed {
            attempts: endpoints,
        }
    })?;

    if actual != expected {
        return Err(BlockchainError::ChainIdMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_when_no_endpoint_is_usable() {
        let endpoints = vec!["not a url".to_string()];
        let err = connect_rpc_client(&endpoints).await.unwrap_err();
        assert!(matches!(
            err,
            BlockchainError::RpcConnectionFailed { attempts: 1 }
        ));
    }

    #[tokio::test]
    async fn builds_client_without_contacting_http_endpoints() {
        let endpoints = vec![
            "http://127.0.0.1:8545".to_string(),
            "http://127.0.0.1:9545".to_string(),
        ];
        assert!(connect_rpc_client(&endpoints).await.is_ok());
    }
}
