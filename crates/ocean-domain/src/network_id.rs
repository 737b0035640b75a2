use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkIdError {
    #[error(
        "Invalid network id '{0}': expected 'name:chainid' (e.g., 'development:8996')"
    )]
    Format(String),
}

/// Identifier of an EVM network the SDK talks to.
///
/// Format: "name:chainid" (e.g., "development:8996", "polygon:137").
/// The name matches the network key used in the Ocean `address.json` artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct NetworkId(String);

impl NetworkId {
    pub fn new(name: &str, chain_id: u64) -> Self {
        Self(format!("{}:{}", name, chain_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Network name part, e.g. "development" for "development:8996".
    pub fn name(&self) -> &str {
        self.0.split(':').next().unwrap_or_default()
    }

    /// Parse the chain ID from the network ID.
    /// Returns None if the chain ID is missing or not a valid number.
    pub fn chain_id(&self) -> Option<u64> {
        self.0.split(':').nth(1).and_then(|s| s.parse().ok())
    }

    /// Fails unless both the name and the numeric chain id are present.
    pub fn validate(&self) -> Result<(), NetworkIdError> {
        if self.name().is_empty() || self.chain_id().is_none() {
            return Err(NetworkIdError::Format(self.0.clone()));
        }
        Ok(())
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NetworkId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NetworkId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_chain_id() {
        let id = NetworkId::from("development:8996");
        assert_eq!(id.name(), "development");
        assert_eq!(id.chain_id(), Some(8996));
        assert!(id.validate().is_ok());

        assert_eq!(NetworkId::new("polygon", 137).as_str(), "polygon:137");
    }

    #[test]
    fn rejects_missing_chain_id() {
        let id = NetworkId::from("development");
        assert_eq!(id.chain_id(), None);
        assert_eq!(
            id.validate(),
            Err(NetworkIdError::Format("development".to_string()))
        );

        assert!(NetworkId::from(":8996").validate().is_err());
        assert!(NetworkId::from("mainnet:one").validate().is_err());
    }
}
