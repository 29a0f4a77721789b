//! Network identity and service-provider configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::xdr::{XdrDecode, XdrEncode, XdrReader, XdrWriter};
use crate::Result;

/// 32-byte network discriminator: the SHA-256 digest of the network
/// passphrase.
///
/// Baked into signatures by the transaction signer, the identifier pins a
/// transaction to one deployment so it cannot be replayed against another
/// network. Canonical binary form is the raw 32 bytes, fixed length.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkId([u8; 32]);

impl NetworkId {
    /// Derives the identifier from a network passphrase.
    ///
    /// ```
    /// use ledgerkit_lib::NetworkId;
    ///
    /// let id = NetworkId::from_passphrase("Test SDF Network ; September 2015");
    /// assert_eq!(
    ///     id.to_string(),
    ///     "cee0302d59844d32bdca915c8203dd44b33fbb7edc19051ea37abedf28ecd472",
    /// );
    /// ```
    pub fn from_passphrase(passphrase: &str) -> Self {
        let digest = Sha256::digest(passphrase.as_bytes());
        let mut id = [0u8; 32];
        id.copy_from_slice(&digest);
        Self(id)
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NetworkId({self})")
    }
}

impl XdrEncode for NetworkId {
    fn xdr_encode(&self, w: &mut XdrWriter) {
        w.put_fixed(&self.0);
    }
}

impl XdrDecode for NetworkId {
    fn xdr_decode(r: &mut XdrReader<'_>) -> Result<Self> {
        Ok(Self(r.read_fixed::<32>()?))
    }
}

/// Deployment configuration consumed by the transport and envelope layers.
///
/// Implementations tell the rest of the stack where the ledger endpoint
/// lives and which network the traffic belongs to.
pub trait ServiceProvider {
    fn endpoint_url(&self) -> &str;
    fn network_id(&self) -> NetworkId;
}

/// Plain provider backed by configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub endpoint_url: String,
    pub network_passphrase: String,
}

impl NetworkConfig {
    pub fn new(endpoint_url: impl Into<String>, network_passphrase: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            network_passphrase: network_passphrase.into(),
        }
    }
}

impl ServiceProvider for NetworkConfig {
    fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    fn network_id(&self) -> NetworkId {
        NetworkId::from_passphrase(&self.network_passphrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xdr::{from_xdr, to_xdr};

    const TEST_PASSPHRASE: &str = "Test SDF Network ; September 2015";
    const TEST_DIGEST: &str = "cee0302d59844d32bdca915c8203dd44b33fbb7edc19051ea37abedf28ecd472";

    #[test]
    fn id_is_sha256_of_passphrase() {
        let id = NetworkId::from_passphrase(TEST_PASSPHRASE);
        assert_eq!(id.to_string(), TEST_DIGEST);
        assert_eq!(id.as_bytes(), &hex::decode(TEST_DIGEST).unwrap()[..]);
    }

    #[test]
    fn distinct_passphrases_give_distinct_ids() {
        let a = NetworkId::from_passphrase("network a");
        let b = NetworkId::from_passphrase("network b");
        assert_ne!(a, b);
        assert_eq!(a, NetworkId::from_passphrase("network a"));
    }

    #[test]
    fn canonical_form_is_the_raw_digest() {
        let id = NetworkId::from_passphrase(TEST_PASSPHRASE);
        let bytes = to_xdr(&id);
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes, id.as_bytes());
        assert_eq!(from_xdr::<NetworkId>(&bytes).unwrap(), id);
    }

    #[test]
    fn short_input_does_not_decode() {
        assert!(from_xdr::<NetworkId>(&[0u8; 31]).is_err());
    }

    #[test]
    fn config_acts_as_provider() {
        let config = NetworkConfig::new("https://horizon.example.org", TEST_PASSPHRASE);
        let provider: &dyn ServiceProvider = &config;
        assert_eq!(provider.endpoint_url(), "https://horizon.example.org");
        assert_eq!(
            provider.network_id(),
            NetworkId::from_passphrase(TEST_PASSPHRASE)
        );
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = NetworkConfig::new("https://horizon.example.org", TEST_PASSPHRASE);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            serde_json::from_str::<NetworkConfig>(&json).unwrap(),
            config
        );
    }
}
