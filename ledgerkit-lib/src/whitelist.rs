//! Packaging of signed transactions for a co-signing whitelist service.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::envelope::TransactionEnvelope;
use crate::errors::Error;
use crate::network::NetworkId;
use crate::xdr::{from_xdr, to_xdr};
use crate::Result;

/// Wire shape accepted by the whitelisting service: exactly two keys, each
/// carrying canonical binary. Renaming a key breaks the service contract.
#[derive(Serialize, Deserialize)]
struct WhitelistPayload {
    #[serde(with = "serde_bytes")]
    envelope: Vec<u8>,
    #[serde(with = "serde_bytes")]
    network_id: Vec<u8>,
}

/// A signed transaction paired with its network identifier, packaged for
/// submission to the whitelisting service.
///
/// Built immediately before submission and not persisted. Construction does
/// not validate; the codec enforces the two fields' grammar when a payload
/// is decoded.
///
/// # Examples
///
/// ```
/// use ledgerkit_lib::{NetworkId, TransactionEnvelope, WhitelistEnvelope};
///
/// let envelope = WhitelistEnvelope::new(
///     TransactionEnvelope::new(vec![1, 2, 3], vec![]),
///     NetworkId::from_passphrase("Test SDF Network ; September 2015"),
/// );
///
/// let bytes = envelope.encode()?;
/// assert_eq!(WhitelistEnvelope::decode(&bytes)?, envelope);
/// # Ok::<(), ledgerkit_lib::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhitelistEnvelope {
    transaction_envelope: TransactionEnvelope,
    network_id: NetworkId,
}

impl WhitelistEnvelope {
    pub fn new(transaction_envelope: TransactionEnvelope, network_id: NetworkId) -> Self {
        Self {
            transaction_envelope,
            network_id,
        }
    }

    pub fn transaction_envelope(&self) -> &TransactionEnvelope {
        &self.transaction_envelope
    }

    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    /// Encodes the envelope into the JSON payload the whitelisting service
    /// accepts.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decodes a payload produced by [`Self::encode`] or by a compatible
    /// producer.
    ///
    /// Fails with [`Error::Decode`] when a key is missing, a byte field does
    /// not parse under the canonical codec, or the input is not the expected
    /// JSON shape.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(len = bytes.len()))
    )]
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::Decode(e.to_string()))
    }
}

impl Serialize for WhitelistEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let payload = WhitelistPayload {
            envelope: to_xdr(&self.transaction_envelope),
            network_id: self.network_id.as_bytes().to_vec(),
        };
        payload.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WhitelistEnvelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let payload = WhitelistPayload::deserialize(deserializer)?;
        let transaction_envelope =
            from_xdr::<TransactionEnvelope>(&payload.envelope).map_err(D::Error::custom)?;
        let network_id = from_xdr::<NetworkId>(&payload.network_id).map_err(D::Error::custom)?;
        Ok(Self {
            transaction_envelope,
            network_id,
        })
    }
}
