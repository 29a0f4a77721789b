//! Asset identification.

use serde::{Deserialize, Serialize};

/// Identifies a currency on the ledger network.
///
/// Payment records are filtered by asset: a payment inside a transaction
/// event matches only when its asset compares equal to the queried one,
/// field for field. There is no partial or case-folded matching.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Asset {
    /// The network's native currency.
    Native,
    /// A credit asset, scoped to the account that issues it.
    ///
    /// Two credit assets with the same code but different issuers are
    /// different assets.
    Credit {
        /// Short asset code, e.g. `"USD"`.
        code: String,
        /// Account id of the issuer.
        issuer: String,
    },
}

impl Asset {
    /// Creates a credit asset for the given code and issuer.
    pub fn credit(code: impl Into<String>, issuer: impl Into<String>) -> Self {
        Asset::Credit {
            code: code.into(),
            issuer: issuer.into(),
        }
    }
}
