//! Raw ledger transaction events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::asset::Asset;

/// A confirmed transaction record from the network's historical or streaming
/// feed.
///
/// The transport layer parses feed records into this shape and hands them
/// over read-only; this crate never fetches or parses wire data itself.
/// One event carries zero or more payments in ledger order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEvent {
    /// Transaction hash as reported by the feed.
    pub hash: String,
    /// Ledger close time of the transaction.
    pub created_at: DateTime<Utc>,
    /// Account that submitted the transaction.
    pub source_account: String,
    /// Text memo attached to the transaction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo_text: Option<String>,
    /// Binary memo attached to the transaction, if any.
    #[serde(default, with = "serde_bytes", skip_serializing_if = "Option::is_none")]
    pub memo_data: Option<Vec<u8>>,
    /// Payments carried by the transaction, in ledger order.
    pub payments: Vec<Payment>,
}

/// A single payment inside a transaction event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Asset the payment moves.
    pub asset: Asset,
    /// Paying account.
    pub source: String,
    /// Receiving account.
    pub destination: String,
    /// Amount in the smallest indivisible unit.
    pub amount: i64,
}
