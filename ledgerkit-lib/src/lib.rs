//! Ledgerkit client-side data model.
//!
//! This crate stays pure and synchronous: it models what a payment client
//! computes locally and leaves fetching, transaction building, signing, and
//! key management to the surrounding layers.
//!
//! # Features
//!
//! - **Payment records**: Derive directional, human-denominated payment
//!   views from raw ledger transaction events
//! - **Memo tagging**: Validate 4-character application identifiers and
//!   prefix outgoing memos idempotently
//! - **Whitelist packaging**: Wrap signed transaction envelopes with a
//!   network identifier for submission to a co-signing service
//!
//! # Example
//!
//! ```
//! use ledgerkit_lib::{
//!     prepend_app_id_if_needed, AppId, NetworkId, TransactionEnvelope, WhitelistEnvelope,
//! };
//!
//! # fn main() -> ledgerkit_lib::Result<()> {
//! // Tag an outgoing memo with the application identifier.
//! let app_id = AppId::new("a1b2")?;
//! assert_eq!(prepend_app_id_if_needed(&app_id, "order 42"), "1-a1b2-order 42");
//!
//! // Package a signed transaction for the whitelisting service.
//! let envelope = WhitelistEnvelope::new(
//!     TransactionEnvelope::new(vec![1, 2, 3], vec![]),
//!     NetworkId::from_passphrase("Test SDF Network ; September 2015"),
//! );
//! let payload = envelope.encode()?;
//! assert_eq!(WhitelistEnvelope::decode(&payload)?, envelope);
//! # Ok(())
//! # }
//! ```

pub mod app_id;
pub mod asset;
pub mod envelope;
pub mod errors;
pub mod event;
pub mod memo;
pub mod network;
pub mod payment;
pub mod whitelist;
pub mod xdr;

pub use app_id::AppId;
pub use asset::Asset;
pub use envelope::{DecoratedSignature, TransactionEnvelope, MAX_SIGNATURES, MAX_SIGNATURE_LEN};
pub use errors::Error;
pub use event::{Payment, TxEvent};
pub use memo::prepend_app_id_if_needed;
pub use network::{NetworkConfig, NetworkId, ServiceProvider};
pub use payment::PaymentInfo;
pub use whitelist::WhitelistEnvelope;
pub use xdr::{from_xdr, to_xdr, XdrDecode, XdrEncode};

/// Common result alias for ledgerkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Account balance in whole currency units, exact.
pub type Balance = rust_decimal::Decimal;

/// Hash string identifying a transaction on the ledger.
pub type TransactionId = String;

/// Number of smallest indivisible units in one whole currency unit.
///
/// Raw ledger amounts divide by this to yield a [`Balance`]; human
/// quantities multiply by it to yield raw units.
///
/// # Example
///
/// ```
/// use ledgerkit_lib::ASSET_UNIT_DIVISOR;
///
/// let raw: u64 = 50_000;
/// assert_eq!(raw / ASSET_UNIT_DIVISOR, 5);
/// ```
pub const ASSET_UNIT_DIVISOR: u64 = 10_000;

/// Lifecycle state of an account, as reported by the account layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    /// The address does not exist on the ledger yet.
    NotCreated,
    /// The account exists but cannot hold the asset yet.
    NotActivated,
    /// The account can send and receive payments.
    Activated,
}
