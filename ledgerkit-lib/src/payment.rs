//! Payment records derived from ledger events.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::asset::Asset;
use crate::event::{Payment, TxEvent};
use crate::ASSET_UNIT_DIVISOR;

/// A directional view of one payment inside a transaction event, as seen by
/// an observing account.
///
/// The view considers exactly the first payment in the event whose asset
/// equals the queried one. When no payment matches, the record degrades to
/// defined defaults instead of failing: amount zero, empty destination, and
/// the event's own source account. Derivation is total because it runs on
/// every event of a historical feed; a fallible API there would force error
/// plumbing onto a path that cannot meaningfully recover.
///
/// Only the first matching payment is considered even when an event carries
/// several payments of the same asset — a documented limitation existing
/// callers rely on, preserved as a compatibility constraint.
///
/// All accessors are pure projections of the stored event/account/asset
/// triple, computed on demand; the record itself is immutable and carries no
/// identity beyond the fields it exposes.
///
/// # Examples
///
/// ```
/// use ledgerkit_lib::{Asset, Balance, Payment, PaymentInfo, TxEvent};
/// use chrono::DateTime;
///
/// let event = TxEvent {
///     hash: "ab12".into(),
///     created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
///     source_account: "S".into(),
///     memo_text: None,
///     memo_data: None,
///     payments: vec![Payment {
///         asset: Asset::Native,
///         source: "S".into(),
///         destination: "D".into(),
///         amount: 50_000,
///     }],
/// };
///
/// let info = PaymentInfo::new(event, "D", Asset::Native);
/// assert!(info.credit());
/// let amount: Balance = info.amount();
/// assert_eq!(amount, Balance::from(5));
/// ```
#[derive(Clone, Debug)]
pub struct PaymentInfo {
    event: TxEvent,
    account: String,
    asset: Asset,
}

impl PaymentInfo {
    /// Derives the payment record for `account` and `asset` from `event`.
    ///
    /// Never fails; see the type-level notes for the no-match defaults.
    pub fn new(event: TxEvent, account: impl Into<String>, asset: Asset) -> Self {
        Self {
            event,
            account: account.into(),
            asset,
        }
    }

    /// First payment in the event matching the queried asset, if any.
    fn matched(&self) -> Option<&Payment> {
        self.event.payments.iter().find(|p| p.asset == self.asset)
    }

    /// Ledger close time of the underlying transaction.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.event.created_at
    }

    /// True when the observing account is the destination of the matched
    /// payment.
    pub fn credit(&self) -> bool {
        self.account == self.destination()
    }

    /// Negation of [`Self::credit`].
    ///
    /// An observer matching neither side of the matched payment classifies
    /// as debit; the view is a binary classification, not a three-way state.
    pub fn debit(&self) -> bool {
        !self.credit()
    }

    /// Paying account of the matched payment, or the event's source account
    /// when nothing matched.
    pub fn source(&self) -> &str {
        self.matched()
            .map(|p| p.source.as_str())
            .unwrap_or(&self.event.source_account)
    }

    /// Hash of the underlying transaction.
    pub fn hash(&self) -> &str {
        &self.event.hash
    }

    /// Amount moved, in whole currency units.
    ///
    /// The raw payment amount is denominated in the smallest indivisible
    /// unit; dividing by [`ASSET_UNIT_DIVISOR`] yields the human-facing
    /// decimal quantity, exactly. Zero when no payment matched.
    pub fn amount(&self) -> Decimal {
        self.matched()
            .and_then(|p| Decimal::from(p.amount).checked_div(Decimal::from(ASSET_UNIT_DIVISOR)))
            .unwrap_or(Decimal::ZERO)
    }

    /// Receiving account of the matched payment, or empty when nothing
    /// matched.
    pub fn destination(&self) -> &str {
        self.matched().map(|p| p.destination.as_str()).unwrap_or("")
    }

    /// Text memo of the underlying transaction.
    pub fn memo_text(&self) -> Option<&str> {
        self.event.memo_text.as_deref()
    }

    /// Binary memo of the underlying transaction.
    pub fn memo_data(&self) -> Option<&[u8]> {
        self.event.memo_data.as_deref()
    }
}
