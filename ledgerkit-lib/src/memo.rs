//! Memo tagging with an application identifier.
//!
//! Outgoing transaction memos carry a `1-XXXX-` prefix naming the
//! application that originated the transaction. Tagging is idempotent with
//! respect to *any* well-formed prefix, not only the caller's own: a memo
//! that already starts with `1-`, four alphanumerics and `-` is returned
//! unchanged even if the four characters belong to a different app.

use crate::app_id::AppId;

/// Byte length of a well-formed prefix: `1-`, four id bytes, `-`.
const PREFIX_LEN: usize = 7;

/// Prepends `app_id`'s memo prefix to `memo` unless the memo is already
/// tagged.
///
/// The existing-tag test is anchored at the start of the memo and matches
/// `1-` + exactly four ASCII alphanumerics + `-`; the payload after the
/// prefix may be anything, including empty. This operation never fails and
/// enforces no length cap — memo size limits belong to the transport and
/// codec layers.
///
/// # Examples
///
/// ```
/// use ledgerkit_lib::{memo::prepend_app_id_if_needed, AppId};
///
/// let app_id = AppId::new("test")?;
/// assert_eq!(prepend_app_id_if_needed(&app_id, "order 42"), "1-test-order 42");
///
/// // Already tagged — even by a different app — stays unchanged.
/// assert_eq!(prepend_app_id_if_needed(&app_id, "1-wxyz-order 42"), "1-wxyz-order 42");
/// # Ok::<(), ledgerkit_lib::Error>(())
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, fields(app_id = %app_id, memo_len = memo.len()))
)]
pub fn prepend_app_id_if_needed(app_id: &AppId, memo: &str) -> String {
    if has_app_id_prefix(memo) {
        memo.to_string()
    } else {
        format!("{}{}", app_id.memo_prefix(), memo)
    }
}

/// Anchored scan for a well-formed `1-XXXX-` prefix.
///
/// Byte-indexing is safe here regardless of where UTF-8 boundaries fall:
/// continuation bytes are not ASCII alphanumeric, so a multi-byte character
/// inside the would-be id simply fails the match.
fn has_app_id_prefix(memo: &str) -> bool {
    let bytes = memo.as_bytes();
    bytes.len() >= PREFIX_LEN
        && bytes[0] == b'1'
        && bytes[1] == b'-'
        && bytes[2..6].iter().all(u8::is_ascii_alphanumeric)
        && bytes[6] == b'-'
}
