//! Application identifier validation.

use std::fmt;
use std::str::FromStr;

use crate::errors::Error;
use crate::Result;

/// A validated application identifier.
///
/// Host applications register a four character id used to tag the memos of
/// the transactions they originate. The id may contain any combination of
/// lowercase letters, uppercase letters and digits; anything else is
/// rejected at construction, so an `AppId` that exists is always valid.
/// The length check is on UTF-8 *bytes*, not code points — a four character
/// string containing a multi-byte character is rejected.
///
/// # Examples
///
/// ```
/// use ledgerkit_lib::AppId;
///
/// let app_id = AppId::new("A1b2")?;
/// assert_eq!(app_id.memo_prefix(), "1-A1b2-");
///
/// assert!(AppId::new("ab cd").is_err());
/// assert!(AppId::new("abc").is_err());
/// # Ok::<(), ledgerkit_lib::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AppId {
    value: String,
}

impl AppId {
    /// Validates `value` and constructs the id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAppId`] unless `value` is exactly four bytes
    /// of ASCII `[A-Za-z0-9]`.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(Error::InvalidAppId);
        }
        Ok(Self { value })
    }

    /// The validated id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The memo prefix derived from this id: `"1-"` + id + `"-"`.
    pub fn memo_prefix(&self) -> String {
        format!("1-{}-", self.value)
    }
}

impl FromStr for AppId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
