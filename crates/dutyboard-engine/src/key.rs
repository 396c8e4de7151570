use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Canonical duty identity produced by [`normalize`](crate::normalize).
///
/// Always uppercase ASCII letters and digits. Two raw codes with the same key
/// are the same duty for display purposes.
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DutyKey(String);

impl DutyKey {
    pub(crate) fn new(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True for keys made only of digits (numbered rooms/posts).
    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for DutyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DutyKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DutyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DutyKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DutyKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
