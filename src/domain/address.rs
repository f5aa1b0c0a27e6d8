use std::borrow::Cow;
use std::fmt::Display;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Street address of a branch, e.g. "Piazza Maggiore, 5/B".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address(Cow<'static, str>);

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("Address cannot be empty.")]
    EmptyAddress,

    #[error("Address is too long (max 200 characters, got {0}).")]
    TooLong(usize),

    #[error("Address is too short (min 5 characters, got {0}).")]
    TooShort(usize),
}

impl Address {
    const MIN_LENGTH: usize = 5;
    const MAX_LENGTH: usize = 200;

    /// Parse an address string into a validated Address
    ///
    /// Rules:
    /// - Cannot be empty or only whitespaces
    /// - Must be between 5 and 200 characters
    /// - Automatically trims whitespace
    ///
    /// The built-in branch table skips this at compile time; its tests run
    /// every entry through `parse` to hold it to the same rules.
    pub fn parse(s: String) -> Result<Address, AddressError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(AddressError::EmptyAddress);
        }

        let char_count = trimmed.graphemes(true).count();

        if char_count < Self::MIN_LENGTH {
            return Err(AddressError::TooShort(char_count));
        }

        if char_count > Self::MAX_LENGTH {
            return Err(AddressError::TooLong(char_count));
        }

        Ok(Self(Cow::Owned(trimmed.to_string())))
    }

    /// Wrap a compile-time address without validation.
    /// Only for the static branch table, whose entries are checked by tests.
    pub(crate) const fn from_static(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
