//! User identity model.
//!
//! Identity resolution happens upstream of this service; the caller-supplied
//! identifier is trusted as-is and treated as an opaque token. The only rules
//! enforced here keep obviously broken values (blank or padded strings) out of
//! the stores.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdValidationError {
    /// The identifier is empty or consists only of whitespace.
    Blank,
    /// The identifier carries leading or trailing whitespace.
    Untrimmed,
}

impl fmt::Display for UserIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "user id must not be blank"),
            Self::Untrimmed => write!(f, "user id must not have surrounding whitespace"),
        }
    }
}

impl std::error::Error for UserIdValidationError {}

/// Opaque caller-supplied user identifier.
///
/// # Examples
/// ```
/// use backend::domain::UserId;
///
/// let id = UserId::new("alice").expect("valid id");
/// assert_eq!(id.as_str(), "alice");
/// assert!(UserId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserIdValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, UserIdValidationError> {
        if id.trim().is_empty() {
            return Err(UserIdValidationError::Blank);
        }
        if id.trim() != id {
            return Err(UserIdValidationError::Untrimmed);
        }
        Ok(Self(id))
    }

    /// Access the raw identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}
