//! Error types for post comparison.
//!
//! Every failure the core can produce is a value of [`Error`]. The `Display`
//! text of each variant is the message meant for the end user; the underlying
//! cause of an [`Error::InvalidFormat`] is only reachable through
//! [`std::error::Error::source`] and is meant for logs.
//!
//! ## Error Cases
//! - `MissingInput`: one or both URLs were empty after trimming.
//! - `InvalidFormat`: a URL did not carry a usable post identifier.

use crate::PostSlot;
use core::num::ParseIntError;

/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Why an identifier could not be pulled out of a URL.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// The URL contains no run of 19 decimal digits.
    #[error("no 19-digit post identifier found in {url:?}")]
    NotFound { url: String },

    /// The matched digits did not fit the identifier type.
    #[error("failed to parse post identifier {digits:?}: {source}")]
    Parse {
        digits: String,
        #[source]
        source: ParseIntError,
    },
}

/// All errors `ogpost` can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Either URL was blank.
    #[error("Please enter both links. We can't compare a void to a link.")]
    MissingInput,

    /// A URL could not be decoded. `slot` names the first post that failed.
    #[error("Invalid LinkedIn URL format. Make sure they are standard post URLs.")]
    InvalidFormat {
        slot: PostSlot,
        #[source]
        source: IdentifierError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_format_hides_cause_from_display() {
        let err = Error::InvalidFormat {
            slot: PostSlot::Second,
            source: IdentifierError::NotFound {
                url: "https://example.com".to_owned(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Invalid LinkedIn URL format. Make sure they are standard post URLs."
        );
        let source = err.source().unwrap();
        assert!(source.to_string().contains("https://example.com"));
    }

    #[test]
    fn missing_input_has_no_source() {
        assert!(Error::MissingInput.source().is_none());
    }
}
