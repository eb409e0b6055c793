use crate::IdentifierError;
use chrono::{DateTime, Utc};
use core::fmt;
use core::str::FromStr;
use regex::Regex;
use std::sync::LazyLock;

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{19}").expect("identifier pattern is valid"));

/// A Snowflake-style post identifier.
///
/// Post URLs carry 19 decimal digits. The largest 19-digit value is below
/// `u64::MAX`, so the identifier is held exactly in a `u64` and never passes
/// through floating point.
///
/// ## Timestamp layout
///
/// The timestamp is the **leading** 41 bits of the identifier's binary
/// representation, counted from its most significant set bit:
///
/// ```text
///  Bit Index:  MSB (first set bit)                       LSB
///              +----------------------+-------------------+
///  Field:      |  timestamp (41 bits) |  remaining bits   |
///              +----------------------+-------------------+
///              |<-------- bit_len(id), at most 64 ------->|
/// ```
///
/// Because the window is anchored at the most significant set bit rather than
/// at a fixed bit position, identifiers of different bit lengths shift by
/// different amounts.
///
/// ```
/// use ogpost::PostId;
///
/// let id = PostId::from_raw(7_063_737_762_654_598_144);
/// assert_eq!(id.bit_len(), 63);
/// assert_eq!(id.timestamp_millis(), 1_684_126_320_518);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(u64);

impl PostId {
    /// Number of leading bits that encode the timestamp.
    pub const TIMESTAMP_BITS: u32 = 41;

    /// Number of decimal digits of an identifier embedded in a post URL.
    pub const DIGITS: usize = 19;

    /// Wraps a raw identifier.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn to_raw(&self) -> u64 {
        self.0
    }

    /// Extracts the identifier from a post URL.
    ///
    /// The leftmost run of 19 decimal digits is used. A longer digit run
    /// yields its first 19 digits, and any later runs are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::NotFound`] if the URL contains no run of 19
    /// digits.
    ///
    /// # Example
    ///
    /// ```
    /// use ogpost::PostId;
    ///
    /// let id = PostId::from_url(
    ///     "https://www.linkedin.com/feed/update/urn:li:activity:7063737762654598144/",
    /// )
    /// .unwrap();
    /// assert_eq!(id.to_raw(), 7_063_737_762_654_598_144);
    /// ```
    pub fn from_url(url: &str) -> Result<Self, IdentifierError> {
        let digits = ID_PATTERN
            .find(url)
            .ok_or_else(|| IdentifierError::NotFound {
                url: url.to_owned(),
            })?
            .as_str();
        digits.parse().map_err(|source| IdentifierError::Parse {
            digits: digits.to_owned(),
            source,
        })
    }

    /// Length of the identifier's binary representation, without leading
    /// zeros. Zero is written as a single `0` and has length 1.
    #[must_use]
    pub const fn bit_len(&self) -> u32 {
        if self.0 == 0 {
            1
        } else {
            u64::BITS - self.0.leading_zeros()
        }
    }

    /// Milliseconds since the Unix epoch, read from the leading 41 bits.
    ///
    /// Identifiers shorter than 41 bits are treated as left-padded with zeros,
    /// so every bit is part of the timestamp and the result equals the raw
    /// value.
    #[must_use]
    pub const fn timestamp_millis(&self) -> u64 {
        let len = self.bit_len();
        if len > Self::TIMESTAMP_BITS {
            self.0 >> (len - Self::TIMESTAMP_BITS)
        } else {
            self.0
        }
    }

    /// The decoded timestamp as a UTC instant.
    #[must_use]
    pub fn calendar_time(&self) -> DateTime<Utc> {
        // 41 bits of milliseconds tops out in 2039, well inside chrono's range.
        i64::try_from(self.timestamp_millis())
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or_default()
    }
}

impl From<u64> for PostId {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<PostId> for u64 {
    fn from(id: PostId) -> Self {
        id.to_raw()
    }
}

impl FromStr for PostId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifiers are serialized as decimal strings so 64-bit values survive
/// consumers that read JSON numbers as doubles.
#[cfg(feature = "serde")]
impl serde::Serialize for PostId {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PostId {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
