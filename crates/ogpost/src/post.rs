use crate::{IdentifierError, PostId, display_name};
use chrono::{DateTime, Local, TimeZone, Utc};
use core::fmt;

/// `toUTCString`-style layout, e.g. `Mon, 15 May 2023 04:52:00 GMT`.
const UTC_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Short localized layout, e.g. `May 15, 2023, 04:52:00 AM`.
const LOCAL_FORMAT: &str = "%b %-d, %Y, %I:%M:%S %p";

/// A post decoded from its URL.
///
/// The timestamp is always derived from the identifier; there is no way to
/// construct a `DecodedPost` with an unrelated timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedPost {
    id: PostId,
    display_name: String,
    timestamp_millis: u64,
    calendar_time: DateTime<Utc>,
}

impl DecodedPost {
    /// Decodes a post URL: identifier, timestamp and author name.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentifierError`] if the URL holds no 19-digit identifier.
    /// A missing author slug is not an error.
    pub fn from_url(url: &str) -> Result<Self, IdentifierError> {
        let id = PostId::from_url(url)?;
        Ok(Self::new(id, display_name(url)))
    }

    /// Builds a post from an identifier and an already derived display name.
    #[must_use]
    pub fn new(id: PostId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            timestamp_millis: id.timestamp_millis(),
            calendar_time: id.calendar_time(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> PostId {
        self.id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp_millis(&self) -> u64 {
        self.timestamp_millis
    }

    #[must_use]
    pub const fn calendar_time(&self) -> DateTime<Utc> {
        self.calendar_time
    }

    /// Renders the timestamp in UTC, e.g. `Mon, 15 May 2023 04:52:00 GMT`.
    #[must_use]
    pub fn utc_string(&self) -> String {
        self.calendar_time.format(UTC_FORMAT).to_string()
    }

    /// Renders the timestamp in the host's local timezone.
    #[must_use]
    pub fn local_string(&self) -> String {
        self.local_string_in(&Local)
    }

    /// Renders the timestamp in the given timezone using the local layout.
    #[must_use]
    pub fn local_string_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.calendar_time
            .with_timezone(tz)
            .format(LOCAL_FORMAT)
            .to_string()
    }
}
