use crate::{
    DecodedPost, Error, Outcome, PostSlot, RandSource, Result, Standing, ThreadRandom, Verdict,
    judge, verdict,
};

#[cfg(test)]
mod tests;

/// Both decoded posts and the outcome of ordering them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonResult {
    first: DecodedPost,
    second: DecodedPost,
    outcome: Outcome,
}

impl ComparisonResult {
    #[must_use]
    pub const fn first(&self) -> &DecodedPost {
        &self.first
    }

    #[must_use]
    pub const fn second(&self) -> &DecodedPost {
        &self.second
    }

    /// The post in the given slot.
    #[must_use]
    pub const fn post(&self, slot: PostSlot) -> &DecodedPost {
        match slot {
            PostSlot::First => &self.first,
            PostSlot::Second => &self.second,
        }
    }

    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// How the post in `slot` fared.
    #[must_use]
    pub fn standing(&self, slot: PostSlot) -> Standing {
        match self.outcome.winner() {
            None => Standing::Neutral,
            Some(winner) if winner == slot => Standing::Winner,
            Some(_) => Standing::Loser,
        }
    }

    /// Title and subtitle for this outcome.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        verdict(&self.outcome, &self.first, &self.second)
    }
}

/// Decodes two post URLs and decides which one was published first.
///
/// Both inputs are trimmed. Both posts are decoded before any failure is
/// reported; if either fails, no partial result is returned and the error
/// names the first failing slot.
///
/// # Errors
///
/// - [`Error::MissingInput`] if either URL is blank. Nothing is decoded.
/// - [`Error::InvalidFormat`] if either URL carries no 19-digit identifier.
///
/// # Example
///
/// ```
/// use ogpost::{Error, ThreadRandom, compare};
///
/// assert_eq!(compare("   ", "https://example.com", &ThreadRandom), Err(Error::MissingInput));
/// ```
pub fn compare<R>(url1: &str, url2: &str, rng: &R) -> Result<ComparisonResult>
where
    R: RandSource<u64> + ?Sized,
{
    let (url1, url2) = (url1.trim(), url2.trim());
    if url1.is_empty() || url2.is_empty() {
        return Err(Error::MissingInput);
    }

    let first = DecodedPost::from_url(url1);
    let second = DecodedPost::from_url(url2);
    let (first, second) = match (first, second) {
        (Ok(first), Ok(second)) => (first, second),
        (Err(source), _) => {
            return Err(Error::InvalidFormat {
                slot: PostSlot::First,
                source,
            });
        }
        (Ok(_), Err(source)) => {
            return Err(Error::InvalidFormat {
                slot: PostSlot::Second,
                source,
            });
        }
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        first_id = %first.id(),
        first_millis = first.timestamp_millis(),
        second_id = %second.id(),
        second_millis = second.timestamp_millis(),
        "decoded both posts"
    );

    let outcome = judge(&first, &second, rng);
    Ok(ComparisonResult {
        first,
        second,
        outcome,
    })
}

/// [`compare`] with the thread-local RNG picking the flavor line.
///
/// # Errors
///
/// See [`compare`].
pub fn compare_with_thread_rng(url1: &str, url2: &str) -> Result<ComparisonResult> {
    compare(url1, url2, &ThreadRandom)
}
