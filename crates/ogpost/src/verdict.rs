//! Ordering of two decoded posts and the verdict text that goes with it.

use crate::{DecodedPost, RandSource};
use core::cmp::Ordering;
use core::fmt;

/// Flavor lines appended to the later post's verdict.
pub const INSULTS: [&str; 5] = [
    "Ctrl+C, Ctrl+V much?",
    "Originality left the chat.",
    "Caught in 4K.",
    "Imitation is flattery, but this is robbery.",
    "The timeline doesn't lie.",
];

/// Verdict title when both posts share a millisecond.
pub const TIE_TITLE: &str = "It's a Tie?";

/// Verdict text when both posts share a millisecond.
pub const TIE_TEXT: &str = "Did they press enter at the exact same millisecond? Sus.";

/// Which of the two compared posts a value refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PostSlot {
    First,
    Second,
}

impl PostSlot {
    /// The other slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// One-based position, as shown to users.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

impl fmt::Display for PostSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post {}", self.index())
    }
}

/// Result of ordering two posts by timestamp.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Outcome {
    /// Both posts carry the same millisecond.
    Tie,
    /// `slot` was published strictly earlier. `insult` is aimed at the other
    /// post.
    Winner { slot: PostSlot, insult: &'static str },
}

impl Outcome {
    /// The earlier post, if there is one.
    #[must_use]
    pub const fn winner(&self) -> Option<PostSlot> {
        match self {
            Self::Tie => None,
            Self::Winner { slot, .. } => Some(*slot),
        }
    }
}

/// How a post fared in a comparison.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Standing {
    Winner,
    Loser,
    /// Tied comparison: neither post is marked.
    Neutral,
}

/// Title and subtitle describing an outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Verdict {
    pub title: String,
    pub text: String,
}

/// Orders two posts by timestamp and picks a flavor line for the later one.
///
/// The strictly earlier post wins. Equal timestamps are a [`Outcome::Tie`]
/// whatever the other fields hold, and no random value is drawn.
pub fn judge<R>(first: &DecodedPost, second: &DecodedPost, rng: &R) -> Outcome
where
    R: RandSource<u64> + ?Sized,
{
    let slot = match first.timestamp_millis().cmp(&second.timestamp_millis()) {
        Ordering::Less => PostSlot::First,
        Ordering::Greater => PostSlot::Second,
        Ordering::Equal => return Outcome::Tie,
    };
    Outcome::Winner {
        slot,
        insult: pick_insult(rng),
    }
}

/// Draws one of [`INSULTS`].
pub fn pick_insult<R>(rng: &R) -> &'static str
where
    R: RandSource<u64> + ?Sized,
{
    INSULTS[(rng.rand() % INSULTS.len() as u64) as usize]
}

/// Builds the verdict for an outcome between the two named posts.
#[must_use]
pub fn verdict(outcome: &Outcome, first: &DecodedPost, second: &DecodedPost) -> Verdict {
    match outcome {
        Outcome::Tie => Verdict {
            title: TIE_TITLE.to_owned(),
            text: TIE_TEXT.to_owned(),
        },
        Outcome::Winner { slot, insult } => {
            let (winner, loser) = match slot {
                PostSlot::First => (first, second),
                PostSlot::Second => (second, first),
            };
            Verdict {
                title: format!("{} is the OG.", winner.display_name()),
                text: format!(
                    "{} was late to the party. {insult}",
                    loser.display_name()
                ),
            }
        }
    }
}
