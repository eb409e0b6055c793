//! # ogpost
//!
//! Settle which of two posts was published first by decoding the creation
//! timestamp embedded in each post's Snowflake-style identifier.
//!
//! A post URL such as
//! `https://www.linkedin.com/posts/jane-doe_some-title-activity-7063737762654598144-AbCd`
//! carries a 19-digit identifier. The leading 41 bits of that identifier are
//! read as milliseconds since the Unix epoch.
//!
//! ```
//! use ogpost::{Outcome, PostSlot, SeededRandom, compare};
//!
//! let rng = SeededRandom::new(7);
//! let result = compare(
//!     "https://www.linkedin.com/posts/jane-doe_hello-activity-7000000000000000000-abcd",
//!     "https://www.linkedin.com/posts/john-roe_hello-activity-7063737762654598144-efgh",
//!     &rng,
//! )
//! .unwrap();
//!
//! assert!(matches!(result.outcome(), Outcome::Winner { slot: PostSlot::First, .. }));
//! assert_eq!(result.verdict().title, "Jane Doe is the OG.");
//! ```
//!
//! The core performs no I/O. Output is handed to a [`Presenter`], see
//! [`analyze`].

mod compare;
mod error;
mod id;
mod name;
mod post;
mod presenter;
mod rand;
mod verdict;

pub use crate::compare::*;
pub use crate::error::*;
pub use crate::id::*;
pub use crate::name::*;
pub use crate::post::*;
pub use crate::presenter::*;
pub use crate::rand::*;
pub use crate::verdict::*;
