use crate::{
    ComparisonResult, Error, INSULTS, IdentifierError, Outcome, PostSlot, RandSource, Result,
    SeededRandom, Standing, TIE_TEXT, TIE_TITLE, ThreadRandom, UNKNOWN_USER, compare,
    compare_with_thread_rng,
};

struct FixedRand {
    value: u64,
}

impl RandSource<u64> for FixedRand {
    fn rand(&self) -> u64 {
        self.value
    }
}

const JANE: &str =
    "https://www.linkedin.com/posts/jane-doe_we-shipped-activity-7000000000000000000-AbCd";
const JOHN: &str =
    "https://www.linkedin.com/posts/john-roe_we-shipped-too-activity-7063737762654598144-EfGh";
const JOHN_AGAIN: &str =
    "https://www.linkedin.com/posts/someone-else_repost-activity-7063737762654598145-IjKl";
const FEED: &str = "https://www.linkedin.com/feed/update/urn:li:activity:7063737762654598144/";

trait ResultExt {
    fn unwrap_winner(&self) -> (PostSlot, &'static str);
}

impl ResultExt for ComparisonResult {
    fn unwrap_winner(&self) -> (PostSlot, &'static str) {
        match *self.outcome() {
            Outcome::Winner { slot, insult } => (slot, insult),
            Outcome::Tie => panic!("unexpected tie"),
        }
    }
}

fn run(url1: &str, url2: &str) -> Result<ComparisonResult> {
    compare(url1, url2, &FixedRand { value: 1 })
}

#[test]
fn earlier_post_wins() {
    let result = run(JANE, JOHN).unwrap();
    assert_eq!(result.unwrap_winner(), (PostSlot::First, INSULTS[1]));
    assert_eq!(result.first().display_name(), "Jane Doe");
    assert_eq!(result.second().display_name(), "John Roe");
    assert_eq!(result.first().timestamp_millis(), 1_668_930_053_710);
    assert_eq!(result.second().timestamp_millis(), 1_684_126_320_518);
}

#[test]
fn swapping_inputs_swaps_winner() {
    let forward = run(JANE, JOHN).unwrap();
    let backward = run(JOHN, JANE).unwrap();
    assert_eq!(forward.unwrap_winner().0, PostSlot::First);
    assert_eq!(backward.unwrap_winner().0, PostSlot::Second);
    assert_eq!(forward.first(), backward.second());
    assert_eq!(forward.second(), backward.first());
}

#[test]
fn same_millisecond_is_a_tie() {
    let result = run(JOHN, JOHN_AGAIN).unwrap();
    assert_eq!(*result.outcome(), Outcome::Tie);
    assert_ne!(result.first().id(), result.second().id());
    assert_eq!(result.standing(PostSlot::First), Standing::Neutral);
    assert_eq!(result.standing(PostSlot::Second), Standing::Neutral);

    let verdict = result.verdict();
    assert_eq!(verdict.title, TIE_TITLE);
    assert_eq!(verdict.text, TIE_TEXT);
}

#[test]
fn comparing_a_post_with_itself_ties() {
    let result = run(JANE, JANE).unwrap();
    assert_eq!(*result.outcome(), Outcome::Tie);
}

#[test]
fn standings_follow_winner() {
    let result = run(JOHN, JANE).unwrap();
    assert_eq!(result.standing(PostSlot::First), Standing::Loser);
    assert_eq!(result.standing(PostSlot::Second), Standing::Winner);
    assert_eq!(result.post(PostSlot::Second).display_name(), "Jane Doe");
}

#[test]
fn winner_verdict() {
    let result = compare(JOHN, JANE, &FixedRand { value: 4 }).unwrap();
    let verdict = result.verdict();
    assert_eq!(verdict.title, "Jane Doe is the OG.");
    assert_eq!(
        verdict.text,
        "John Roe was late to the party. The timeline doesn't lie."
    );
}

#[test]
fn unknown_author_still_compares() {
    let result = run(FEED, JANE).unwrap();
    assert_eq!(result.first().display_name(), UNKNOWN_USER);
    assert_eq!(result.unwrap_winner().0, PostSlot::Second);
    assert_eq!(result.verdict().text.split('.').next(), Some("Unknown User was late to the party"));
}

#[test]
fn inputs_are_trimmed() {
    let padded = format!("  \t{JANE}\n");
    let result = run(&padded, JOHN).unwrap();
    assert_eq!(result.first().display_name(), "Jane Doe");
}

#[test]
fn blank_input_is_missing() {
    assert_eq!(run("", JOHN), Err(Error::MissingInput));
    assert_eq!(run(JANE, "   "), Err(Error::MissingInput));
    assert_eq!(run("", ""), Err(Error::MissingInput));
}

#[test]
fn blank_input_wins_over_bad_format() {
    assert_eq!(run("not a url", " "), Err(Error::MissingInput));
}

#[test]
fn missing_identifier_is_invalid_format() {
    let bad = "https://www.linkedin.com/posts/jane-doe_no-id-here";
    let err = run(bad, JOHN).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidFormat {
            slot: PostSlot::First,
            source: IdentifierError::NotFound {
                url: bad.to_owned()
            },
        }
    );

    let err = run(JANE, bad).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidFormat {
            slot: PostSlot::Second,
            ..
        }
    ));
}

#[test]
fn first_failure_is_reported_when_both_fail() {
    let err = run("https://example.com/a", "https://example.com/b").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidFormat {
            slot: PostSlot::First,
            source: IdentifierError::NotFound { ref url },
        } if url == "https://example.com/a"
    ));
}

#[test]
fn seeded_rng_is_reproducible() {
    let a = compare(JANE, JOHN, &SeededRandom::new(99)).unwrap();
    let b = compare(JANE, JOHN, &SeededRandom::new(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn insult_always_comes_from_the_fixed_set() {
    let rng = ThreadRandom;
    for _ in 0..32 {
        let (_, insult) = compare(JANE, JOHN, &rng).unwrap().unwrap_winner();
        assert!(INSULTS.contains(&insult));
    }
}

#[test]
fn thread_rng_convenience() {
    let result = compare_with_thread_rng(JANE, JOHN).unwrap();
    assert_eq!(result.unwrap_winner().0, PostSlot::First);
}

#[test]
fn dyn_rand_source_is_accepted() {
    let rng: &dyn RandSource<u64> = &FixedRand { value: 2 };
    let result = compare(JANE, JOHN, rng).unwrap();
    assert_eq!(result.unwrap_winner().1, INSULTS[2]);
}

#[test]
fn compares_from_many_threads() {
    let rng = SeededRandom::new(5);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let result = compare(JOHN, JANE, &rng).unwrap();
                assert_eq!(result.unwrap_winner().0, PostSlot::Second);
            });
        }
    });
}

#[cfg(feature = "serde")]
#[test]
fn serializes_result() {
    let result = run(JANE, JOHN).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["first"]["display_name"], "Jane Doe");
    assert_eq!(value["second"]["id"], "7063737762654598144");
    assert_eq!(value["outcome"]["kind"], "winner");
    assert_eq!(value["outcome"]["slot"], "first");
    assert_eq!(value["outcome"]["insult"], INSULTS[1]);
}
