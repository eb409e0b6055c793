use super::config::OutputFormat;
use core::fmt::Write as _;
use ogpost::{ComparisonResult, DecodedPost, Outcome, PostId, PostSlot, Presenter, Standing, Verdict};
use serde::Serialize;

/// Renders comparisons for a terminal.
///
/// Output is buffered until [`TerminalPresenter::take`] so a `reset` can still
/// discard it.
#[derive(Debug)]
pub struct TerminalPresenter {
    format: OutputFormat,
    buffer: String,
    failed: bool,
}

/// What the presenter rendered since the last reset.
#[derive(Debug, PartialEq, Eq)]
pub enum Rendered {
    Nothing,
    Report(String),
    Error(String),
}

#[derive(Serialize)]
struct JsonReport<'a> {
    first: PostCard<'a>,
    second: PostCard<'a>,
    outcome: &'a Outcome,
    verdict: Verdict,
}

#[derive(Serialize)]
struct PostCard<'a> {
    id: PostId,
    display_name: &'a str,
    timestamp_millis: u64,
    local: String,
    utc: String,
    standing: Standing,
}

#[derive(Serialize)]
struct JsonError<'a> {
    error: &'a str,
}

impl<'a> PostCard<'a> {
    fn new(result: &'a ComparisonResult, slot: PostSlot) -> Self {
        let post = result.post(slot);
        Self {
            id: post.id(),
            display_name: post.display_name(),
            timestamp_millis: post.timestamp_millis(),
            local: post.local_string(),
            utc: post.utc_string(),
            standing: result.standing(slot),
        }
    }
}

impl TerminalPresenter {
    pub const fn new(format: OutputFormat) -> Self {
        Self {
            format,
            buffer: String::new(),
            failed: false,
        }
    }

    /// Hands over the rendered output and clears the buffer.
    pub fn take(&mut self) -> Rendered {
        let buffer = core::mem::take(&mut self.buffer);
        match (buffer.is_empty(), core::mem::take(&mut self.failed)) {
            (true, _) => Rendered::Nothing,
            (false, true) => Rendered::Error(buffer),
            (false, false) => Rendered::Report(buffer),
        }
    }

    fn render_json<T: Serialize>(&mut self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => {
                self.buffer.push_str(&json);
                self.buffer.push('\n');
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to encode report");
                self.failed = true;
                let _ = writeln!(self.buffer, "failed to encode report: {err}");
            }
        }
    }

    fn render_text(&mut self, result: &ComparisonResult) {
        for slot in [PostSlot::First, PostSlot::Second] {
            write_card(&mut self.buffer, slot, result.post(slot), result.standing(slot));
        }
        let verdict = result.verdict();
        let _ = writeln!(self.buffer, "{}", verdict.title);
        let _ = writeln!(self.buffer, "{}", verdict.text);
    }
}

fn write_card(out: &mut String, slot: PostSlot, post: &DecodedPost, standing: Standing) {
    let badge = match standing {
        Standing::Winner => " [OG]",
        Standing::Loser => " [LATE]",
        Standing::Neutral => "",
    };
    let _ = writeln!(out, "Post {}{badge}", slot.index());
    let _ = writeln!(out, "  Author:  {}", post.display_name());
    let _ = writeln!(out, "  Post ID: {}", post.id());
    let _ = writeln!(out, "  Local:   {}", post.local_string());
    let _ = writeln!(out, "  UTC:     {}", post.utc_string());
    out.push('\n');
}

impl Presenter for TerminalPresenter {
    fn reset(&mut self) {
        self.buffer.clear();
        self.failed = false;
    }

    fn show_error(&mut self, message: &str) {
        self.failed = true;
        match self.format {
            OutputFormat::Text => {
                let _ = writeln!(self.buffer, "{message}");
            }
            OutputFormat::Json => self.render_json(&JsonError { error: message }),
        }
    }

    fn show_result(&mut self, result: &ComparisonResult) {
        match self.format {
            OutputFormat::Text => self.render_text(result),
            OutputFormat::Json => self.render_json(&JsonReport {
                first: PostCard::new(result, PostSlot::First),
                second: PostCard::new(result, PostSlot::Second),
                outcome: result.outcome(),
                verdict: result.verdict(),
            }),
        }
    }
}
