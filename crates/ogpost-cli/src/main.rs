#![doc = include_str!("../README.md")]

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::config::{CliArgs, CliConfig, Input};
use cli::telemetry::init_telemetry;
use cli::terminal::{Rendered, TerminalPresenter};
use ogpost::{RandSource, SeededRandom, ThreadRandom, analyze};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry()?;
    tracing::debug!(?config, "starting");

    let (url1, url2) = match config.input {
        Input::Args { url1, url2 } => (url1, url2),
        Input::Prompt => prompt_urls(&mut io::stdin().lock(), &mut io::stderr())?,
    };

    let rng: Box<dyn RandSource<u64>> = match config.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let mut presenter = TerminalPresenter::new(config.format);
    analyze(&mut presenter, &url1, &url2, rng.as_ref());

    match presenter.take() {
        Rendered::Report(report) => {
            io::stdout()
                .lock()
                .write_all(report.as_bytes())
                .context("failed to write report")?;
            Ok(ExitCode::SUCCESS)
        }
        Rendered::Error(message) => {
            io::stderr()
                .lock()
                .write_all(message.as_bytes())
                .context("failed to write error")?;
            Ok(ExitCode::FAILURE)
        }
        Rendered::Nothing => Ok(ExitCode::FAILURE),
    }
}

/// Reads one URL per line, prompting on `prompt` before each.
fn prompt_urls<R, W>(input: &mut R, prompt: &mut W) -> anyhow::Result<(String, String)>
where
    R: BufRead,
    W: Write,
{
    let mut urls = [String::new(), String::new()];
    for (i, url) in urls.iter_mut().enumerate() {
        write!(prompt, "Post link {}: ", i + 1)?;
        prompt.flush()?;
        input
            .read_line(url)
            .with_context(|| format!("failed to read post link {}", i + 1))?;
    }
    let [url1, url2] = urls;
    Ok((url1, url2))
}
