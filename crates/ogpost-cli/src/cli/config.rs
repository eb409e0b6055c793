use anyhow::bail;
use clap::{Parser, ValueEnum};

/// Runtime configuration for the `ogpost-cli` binary.
///
/// Values come from CLI arguments or environment variables (a `.env` file in
/// the working directory is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ogpost-cli",
    version,
    about = "Find out which of two posts was published first"
)]
pub struct CliArgs {
    /// URL of the first post.
    ///
    /// When both URLs are omitted they are read from standard input, one per
    /// line.
    pub url1: Option<String>,

    /// URL of the second post.
    pub url2: Option<String>,

    /// Output format.
    ///
    /// Environment variable: `OGPOST_FORMAT`
    #[arg(long, short, env = "OGPOST_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Seed for the verdict's flavor line. Without it a fresh line is picked
    /// on every run.
    ///
    /// Environment variable: `OGPOST_SEED`
    #[arg(long, env = "OGPOST_SEED")]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Where the two URLs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Args { url1: String, url2: String },
    Prompt,
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub input: Input,
    pub format: OutputFormat,
    pub seed: Option<u64>,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let input = match (args.url1, args.url2) {
            (Some(url1), Some(url2)) => Input::Args { url1, url2 },
            (None, None) => Input::Prompt,
            _ => bail!("pass both post URLs, or neither to be prompted for them"),
        };

        Ok(Self {
            input,
            format: args.format,
            seed: args.seed,
        })
    }
}
