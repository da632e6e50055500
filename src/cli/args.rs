use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::engines::SearchEngine;

/// Top-level CLI entrypoint for `gquery-rs`.
#[derive(Parser, Debug)]
#[command(
    name = "gquery-rs",
    version,
    about = "Generate advanced Google/Bing/DDG queries for OSINT / auditing",
    after_help = "Only use the generated queries for authorized research and auditing."
)]
pub struct Cli {
    /// Organization name.
    #[arg(long, required_unless_present = "list_presets")]
    pub org: Option<String>,

    /// Domain (e.g. example.com).
    #[arg(long, required_unless_present = "list_presets")]
    pub domain: Option<String>,

    /// Which preset(s) to use, in order.
    ///
    /// Defaults to `search.default_presets` from the settings file,
    /// or `quick`.
    #[arg(long = "preset", num_args = 1..)]
    pub presets: Vec<String>,

    /// Custom queries to include verbatim.
    #[arg(long = "custom", num_args = 0..)]
    pub custom: Vec<String>,

    /// Limit results after date (YYYY-MM-DD).
    #[arg(long)]
    pub after: Option<String>,

    /// Limit results before date (YYYY-MM-DD).
    #[arg(long)]
    pub before: Option<String>,

    /// Search engine used to build URLs.
    #[arg(long, value_enum)]
    pub engine: Option<EngineArg>,

    /// Export queries to a `.json` or `.csv` file.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print the available presets and exit.
    #[arg(long = "list-presets")]
    pub list_presets: bool,

    /// Path to a settings file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Engines selectable on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EngineArg {
    Google,
    Bing,
    Ddg,
}

impl From<EngineArg> for SearchEngine {
    fn from(value: EngineArg) -> Self {
        match value {
            EngineArg::Google => SearchEngine::Google,
            EngineArg::Bing => SearchEngine::Bing,
            EngineArg::Ddg => SearchEngine::DuckDuckGo,
        }
    }
}
