//! CLI argument parsing for the component generator.
//!
//! The CLI is thin: every command maps onto one library operation, and output
//! writing is the only side effect it adds.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "cforge",
    version,
    about = "Generate AI-assistant components for multiple CLI platforms",
    after_help = "Examples:\n  cforge detect\n  cforge analyze \"Create a 'deploy-app' automation tool with Docker\" --json\n  cforge generate \"Build a simple code quality validator\" --platform goose\n  cforge generate \"Create a 'ops-bot' agent\" --all --output ./out\n  cforge platforms --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Platform registry override file (JSON); falls back to $CFORGE_REGISTRY
    #[arg(long, value_name = "PATH", global = true)]
    pub registry: Option<PathBuf>,

    /// Log debug detail to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Detect(DetectArgs),
    Analyze(AnalyzeArgs),
    Generate(GenerateArgs),
    Platforms(PlatformsArgs),
}

#[derive(Parser, Debug)]
#[command(about = "Print the platform detected from marker directories")]
pub struct DetectArgs {
    /// Directory to start the search from (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub from: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(about = "Classify a request without rendering anything")]
pub struct AnalyzeArgs {
    /// Free-text request
    pub text: String,

    /// Platform to record in the analysis (default: detected)
    #[arg(long, value_name = "NAME")]
    pub platform: Option<String>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Render components for one or more platforms")]
pub struct GenerateArgs {
    /// Free-text request
    pub text: String,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Output root; artifacts land in generated-<platform>/ below it
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Render without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Platform selection; at most one form may be given.
#[derive(Args, Debug)]
#[group(multiple = false)]
pub struct TargetArgs {
    /// Single target platform (default: detected)
    #[arg(long, value_name = "NAME")]
    pub platform: Option<String>,

    /// Every registered platform
    #[arg(long)]
    pub all: bool,

    /// Comma-separated target platforms
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub platforms: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(about = "List registered platforms")]
pub struct PlatformsArgs {
    /// Print the effective registry in override-file schema
    #[arg(long)]
    pub json: bool,
}
