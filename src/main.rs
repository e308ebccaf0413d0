use anyhow::{Context, Result};
use clap::Parser;
use component_forge::analyze::analyze;
use component_forge::generate::{BatchReport, MultiPlatformGenerator};
use component_forge::platform::{user_registry_path, PlatformDetector, PlatformRegistry};
use component_forge::util::display_path;
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;

use cli::{AnalyzeArgs, Command, DetectArgs, GenerateArgs, PlatformsArgs, RootArgs};

const REGISTRY_ENV: &str = "CFORGE_REGISTRY";

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);
    let registry = load_registry(args.registry)?;

    match args.command {
        Command::Detect(detect) => cmd_detect(&registry, detect),
        Command::Analyze(analyze) => cmd_analyze(&registry, analyze),
        Command::Generate(generate) => cmd_generate(registry, generate),
        Command::Platforms(platforms) => cmd_platforms(&registry, platforms),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Explicit flag, then environment, then the per-user file when present.
fn load_registry(flag: Option<PathBuf>) -> Result<PlatformRegistry> {
    let explicit = flag.or_else(|| env::var_os(REGISTRY_ENV).map(PathBuf::from));
    if let Some(path) = explicit {
        return PlatformRegistry::load(&path);
    }
    match user_registry_path().filter(|path| path.is_file()) {
        Some(path) => PlatformRegistry::load(&path),
        None => Ok(PlatformRegistry::builtin()),
    }
}

fn cmd_detect(registry: &PlatformRegistry, args: DetectArgs) -> Result<()> {
    let detector = PlatformDetector::new(registry);
    let platform = match args.from {
        Some(dir) => detector.detect_from(&dir),
        None => detector.detect(),
    };
    println!("{platform}");
    Ok(())
}

fn cmd_analyze(registry: &PlatformRegistry, args: AnalyzeArgs) -> Result<()> {
    let platform = match args.platform.as_deref() {
        Some(name) => name,
        None => PlatformDetector::new(registry).detect(),
    };
    let analysis = analyze(&args.text, platform);
    if args.json {
        return print_json(&analysis);
    }
    let join = |items: Vec<&str>| items.join(", ");
    println!("name: {}", analysis.name);
    println!(
        "component types: {}",
        join(analysis.component_types.iter().map(|t| t.as_str()).collect())
    );
    println!("complexity: {}", analysis.complexity);
    let integrations = join(analysis.integration_needs.iter().map(|i| i.as_str()).collect());
    println!(
        "integrations: {}",
        if integrations.is_empty() { "none" } else { integrations.as_str() }
    );
    println!("platform: {}", analysis.platform);
    Ok(())
}

fn cmd_generate(registry: PlatformRegistry, args: GenerateArgs) -> Result<()> {
    let generator = MultiPlatformGenerator::new(registry);
    let target = args.target;
    let report = if target.all || !target.platforms.is_empty() {
        generator.generate_many(&args.text, &target.platforms)
    } else {
        let requested = match target.platform {
            Some(name) => name,
            None => PlatformDetector::new(generator.registry()).detect().to_string(),
        };
        generator.generate_many(&args.text, &[requested])
    };

    for failure in report.failures() {
        eprintln!(
            "warning: {} failed: {}",
            failure.requested,
            failure.error.as_deref().unwrap_or("unknown error")
        );
    }
    anyhow::ensure!(
        !report.artifacts().is_empty(),
        "no platform produced any artifacts"
    );

    let written = if args.dry_run {
        Vec::new()
    } else {
        output::write_artifacts(&args.output, report.artifacts())
            .context("write generated artifacts")?
    };

    if args.json {
        return print_json(&GenerateOutput {
            report: &report,
            written: written
                .iter()
                .map(|path| display_path(path, Some(&args.output)))
                .collect(),
            dry_run: args.dry_run,
        });
    }
    for artifact in report.artifacts() {
        let path = output::artifact_path(&args.output, artifact);
        let verb = if args.dry_run { "would write" } else { "wrote" };
        println!("{verb} {}", display_path(&path, Some(&args.output)));
    }
    Ok(())
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    #[serde(flatten)]
    report: &'a BatchReport,
    written: Vec<String>,
    dry_run: bool,
}

fn cmd_platforms(registry: &PlatformRegistry, args: PlatformsArgs) -> Result<()> {
    if args.json {
        println!("{}", registry.to_json()?);
        return Ok(());
    }
    let default = registry.default_config().name.as_str();
    for config in registry.platforms() {
        let marker = if config.name == default { " (default)" } else { "" };
        println!(
            "{}{marker}\t{}\t{}",
            config.name,
            config.syntax_dialect.as_str(),
            config.marker_directories.join(",")
        );
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}
