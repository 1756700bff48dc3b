use anyhow::Result;
use clap::Parser;
use patchhook::{PatchOrchestrator, PatchTool};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Build-time patch hook for vendored framework sources
///
/// Applies the project's patch set to a vendored framework directory,
/// exactly once, reversing whatever a previous run applied first.
#[derive(Parser, Debug)]
#[command(name = "patchhook")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Framework installation directory to patch
    framework_dir: PathBuf,

    /// Project root directory
    ///
    /// The patch directory is derived from this (scripts/patches unless
    /// overridden). Defaults to the current working directory, where build
    /// systems run their hooks.
    project_root: Option<PathBuf>,

    /// Patch directory, overriding the settings file and the default
    #[arg(long)]
    patch_dir: Option<PathBuf>,

    /// Marker file name inside the framework directory
    #[arg(long)]
    marker_name: Option<String>,

    /// Reverse the previously applied patch set and exit
    #[arg(long)]
    revert: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt().with_env_filter(filter).with_target(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_writer(file).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level, args.log_file.clone())?;

    info!("Starting patchhook v{}", env!("CARGO_PKG_VERSION"));

    let framework_dir = args.framework_dir.canonicalize()?;
    let project_root = match &args.project_root {
        Some(path) => path.canonicalize()?,
        None => std::env::current_dir()?,
    };

    info!("Framework directory: {}", framework_dir.display());
    info!("Project root: {}", project_root.display());

    let settings = match patchhook::load_settings(&project_root) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load hook settings: {}", e);
            return Err(e.into());
        }
    };

    let patch_dir = args
        .patch_dir
        .unwrap_or_else(|| project_root.join(&settings.patch_dir));
    let marker_name = args.marker_name.unwrap_or_else(|| settings.marker_name.clone());
    let marker_path = framework_dir.join(marker_name);
    let tool = PatchTool::new(settings.tool.clone(), settings.strip);

    let orchestrator =
        match PatchOrchestrator::new(framework_dir, patch_dir, marker_path, tool) {
            Ok(orchestrator) => orchestrator,
            Err(e) => {
                eprintln!("Failed to set up patch hook: {}", e);
                return Err(e.into());
            }
        };

    if args.revert {
        match orchestrator.revert() {
            Ok(true) => info!("Previously applied patches reversed"),
            Ok(false) => info!("Nothing to revert"),
            Err(e) => {
                eprintln!("Revert failed: {}", e);
                return Err(e.into());
            }
        }
    } else {
        match orchestrator.apply() {
            Ok(report) => {
                info!(
                    "Patch hook finished (reversed previous set: {}, applied: {})",
                    report.reversed, report.applied
                );
            }
            Err(e) => {
                eprintln!("Patching failed: {}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
