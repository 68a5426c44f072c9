//! Custom cargo commands for the guardclause workspace.
//!
//! Usage:
//!   cargo xtask verify           - Run full verification suite
//!   cargo xtask test             - Run all tests, with and without gating
//!   cargo xtask check            - Quick check
//!   cargo xtask bench            - Run benchmarks
//!   cargo xtask doc-lint [path]  - List undocumented failure producers
//!   cargo xtask doc-fix [path]   - Insert the default doc comment where missing

mod docs;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const THROW_RS: &str = "src/throw.rs";

#[derive(Parser)]
#[command(name = "xtask", about = "Developer commands for guardclause")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run full verification suite (doc lint, tests in both gating modes, clippy)
    Verify,
    /// Run all Rust tests, with and without `compile-assertions`
    Test,
    /// Quick check (cargo check + clippy)
    Check,
    /// Run benchmarks
    Bench,
    /// Report public failure producers without a doc comment
    DocLint {
        /// File to inspect, relative to the workspace root
        #[arg(default_value = THROW_RS)]
        path: PathBuf,
    },
    /// Insert the default doc comment on every undocumented failure producer
    DocFix {
        /// File to rewrite, relative to the workspace root
        #[arg(default_value = THROW_RS)]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    match Cli::parse().command {
        Commands::Verify => verify(),
        Commands::Test => test(),
        Commands::Check => check(),
        Commands::Bench => run_cargo(&["bench"]),
        Commands::DocLint { path } => doc_lint(&path),
        Commands::DocFix { path } => doc_fix(&path),
    }
}

/// Full verification suite
fn verify() -> Result<()> {
    info!("[1/3] checking failure producer docs");
    doc_lint(Path::new(THROW_RS))?;

    info!("[2/3] running tests");
    test()?;

    info!("[3/3] running clippy");
    run_cargo(&["clippy", "--workspace", "--all-targets", "--quiet", "--", "-D", "warnings"])?;

    info!("all verification checks passed");
    Ok(())
}

/// Both gating modes, since the elided expansion only compiles without the feature.
fn test() -> Result<()> {
    run_cargo(&["test", "--workspace"])?;
    run_cargo(&["test", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    run_cargo(&["check", "--workspace", "--all-targets"])?;
    run_cargo(&["clippy", "--workspace", "--quiet", "--", "-D", "warnings"])
}

fn doc_lint(path: &Path) -> Result<()> {
    let file = project_root()?.join(path);
    let source = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let diagnostics = docs::lint(&source)?;
    for diagnostic in &diagnostics {
        warn!(
            "{}:{}: `{}` has no doc comment",
            path.display(),
            diagnostic.line,
            diagnostic.name
        );
    }
    if !diagnostics.is_empty() {
        bail!(
            "{} undocumented failure producer(s); run `cargo xtask doc-fix`",
            diagnostics.len()
        );
    }

    info!("{}: every failure producer is documented", path.display());
    Ok(())
}

fn doc_fix(path: &Path) -> Result<()> {
    let file = project_root()?.join(path);
    let source = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let diagnostics = docs::lint(&source)?;
    if diagnostics.is_empty() {
        info!("{}: nothing to fix", path.display());
        return Ok(());
    }

    let fixed = docs::apply_default_docs(&source, &diagnostics);
    fs::write(&file, fixed).with_context(|| format!("Failed to write {}", file.display()))?;
    for diagnostic in &diagnostics {
        info!("{}:{}: documented `{}`", path.display(), diagnostic.line, diagnostic.name);
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read the current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;
    info!("cargo {}", args.join(" "));

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
