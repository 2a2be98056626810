//! `unpub` is the primary CLI binary.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use unpub_cli::constants::{PACKAGE_MANIFEST_FILE, get_registry_cli};
use unpub_cli::unpublish::{UnpublishOptions, unpublish};
use unpub_cli::{Cli, SystemRunner, UnpubError, UnpubResult};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

fn main() {
    // Initialize tracing - only enable when RUST_LOG is set.
    init_tracing();

    if let Err(e) = run() {
        print_error(&e);
        std::process::exit(1);
    }
}

/// Print an error to stderr with appropriate formatting based on error type.
fn print_error(e: &UnpubError) {
    eprintln!();
    match e {
        UnpubError::MissingOtp => {
            eprintln!(
                "  {} One-time passcode required",
                "error".bright_red().bold()
            );
            eprintln!();
            eprintln!("    Unpublishing is gated by a registry OTP.");
            eprintln!();
            eprintln!(
                "    {}: {}",
                "usage".bright_blue().bold(),
                "unpub --otp <code>".bright_white()
            );
        }
        UnpubError::ManifestNotFound(path) => {
            eprintln!(
                "  {} package.json not found",
                "error".bright_red().bold()
            );
            eprintln!();
            eprintln!("    {}: {}", "Searched".dimmed(), path.display());
            eprintln!();
            eprintln!(
                "    {}: Run from the package directory or pass {}",
                "hint".bright_blue().bold(),
                "--manifest <path>".bright_white()
            );
        }
        UnpubError::UnpublishFailed { name, version } => {
            eprintln!(
                "  {} Failed to unpublish {}",
                "error".bright_red().bold(),
                format!("{}@{}", name, version).bright_white()
            );
        }
        _ => {
            eprintln!("  {} {}", "error".bright_red().bold(), e);
        }
    }
    eprintln!();
}

/// Initialize tracing. Only enables logging when RUST_LOG is set.
fn init_tracing() {
    let rust_log_set = std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .is_some();

    if !rust_log_set {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .init();
}

fn run() -> UnpubResult<()> {
    let cli = Cli::parse();

    let opts = UnpublishOptions {
        manifest_path: cli
            .manifest
            .clone()
            .unwrap_or_else(|| PACKAGE_MANIFEST_FILE.into()),
        otp: cli.otp_value(),
        registry_cli: cli.registry_cli.clone().unwrap_or_else(get_registry_cli),
        dry_run: cli.dry_run,
    };

    unpublish(&opts, &SystemRunner)?;

    Ok(())
}
