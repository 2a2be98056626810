//! Registry unpublish flow.

use crate::error::{UnpubError, UnpubResult};
use crate::manifest::PackageManifest;
use crate::runner::CommandRunner;
use colored::Colorize;
use std::path::PathBuf;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Options for a single unpublish run.
#[derive(Debug, Clone)]
pub struct UnpublishOptions {
    /// Path to the package manifest.
    pub manifest_path: PathBuf,

    /// One-time passcode authorizing the removal, if supplied.
    pub otp: Option<String>,

    /// Registry CLI program to invoke (e.g., "npm").
    pub registry_cli: String,

    /// Print the registry command without executing it.
    pub dry_run: bool,
}

/// What a completed run removed (or would remove, for a dry run).
#[derive(Debug, Clone)]
pub struct UnpublishOutcome {
    /// Package name from the manifest.
    pub name: String,

    /// Package version from the manifest.
    pub version: String,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Remove the manifest's published version from the registry.
///
/// Linear flow: load manifest, require OTP, invoke the registry CLI once.
/// Every failure is terminal; there are no retries and no cleanup beyond the
/// caller's process exit. The OTP check happens before any external call, so
/// a missing passcode never reaches the registry.
pub fn unpublish(
    opts: &UnpublishOptions,
    runner: &dyn CommandRunner,
) -> UnpubResult<UnpublishOutcome> {
    let manifest = PackageManifest::load(&opts.manifest_path)?;

    let otp = opts.otp.as_deref().ok_or(UnpubError::MissingOtp)?;

    let args = vec![
        "unpublish".to_string(),
        manifest.registry_ref(),
        format!("--otp={}", otp),
    ];

    tracing::debug!(program = %opts.registry_cli, ?args, "registry command");

    if opts.dry_run {
        println!(
            "\n  {} Dry run. Would execute: {} {}",
            "✓".bright_green(),
            opts.registry_cli.bright_white(),
            args.join(" ").dimmed()
        );
        return Ok(UnpublishOutcome {
            name: manifest.name,
            version: manifest.version,
            dry_run: true,
        });
    }

    println!(
        "  {} Unpublishing {} via {}",
        "→".bright_blue(),
        manifest.registry_ref().bright_cyan(),
        opts.registry_cli.bright_white()
    );

    // Spawn failure and nonzero exit report the same way: the registry CLI
    // owns the detailed diagnostics on the inherited streams.
    let failed = UnpubError::UnpublishFailed {
        name: manifest.name.clone(),
        version: manifest.version.clone(),
    };

    let status = runner.run(&opts.registry_cli, &args).map_err(|_| failed)?;

    if !status.success {
        return Err(UnpubError::UnpublishFailed {
            name: manifest.name,
            version: manifest.version,
        });
    }

    println!(
        "\n  {} Successfully unpublished {}",
        "✓".bright_green(),
        manifest.registry_ref().bright_white()
    );

    Ok(UnpublishOutcome {
        name: manifest.name,
        version: manifest.version,
        dry_run: false,
    })
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
