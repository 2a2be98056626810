//! CLI command definitions.

use crate::styles::styles;
use clap::Parser;
use std::path::PathBuf;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const CLI_EXAMPLES: &str = "\
Examples:
  unpub --otp 123456                Unpublish the version named in ./package.json
  unpub --otp=123456                Equals form works too
  unpub --otp 123456 --dry-run      Print the registry command without running it
  unpub --otp 123456 --manifest ../pkg/package.json
  unpub --otp 123456 --registry-cli pnpm";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Unpub CLI - Remove a published package version from the registry.
#[derive(Debug, Parser)]
#[command(name = "unpub", author, version, styles = styles())]
#[command(
    about = "Remove the manifest's published version from the registry",
    after_help = CLI_EXAMPLES
)]
pub struct Cli {
    /// One-time passcode authorizing the removal.
    ///
    /// The flag without a value counts as absent: unpublishing never proceeds
    /// on a blank passcode.
    #[arg(long, value_name = "CODE", num_args = 0..=1)]
    pub otp: Option<Option<String>>,

    /// Path to the package manifest (defaults to ./package.json).
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Registry CLI program to invoke (defaults to npm, or $UNPUB_REGISTRY_CLI).
    #[arg(long, value_name = "PROGRAM")]
    pub registry_cli: Option<String>,

    /// Print the registry command without executing it.
    #[arg(long)]
    pub dry_run: bool,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Cli {
    /// The supplied passcode, with a bare `--otp` flag collapsed to absent.
    pub fn otp_value(&self) -> Option<String> {
        self.otp.clone().flatten().filter(|code| !code.is_empty())
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_with_value() {
        let cli = Cli::parse_from(["unpub", "--otp", "abc123"]);
        assert_eq!(cli.otp_value().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_otp_equals_form() {
        let cli = Cli::parse_from(["unpub", "--otp=abc123"]);
        assert_eq!(cli.otp_value().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_otp_flag_without_value_is_absent() {
        let cli = Cli::parse_from(["unpub", "--otp"]);
        assert_eq!(cli.otp_value(), None);
    }

    #[test]
    fn test_otp_missing() {
        let cli = Cli::parse_from(["unpub"]);
        assert_eq!(cli.otp_value(), None);
    }

    #[test]
    fn test_otp_flag_before_another_flag_is_absent() {
        let cli = Cli::parse_from(["unpub", "--otp", "--dry-run"]);
        assert_eq!(cli.otp_value(), None);
        assert!(cli.dry_run);
    }
}
