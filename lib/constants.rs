//! Constants for unpub-cli.

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The package manifest file name.
pub const PACKAGE_MANIFEST_FILE: &str = "package.json";

/// Default registry CLI program.
pub const DEFAULT_REGISTRY_CLI: &str = "npm";

/// Environment variable for a custom registry CLI program.
pub const REGISTRY_CLI_ENV: &str = "UNPUB_REGISTRY_CLI";

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Get the registry CLI program, checking UNPUB_REGISTRY_CLI env var first.
pub fn get_registry_cli() -> String {
    std::env::var(REGISTRY_CLI_ENV).unwrap_or_else(|_| DEFAULT_REGISTRY_CLI.to_string())
}
