//! `unpub-cli` library.

pub mod commands;
pub mod constants;
pub mod error;
pub mod manifest;
pub mod runner;
pub mod sanitize;
pub mod styles;
pub mod unpublish;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use manifest::*;
pub use runner::*;
pub use sanitize::*;
pub use unpublish::*;
