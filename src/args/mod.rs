pub mod types;
pub mod validation;

use clap::Parser;

pub use types::{Args, CleanArgs, OddsSourceKind};

/// Parse the command line into settings the server can use directly.
///
/// # Errors
///
/// Will return `Err` if the built-in defaults cannot be applied
pub fn args_checks() -> Result<CleanArgs, String> {
    CleanArgs::new(Args::parse())
}
