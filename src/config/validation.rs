// src/config/validation.rs

use crate::cli::Cli;
use anyhow::{anyhow, Result};

/// Validates combinations of CLI options that clap cannot easily express.
pub(super) fn validate_cli_options(cli: &Cli) -> Result<()> {
    if cli.recent == Some(0) {
        return Err(anyhow!(
            "--recent (-R) counts from 1 (the most recent folder)."
        ));
    }

    if cli.dry_run && cli.output_file.is_some() {
        return Err(anyhow!(
            "Cannot use --output <FILE> (-o) and --dry-run (-D) simultaneously."
        ));
    }

    #[cfg(feature = "clipboard")]
    if cli.dry_run && cli.paste {
        return Err(anyhow!(
            "Cannot use --paste (-p) and --dry-run (-D) simultaneously."
        ));
    }

    Ok(())
}
