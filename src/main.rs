// src/main.rs

use anyhow::Result;
use clap::Parser;
use foldermap::cli::Cli;
use foldermap::errors::Error;
use foldermap::signal::setup_signal_handler;
use foldermap::{run, Config, PreferenceStore, RunOutcome};

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "foldermap=debug".parse()?
                } else {
                    "foldermap=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting foldermap v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => "Box<Any>",
        };
        eprintln!(
            "Application Error: {}",
            msg.replace(env!("CARGO_MANIFEST_DIR"), "<redacted>")
                .replace(std::path::MAIN_SEPARATOR, "/")
        );
    }));

    // --- Configuration & Execution ---
    let config = Config::try_from(Cli::parse())?;
    let token = setup_signal_handler()?;
    let mut store = PreferenceStore::open(config.preference_location());

    let stdout = std::io::stdout();
    let result = run(&config, &mut store, &token, &mut stdout.lock());

    // --- Error Handling ---
    match result {
        Ok(RunOutcome::Summary {
            path,
            files,
            copied_to_clipboard,
        }) => {
            println!("Summary file created: {}", path.display());
            log::info!("Summarized {} file(s)", files);
            if copied_to_clipboard {
                println!("Summary copied to clipboard.");
            }
        }
        Ok(_) => {}
        Err(e) => match e.downcast_ref::<Error>() {
            Some(Error::Interrupted) => {
                eprintln!("\nOperation cancelled.");
                std::process::exit(130);
            }
            Some(err) if err.is_nothing_to_do() => {
                eprintln!("foldermap: {}", err);
            }
            _ => {
                log::error!("FATAL: {:#}", e);
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
