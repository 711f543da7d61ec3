use super::{
    parsing::collect_extensions, validation::validate_cli_options, Config, ExtensionChoice,
    FileChoice, OutputDestination, RootSource,
};
use crate::cli::Cli;
use anyhow::Result;
use std::path::PathBuf;

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        validate_cli_options(&cli)?;

        let root = match cli.recent {
            Some(index) => RootSource::Recent(index),
            None => RootSource::Path(cli.path.unwrap_or_else(|| ".".to_string())),
        };

        let extensions = if cli.all_ext {
            ExtensionChoice::All
        } else {
            match collect_extensions(cli.extensions, cli.preset) {
                Some(selected) => ExtensionChoice::Explicit(selected),
                None => ExtensionChoice::Saved,
            }
        };

        let files = if cli.all_files {
            FileChoice::All
        } else {
            match cli.files {
                Some(files) => FileChoice::Explicit(files.into_iter().map(PathBuf::from).collect()),
                None => FileChoice::Saved,
            }
        };

        let output_destination = match cli.output_file {
            Some(path) => OutputDestination::File(PathBuf::from(path)),
            None => OutputDestination::FolderDefault,
        };

        #[cfg(feature = "clipboard")]
        let copy_to_clipboard = cli.paste;
        #[cfg(not(feature = "clipboard"))]
        let copy_to_clipboard = false;

        let config = Config {
            root,
            list_recent: cli.list_recent,
            list_extensions: cli.list_extensions,
            extensions,
            files,
            format: cli.format,
            output_destination,
            copy_to_clipboard,
            dry_run: cli.dry_run,
            search: cli.search,
            save_preferences: !cli.no_save,
            prefs_dir: cli.prefs_dir.map(PathBuf::from),
        };
        log::debug!("Configuration built: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use clap::Parser;

    fn build(args: &[&str]) -> Result<Config> {
        Config::try_from(Cli::parse_from(args))
    }

    #[test]
    fn test_defaults() -> Result<()> {
        let config = build(&["foldermap"])?;
        assert_eq!(config.root, RootSource::Path(".".to_string()));
        assert_eq!(config.extensions, ExtensionChoice::Saved);
        assert_eq!(config.files, FileChoice::Saved);
        assert_eq!(config.output_destination, OutputDestination::FolderDefault);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.save_preferences);
        assert!(!config.copy_to_clipboard);
        Ok(())
    }

    #[test]
    fn test_explicit_choices() -> Result<()> {
        let config = build(&[
            "foldermap",
            "proj",
            "-e",
            "PY",
            "none",
            "-f",
            "src/a.py",
            "-o",
            "out.md",
            "--no-save",
            "--prefs-dir",
            "/tmp/p",
        ])?;
        assert_eq!(config.root, RootSource::Path("proj".to_string()));
        let ExtensionChoice::Explicit(exts) = &config.extensions else {
            panic!("expected explicit extensions");
        };
        assert!(exts.contains(".py"));
        assert!(exts.contains(""));
        assert_eq!(
            config.files,
            FileChoice::Explicit(vec![PathBuf::from("src/a.py")])
        );
        assert_eq!(
            config.output_destination,
            OutputDestination::File(PathBuf::from("out.md"))
        );
        assert!(!config.save_preferences);
        assert_eq!(config.prefs_dir, Some(PathBuf::from("/tmp/p")));
        Ok(())
    }

    #[test]
    fn test_all_and_recent() -> Result<()> {
        let config = build(&["foldermap", "-R", "3", "-A", "-a"])?;
        assert_eq!(config.root, RootSource::Recent(3));
        assert_eq!(config.extensions, ExtensionChoice::All);
        assert_eq!(config.files, FileChoice::All);
        Ok(())
    }

    #[test]
    fn test_validation_failure_propagates() {
        assert!(build(&["foldermap", "-R", "0"]).is_err());
    }
}
