mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use slicer_core::config::config_home;
use slicer_core::units::parse_size;

#[derive(Debug, Parser)]
#[command(name = "slicer")]
#[command(about = "Split a file into fixed-size chunks and collect them back")]
#[command(version)]
struct Cli {
    /// Path to the slicer config directory (default: ~/.slicer)
    #[arg(long, global = true, env = "SLICER_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Cut a file into numbered chunks
    #[command(name = "CUT", alias = "cut")]
    Cut {
        /// File to cut
        path: PathBuf,
        /// Maximum chunk size, e.g. 1G, 512M, 4096 (default from config: 1 GiB)
        #[arg(long, value_parser = parse_size)]
        block_size: Option<u64>,
        /// Directory the chunks are written to (default from config: result)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Collect the chunks in a folder back into the original file
    #[command(name = "COLLECT", alias = "collect")]
    Collect {
        /// Folder holding the chunks of one cut
        folder: PathBuf,
        /// Directory the rebuilt file is written to (default from config: .)
        #[arg(long)]
        dest: Option<PathBuf>,
    },

    /// Write a default configuration file
    Init,

    /// Show the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("slicer=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit with 1, help and version with 0.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        std::process::exit(code);
    });

    let base_dir = config_home(cli.config_dir.as_deref())?;

    match cli.command {
        Commands::Cut {
            ref path,
            block_size,
            ref output_dir,
        } => commands::cut::run(path, &base_dir, block_size, output_dir.as_deref()),
        Commands::Collect {
            ref folder,
            ref dest,
        } => commands::collect::run(folder, &base_dir, dest.as_deref()),
        Commands::Init => commands::init::run(&base_dir),
        Commands::Config => commands::config::run(&base_dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_uppercase_keywords() {
        let cli = Cli::try_parse_from(["slicer", "CUT", "report.pdf"]).unwrap();
        match cli.command {
            Commands::Cut {
                path,
                block_size,
                output_dir,
            } => {
                assert_eq!(path, PathBuf::from("report.pdf"));
                assert_eq!(block_size, None);
                assert_eq!(output_dir, None);
            }
            _ => panic!("expected CUT"),
        }

        let cli = Cli::try_parse_from(["slicer", "COLLECT", "result"]).unwrap();
        assert!(matches!(cli.command, Commands::Collect { .. }));
    }

    #[test]
    fn accepts_lowercase_aliases_and_sizes() {
        let cli = Cli::try_parse_from([
            "slicer",
            "cut",
            "big.iso",
            "--block-size",
            "512M",
            "--output-dir",
            "parts",
        ])
        .unwrap();
        match cli.command {
            Commands::Cut {
                block_size,
                output_dir,
                ..
            } => {
                assert_eq!(block_size, Some(512 * 1024 * 1024));
                assert_eq!(output_dir, Some(PathBuf::from("parts")));
            }
            _ => panic!("expected CUT"),
        }
    }

    #[test]
    fn rejects_wrong_arguments() {
        assert!(Cli::try_parse_from(["slicer"]).is_err());
        assert!(Cli::try_parse_from(["slicer", "CUT"]).is_err());
        assert!(Cli::try_parse_from(["slicer", "CUT", "a", "b"]).is_err());

        let err = Cli::try_parse_from(["slicer", "SPLIT", "a"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn rejects_zero_block_size() {
        let err = Cli::try_parse_from(["slicer", "CUT", "a", "--block-size", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn help_is_not_a_usage_error() {
        let err = Cli::try_parse_from(["slicer", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
