use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use renumber_core::{OutputFormatter, VersionResult};
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod interactive;
mod plan;
mod run;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let use_color = !cli.no_color && io::stdout().is_terminal();

    let result = match cli.command {
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            interactive::run_interactive(&mut stdin.lock(), &mut stdout.lock(), use_color)
        },

        Some(Commands::Run {
            directory,
            prefix,
            output,
        }) => run::handle_run(&directory, &prefix, output, use_color),

        Some(Commands::Plan {
            directory,
            prefix,
            output,
        }) => plan::handle_plan(&directory, &prefix, output, use_color),

        Some(Commands::Version { output }) => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "renumber".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["renumber"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_run_accepts_hyphenated_and_empty_prefix() {
        let cli = Cli::try_parse_from(["renumber", "run", "/tmp/x", "-Part-"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Run { ref prefix, .. }) if prefix == "-Part-"
        ));

        let cli = Cli::try_parse_from(["renumber", "run", "/tmp/x", ""]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Run { ref prefix, .. }) if prefix.is_empty()
        ));
    }

    #[test]
    fn test_verbose_is_counted() {
        let cli = Cli::try_parse_from(["renumber", "-vv", "version"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
