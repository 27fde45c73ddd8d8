//! cube-dbt CLI.

use clap::Parser;

use cube_cli::cli::{Cli, Command, log_config_from_cli};
use cube_cli::commands::{run_check, run_dimensions, types_table};
use cube_cli::config::Config;
use cube_cli::logging::init_logging;
use cube_cli::summary::print_check;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    };
    let exit_code = match &cli.command {
        Command::Dimensions(args) => match run_dimensions(args, &config) {
            Ok(text) => {
                println!("{text}");
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Check(args) => match run_check(args, &config) {
            Ok(result) => {
                print_check(&result);
                if result.has_errors() { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Types => {
            println!("{}", types_table(&config));
            0
        }
    };
    std::process::exit(exit_code);
}
