//! The main module contains the code to process the command line for the chainbuild program and
//! dispatch to the subcommand that checks, shows, creates, or plans a build configuration.

mod checking;
mod initializing;
mod planning;

use crate::checking::{check_configuration, show_configuration};
use crate::initializing::initialize_configuration;
use crate::planning::plan_build;
use chainbuild_lib::config_file::DEFAULT_CONFIG_FILE_NAME;
use chainbuild_lib::ChainbuildError;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use env_logger::TimestampPrecision;
use std::io::Write;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Build configuration loader for smart-contract toolchains.")]
#[command(propagate_version = true)]
struct ChainbuildCommand {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a configuration file
    Check(CheckCLArgs),
    /// Print the validated configuration as JSON
    Show(ConfigCLArgs),
    /// Write a default configuration file
    Init(InitCLArgs),
    /// Print the tool invocations for a configuration
    Plan(ConfigCLArgs),
}

/// Arguments that name a configuration file.
#[derive(Args, Debug, Clone)]
pub struct ConfigCLArgs {
    /// Configuration file to load
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    pub config: String,
}

/// Arguments for validating a configuration file.
#[derive(Args, Debug, Clone)]
pub struct CheckCLArgs {
    #[command(flatten)]
    pub file: ConfigCLArgs,

    /// Do not require the source and template directories to exist
    #[arg(long)]
    pub skip_path_check: bool,
}

/// Arguments for writing the default configuration file.
#[derive(Args, Debug, Clone)]
pub struct InitCLArgs {
    #[command(flatten)]
    pub file: ConfigCLArgs,

    /// Write the configuration to stdout instead of the file given in `config`.
    #[arg(long)]
    pub stdout: bool,

    /// Replace an existing configuration file
    #[arg(long)]
    pub force: bool,
}

fn main() -> ExitCode {
    let _ = env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .format_timestamp(Some(TimestampPrecision::Seconds))
        .try_init();

    let chainbuild_command = ChainbuildCommand::parse();
    let result: Result<(), ChainbuildError> = match &chainbuild_command.command {
        Commands::Check(check_args) => check_configuration(check_args),
        Commands::Show(show_args) => show_configuration(show_args),
        Commands::Init(init_args) => initialize_configuration(init_args),
        Commands::Plan(plan_args) => plan_build(plan_args),
    };

    // Configuration errors are fatal and go to the user unchanged.
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
