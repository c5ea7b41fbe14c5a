//! The `checking` module validates a configuration file and reports what it contains.

use crate::{CheckCLArgs, ConfigCLArgs};
use chainbuild_lib::config_file::{load, load_and_verify};
use chainbuild_lib::{BuildConfiguration, ChainbuildError};

/// Load the configuration named in `args` and print a summary of the settings each tool
/// receives.
///
/// # Arguments
///
/// * `args` - The [`CheckCLArgs`] object.
pub fn check_configuration(args: &CheckCLArgs) -> Result<(), ChainbuildError> {
    let configuration = if args.skip_path_check {
        load(&args.file.config)?
    } else {
        load_and_verify(&args.file.config)?
    };

    log::info!("Configuration {} is valid", args.file.config);
    print_summary(&args.file.config, &configuration);

    Ok(())
}

/// Load the configuration named in `args` and print it as JSON.
///
/// # Arguments
///
/// * `args` - The [`ConfigCLArgs`] object.
pub fn show_configuration(args: &ConfigCLArgs) -> Result<(), ChainbuildError> {
    let configuration = load(&args.config)?;

    let mut stdout = std::io::stdout();
    configuration.write_to_stream_as_json(&mut stdout)
}

fn print_summary(config_file: &str, configuration: &BuildConfiguration) {
    let compiler = configuration.compiler_settings();
    let bindings = configuration.type_binding_settings();
    let docs = configuration.documentation_settings();

    println!("{config_file}: ok");
    println!(
        "  compiler      {} (optimizer {}, {} runs) sources {}",
        compiler.version,
        if compiler.optimizer_enabled { "on" } else { "off" },
        compiler.optimizer_runs,
        compiler.sources.display()
    );
    println!(
        "  typechain     {} -> {} (overloads: {})",
        bindings.target,
        bindings.out_dir.display(),
        bindings.always_generate_overloads
    );
    println!(
        "  tests         bail on first failure: {}",
        configuration.test_runner_settings().bail_on_first_failure
    );
    println!(
        "  gas reporter  {}",
        configuration.gas_reporter_settings().currency
    );
    println!(
        "  docgen        {} pages -> {} (templates {})",
        docs.pages,
        docs.output_dir.display(),
        docs.templates.display()
    );

    let capabilities: Vec<String> = configuration
        .capabilities()
        .iter()
        .map(|c| c.to_string())
        .collect();
    println!("  capabilities  {}", capabilities.join(", "));
}
