//! The `initializing` module writes the default configuration file.

use crate::InitCLArgs;
use chainbuild_lib::{BuildConfiguration, ChainbuildError};
use std::path::Path;

/// Write [`BuildConfiguration::template`] to the file named in `args`, or to stdout.
///
/// # Arguments
///
/// * `args` - The [`InitCLArgs`] object.
pub fn initialize_configuration(args: &InitCLArgs) -> Result<(), ChainbuildError> {
    let configuration = BuildConfiguration::template();

    if args.stdout {
        let mut stdout = std::io::stdout();
        return configuration.write_to_stream_as_json(&mut stdout);
    }

    let config_file = Path::new(&args.file.config);
    if config_file.exists() && !args.force {
        log::warn!(
            "{} already exists, use --force to replace it",
            config_file.display()
        );
        return Err(ChainbuildError::IO(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists", config_file.display()),
        )));
    }

    configuration.write_to_file_as_json(config_file)?;
    println!("Wrote {}", config_file.display());

    Ok(())
}
