//! The `planning` module prints the tool invocations a configuration produces.

use crate::ConfigCLArgs;
use chainbuild_lib::config_file::load;
use chainbuild_lib::{BuildOrchestrator, ChainbuildError};

/// Load the configuration named in `args` and print every tool invocation as JSON.
///
/// # Arguments
///
/// * `args` - The [`ConfigCLArgs`] object.
pub fn plan_build(args: &ConfigCLArgs) -> Result<(), ChainbuildError> {
    let configuration = load(&args.config)?;
    let orchestrator = BuildOrchestrator::new(&configuration);

    log::debug!(
        "Planning {} tool invocation(s) from {}",
        orchestrator.capabilities().len(),
        args.config
    );

    let mut stdout = std::io::stdout();
    orchestrator.write_to_stream_as_json(&mut stdout)
}
