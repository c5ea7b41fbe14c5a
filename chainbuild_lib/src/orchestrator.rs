//! The `orchestrator` module turns a [`BuildConfiguration`] and its capability list into the
//! ordered list of tool invocations for a build. The tools themselves are external; an
//! invocation only names the tool and carries its parameters.

use crate::capability::Capability;
use crate::config_file::BuildConfiguration;
use crate::error::ChainbuildError;
use crate::json::pretty_print_json;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;

/// One external tool and the parameters it receives.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    /// The name of the tool's capability.
    pub tool: String,

    /// The parameter object for the tool.
    pub parameters: Value,
}

/// Plans tool invocations for one build configuration.
pub struct BuildOrchestrator<'a> {
    configuration: &'a BuildConfiguration,
    capabilities: Vec<Capability>,
}

impl<'a> BuildOrchestrator<'a> {
    /// Create an orchestrator for the capabilities `configuration` enables.
    ///
    /// # Arguments
    ///
    /// * `configuration` - The loaded configuration.
    pub fn new(configuration: &'a BuildConfiguration) -> BuildOrchestrator<'a> {
        BuildOrchestrator::with_capabilities(configuration, configuration.capabilities())
    }

    /// Create an orchestrator for an explicit capability list. The built-in capabilities are
    /// always added.
    ///
    /// # Arguments
    ///
    /// * `configuration` - The loaded configuration.
    /// * `capabilities` - The capabilities to invoke.
    pub fn with_capabilities(
        configuration: &'a BuildConfiguration,
        capabilities: Vec<Capability>,
    ) -> BuildOrchestrator<'a> {
        let mut all_capabilities = Capability::built_in();
        for capability in capabilities {
            if !all_capabilities.contains(&capability) {
                all_capabilities.push(capability);
            }
        }

        BuildOrchestrator {
            configuration,
            capabilities: all_capabilities,
        }
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// Return the parameter object `capability` receives.
    ///
    /// # Arguments
    ///
    /// * `capability` - The tool to describe.
    pub fn parameters_for(&self, capability: Capability) -> Value {
        let configuration = self.configuration;
        match capability {
            Capability::ContractCompiler => configuration.compiler_settings().to_parameters(),
            Capability::TypeBindings => configuration.type_binding_settings().to_parameters(),
            Capability::TestRunner => configuration.test_runner_settings().to_parameters(),
            Capability::GasReporter => configuration.gas_reporter_settings().to_parameters(),
            // Coverage runs with the instrumenter's own defaults.
            Capability::Coverage => Value::Object(Map::new()),
            Capability::Documentation => {
                configuration.documentation_settings().to_parameters()
            }
        }
    }

    /// Return one invocation per enabled capability, in invocation order.
    pub fn invocations(&self) -> Vec<ToolInvocation> {
        Capability::all()
            .into_iter()
            .filter(|c| self.capabilities.contains(c))
            .map(|c| {
                log::debug!("Planning invocation of {}", c);
                ToolInvocation {
                    tool: c.to_string(),
                    parameters: self.parameters_for(c),
                }
            })
            .collect()
    }

    /// Return the invocation plan as a JSON array.
    pub fn invocations_as_json(&self) -> Result<Value, ChainbuildError> {
        Ok(serde_json::to_value(self.invocations())?)
    }

    /// Write the invocation plan as pretty-printed JSON to `stream`.
    ///
    /// # Arguments
    ///
    /// * `stream` - The stream that will receive the JSON.
    pub fn write_to_stream_as_json(&self, stream: &mut dyn Write) -> Result<(), ChainbuildError> {
        let pretty_json = pretty_print_json(&self.invocations_as_json()?)?;
        writeln!(stream, "{pretty_json}")?;
        Ok(())
    }
}
