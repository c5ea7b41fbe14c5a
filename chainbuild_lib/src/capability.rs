//! The `capability` module replaces implicit plugin registration with an explicit list of the
//! external tools a build may invoke.
//!
//! Plugin names listed in a configuration file resolve into [`Capability`] values. The contract
//! compiler and the test runner are always available and do not need a plugin entry.

use crate::error::Malformation;
use std::fmt;
use std::str::FromStr;

/// The key in the configuration file for the list of plugins.
pub static PLUGINS_KEY: &str = "plugins";

/// An external tool the build orchestrator can invoke with settings from the configuration.
#[derive(Hash, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Capability {
    /// The contract compiler.
    ContractCompiler,

    /// The type-binding generator.
    TypeBindings,

    /// The test runner.
    TestRunner,

    /// The gas-usage reporter.
    GasReporter,

    /// The coverage instrumenter.
    Coverage,

    /// The documentation generator.
    Documentation,
}

impl Capability {
    /// Return the capabilities present in every build.
    pub fn built_in() -> Vec<Capability> {
        vec![Capability::ContractCompiler, Capability::TestRunner]
    }

    /// Return every capability in the order the orchestrator invokes them.
    pub fn all() -> Vec<Capability> {
        vec![
            Capability::ContractCompiler,
            Capability::TypeBindings,
            Capability::TestRunner,
            Capability::GasReporter,
            Capability::Coverage,
            Capability::Documentation,
        ]
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Capability::ContractCompiler => "compiler",
            Capability::TypeBindings => "typechain",
            Capability::TestRunner => "test-runner",
            Capability::GasReporter => "gas-reporter",
            Capability::Coverage => "coverage",
            Capability::Documentation => "docgen",
        };

        write!(f, "{}", text)
    }
}

/// A plugin name as written in the configuration file.
#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub enum Plugin {
    /// Bundle that enables type bindings, gas reporting, and coverage.
    Toolbox,
    TypeChain,
    GasReporter,
    Coverage,
    DocGen,
}

impl Plugin {
    /// Return the capabilities the plugin provides.
    pub fn capabilities(&self) -> Vec<Capability> {
        match self {
            Plugin::Toolbox => vec![
                Capability::TypeBindings,
                Capability::GasReporter,
                Capability::Coverage,
            ],
            Plugin::TypeChain => vec![Capability::TypeBindings],
            Plugin::GasReporter => vec![Capability::GasReporter],
            Plugin::Coverage => vec![Capability::Coverage],
            Plugin::DocGen => vec![Capability::Documentation],
        }
    }
}

impl FromStr for Plugin {
    type Err = Malformation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toolbox" => Ok(Plugin::Toolbox),
            "typechain" => Ok(Plugin::TypeChain),
            "gas-reporter" => Ok(Plugin::GasReporter),
            "coverage" => Ok(Plugin::Coverage),
            "docgen" => Ok(Plugin::DocGen),
            _ => Err(Malformation::UnsupportedValue {
                key: String::from(PLUGINS_KEY),
                value: String::from(s),
            }),
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Plugin::Toolbox => "toolbox",
            Plugin::TypeChain => "typechain",
            Plugin::GasReporter => "gas-reporter",
            Plugin::Coverage => "coverage",
            Plugin::DocGen => "docgen",
        };

        write!(f, "{}", text)
    }
}

/// Resolve `plugins` into the full capability list of a build: the built-in capabilities
/// followed by the plugin capabilities in the order they first appear.
///
/// # Arguments
///
/// * `plugins` - The plugins listed in the configuration.
pub fn resolve_capabilities(plugins: &[Plugin]) -> Vec<Capability> {
    let mut capabilities = Capability::built_in();

    for capability in plugins.iter().flat_map(|p| p.capabilities()) {
        if !capabilities.contains(&capability) {
            capabilities.push(capability);
        }
    }

    capabilities
}
