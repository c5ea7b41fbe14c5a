//! The `consumer_settings` module provides borrowed views of a [`BuildConfiguration`], one per
//! external tool. Each view holds exactly the settings its tool receives and can render them
//! as the JSON parameter object handed to the tool.

use crate::config_file::BuildConfiguration;
use crate::json::JSONMutate;
use crate::targets::{DocsPages, TypeTarget};
use serde_json::{json, Map, Value};
use std::path::Path;

/// Parameter key for the compiler version.
pub static VERSION_PARAMETER: &str = "version";

/// Parameter key for the optimizer switch.
pub static OPTIMIZER_ENABLED_PARAMETER: &str = "optimizer/enabled";

/// Parameter key for the optimizer run count.
pub static OPTIMIZER_RUNS_PARAMETER: &str = "optimizer/runs";

/// Parameter key for the contract source directory.
pub static SOURCES_PARAMETER: &str = "sources";

pub static OUT_DIR_PARAMETER: &str = "outDir";
pub static TARGET_PARAMETER: &str = "target";
pub static ALWAYS_GENERATE_OVERLOADS_PARAMETER: &str = "alwaysGenerateOverloads";
pub static CURRENCY_PARAMETER: &str = "currency";
pub static BAIL_PARAMETER: &str = "bail";
pub static PAGES_PARAMETER: &str = "pages";
pub static OUTPUT_DIR_PARAMETER: &str = "outputDir";
pub static TEMPLATES_PARAMETER: &str = "templates";

fn empty_parameters() -> Value {
    Value::Object(Map::new())
}

fn path_parameter(path: &Path) -> Value {
    json![path.to_string_lossy()]
}

/// Settings for the contract compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerSettings<'a> {
    pub version: &'a str,
    pub optimizer_enabled: bool,
    pub optimizer_runs: u64,
    pub sources: &'a Path,
}

impl<'a> CompilerSettings<'a> {
    /// Generate the compiler parameter object. In JSON the object has the form:
    ///
    /// ```json
    /// {
    ///     "version": "...",
    ///     "optimizer": {
    ///         "enabled": true,
    ///         "runs": 200
    ///     },
    ///     "sources": "..."
    /// }
    /// ```
    pub fn to_parameters(&self) -> Value {
        let mut parameters = empty_parameters();
        parameters.set_node_for_key(VERSION_PARAMETER, json![self.version]);
        parameters.set_node_for_key(OPTIMIZER_ENABLED_PARAMETER, json![self.optimizer_enabled]);
        parameters.set_node_for_key(OPTIMIZER_RUNS_PARAMETER, json![self.optimizer_runs]);
        parameters.set_node_for_key(SOURCES_PARAMETER, path_parameter(self.sources));
        parameters
    }
}

/// Settings for the type-binding generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeBindingSettings<'a> {
    pub out_dir: &'a Path,
    pub target: TypeTarget,
    pub always_generate_overloads: bool,
}

impl<'a> TypeBindingSettings<'a> {
    pub fn to_parameters(&self) -> Value {
        let mut parameters = empty_parameters();
        parameters.set_node_for_key(OUT_DIR_PARAMETER, path_parameter(self.out_dir));
        parameters.set_node_for_key(TARGET_PARAMETER, json![self.target.to_string()]);
        parameters.set_node_for_key(
            ALWAYS_GENERATE_OVERLOADS_PARAMETER,
            json![self.always_generate_overloads],
        );
        parameters
    }
}

/// Settings for the gas reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasReporterSettings<'a> {
    pub currency: &'a str,
}

impl<'a> GasReporterSettings<'a> {
    pub fn to_parameters(&self) -> Value {
        let mut parameters = empty_parameters();
        parameters.set_node_for_key(CURRENCY_PARAMETER, json![self.currency]);
        parameters
    }
}

/// Settings for the test runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestRunnerSettings {
    pub bail_on_first_failure: bool,
}

impl TestRunnerSettings {
    pub fn to_parameters(&self) -> Value {
        let mut parameters = empty_parameters();
        parameters.set_node_for_key(BAIL_PARAMETER, json![self.bail_on_first_failure]);
        parameters
    }
}

/// Settings for the documentation generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentationSettings<'a> {
    pub pages: DocsPages,
    pub output_dir: &'a Path,
    pub templates: &'a Path,
}

impl<'a> DocumentationSettings<'a> {
    pub fn to_parameters(&self) -> Value {
        let mut parameters = empty_parameters();
        parameters.set_node_for_key(PAGES_PARAMETER, json![self.pages.to_string()]);
        parameters.set_node_for_key(OUTPUT_DIR_PARAMETER, path_parameter(self.output_dir));
        parameters.set_node_for_key(TEMPLATES_PARAMETER, path_parameter(self.templates));
        parameters
    }
}

impl BuildConfiguration {
    pub fn compiler_settings(&self) -> CompilerSettings<'_> {
        CompilerSettings {
            version: self.compiler_version(),
            optimizer_enabled: self.optimizer_enabled(),
            optimizer_runs: self.optimizer_runs(),
            sources: self.sources_path(),
        }
    }

    pub fn type_binding_settings(&self) -> TypeBindingSettings<'_> {
        TypeBindingSettings {
            out_dir: self.type_output_dir(),
            target: self.type_target(),
            always_generate_overloads: self.type_always_generate_overloads(),
        }
    }

    pub fn gas_reporter_settings(&self) -> GasReporterSettings<'_> {
        GasReporterSettings {
            currency: self.gas_report_currency(),
        }
    }

    pub fn test_runner_settings(&self) -> TestRunnerSettings {
        TestRunnerSettings {
            bail_on_first_failure: self.test_bail_on_first_failure(),
        }
    }

    pub fn documentation_settings(&self) -> DocumentationSettings<'_> {
        DocumentationSettings {
            pages: self.docs_pages(),
            output_dir: self.docs_output_dir(),
            templates: self.docs_templates_dir(),
        }
    }
}
