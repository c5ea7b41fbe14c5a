//! The `config_file` module contains code for reading a Chainbuild configuration file.
//! The configuration file is a JSON object that groups the settings for each external tool
//! of the contract toolchain under its own member:
//!
//! ```json
//! {
//!     "plugins": ["toolbox", "docgen"],
//!     "solidity": {
//!         "version": "0.8.24",
//!         "settings": { "optimizer": { "enabled": true, "runs": 10000000 } }
//!     },
//!     "paths": { "sources": "./contracts" },
//!     "gasReporter": { "currency": "USD" },
//!     "typechain": { "outDir": "typechain-types", "target": "ethers-v6", "alwaysGenerateOverloads": false },
//!     "mocha": { "bail": true },
//!     "docgen": { "pages": "files", "outputDir": "docs", "templates": "docs/templates" }
//! }
//! ```
//!
//! Every key except `plugins` is required.
use crate::capability::{resolve_capabilities, Capability, Plugin, PLUGINS_KEY};
use crate::error::{ChainbuildError, Malformation};
use crate::json::*;
use crate::targets::{DocsPages, TypeTarget, DOCS_PAGES_KEY, TYPE_TARGET_KEY};
use serde_json::{json, Map, Value};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use versions::SemVer;

/// The extension used for chainbuild configuration files.
pub static CONFIG_FILE_EXTENSION: &str = "json";

/// The file name the command line tool looks for when no configuration file is named.
pub static DEFAULT_CONFIG_FILE_NAME: &str = "chainbuild.config.json";

/// The key for the compiler version.
pub static COMPILER_VERSION_KEY: &str = "solidity/version";

/// The key for the boolean that turns the optimizer on.
pub static OPTIMIZER_ENABLED_KEY: &str = "solidity/settings/optimizer/enabled";

/// The key for the optimizer run count.
pub static OPTIMIZER_RUNS_KEY: &str = "solidity/settings/optimizer/runs";

/// The key for the contract source directory.
pub static SOURCES_KEY: &str = "paths/sources";

/// The key for the gas report currency code.
pub static GAS_REPORT_CURRENCY_KEY: &str = "gasReporter/currency";

/// The key for the type binding output directory.
pub static TYPE_OUTPUT_DIR_KEY: &str = "typechain/outDir";

/// The key for the boolean that asks for overload variants in the type bindings.
pub static TYPE_ALWAYS_GENERATE_OVERLOADS_KEY: &str = "typechain/alwaysGenerateOverloads";

/// The key for the boolean that stops the test runner after the first failure.
pub static TEST_BAIL_KEY: &str = "mocha/bail";

/// The key for the documentation output directory.
pub static DOCS_OUTPUT_DIR_KEY: &str = "docgen/outputDir";

/// The key for the documentation template directory.
pub static DOCS_TEMPLATES_KEY: &str = "docgen/templates";

/// Top level members that group the settings of one tool.
static SECTION_KEYS: [&str; 6] = [
    "solidity",
    "paths",
    "gasReporter",
    "typechain",
    "mocha",
    "docgen",
];

/// Return every key a configuration must contain.
pub fn required_keys() -> Vec<&'static str> {
    vec![
        COMPILER_VERSION_KEY,
        OPTIMIZER_ENABLED_KEY,
        OPTIMIZER_RUNS_KEY,
        SOURCES_KEY,
        GAS_REPORT_CURRENCY_KEY,
        TYPE_OUTPUT_DIR_KEY,
        TYPE_TARGET_KEY,
        TYPE_ALWAYS_GENERATE_OVERLOADS_KEY,
        TEST_BAIL_KEY,
        DOCS_PAGES_KEY,
        DOCS_OUTPUT_DIR_KEY,
        DOCS_TEMPLATES_KEY,
    ]
}

/// The validated settings for every tool in the contract toolchain.
///
/// A `BuildConfiguration` is built once by [`load`] (or one of the `from_*` constructors) and
/// is read-only afterwards: it has accessors but no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfiguration {
    compiler_version: String,
    optimizer_enabled: bool,
    optimizer_runs: u64,
    sources_path: PathBuf,
    gas_report_currency: String,
    type_output_dir: PathBuf,
    type_target: TypeTarget,
    type_always_generate_overloads: bool,
    test_bail_on_first_failure: bool,
    docs_pages: DocsPages,
    docs_output_dir: PathBuf,
    docs_templates_dir: PathBuf,
    plugins: Vec<Plugin>,
}

/// Load and validate the configuration file at `config_file`.
///
/// # Arguments
///
/// * `config_file` - The path to the configuration file in the file system.
pub fn load<P: AsRef<Path>>(config_file: P) -> Result<BuildConfiguration, ChainbuildError> {
    BuildConfiguration::new_from_file(config_file.as_ref())
}

/// Load the configuration file at `config_file` and check that the input directories it names
/// exist. Relative paths resolve against the directory holding the configuration file.
///
/// # Arguments
///
/// * `config_file` - The path to the configuration file in the file system.
pub fn load_and_verify<P: AsRef<Path>>(
    config_file: P,
) -> Result<BuildConfiguration, ChainbuildError> {
    let config_file = config_file.as_ref();
    let configuration = BuildConfiguration::new_from_file(config_file)?;

    let source_name = config_file.display().to_string();
    configuration.verify_paths(base_directory_of(config_file), &source_name)?;

    Ok(configuration)
}

/// Return the directory relative paths in `config_file` resolve against. A bare file name
/// resolves against the current directory.
fn base_directory_of(config_file: &Path) -> &Path {
    match config_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

impl BuildConfiguration {
    /// Create a new configuration by loading a JSON file.  The file must have the extension
    /// ".json".
    ///
    /// # Arguments
    ///
    /// * `config_file` - The path to the configuration file in the file system.
    pub fn new_from_file(config_file: &Path) -> Result<BuildConfiguration, ChainbuildError> {
        let source_name = config_file.display().to_string();

        if config_file.extension() != Some(OsStr::new(CONFIG_FILE_EXTENSION)) {
            return Err(ChainbuildError::ConfigFileBadExtension(source_name));
        }

        let text = std::fs::read_to_string(config_file)?;
        log::debug!("Read {} bytes of configuration from {}", text.len(), source_name);

        BuildConfiguration::from_json_str(&text, &source_name)
    }

    /// Create a new configuration from JSON text.
    ///
    /// # Arguments
    ///
    /// * `text` - The JSON text.
    /// * `source_name` - The name reported in errors, usually the file name.
    pub fn from_json_str(
        text: &str,
        source_name: &str,
    ) -> Result<BuildConfiguration, ChainbuildError> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            ChainbuildError::MalformedConfiguration(
                String::from(source_name),
                Malformation::Syntax(e.to_string()),
            )
        })?;

        BuildConfiguration::from_json_value(&value, source_name)
    }

    /// Create a new configuration from a parsed JSON value.
    ///
    /// # Arguments
    ///
    /// * `value` - The JSON object holding the configuration.
    /// * `source_name` - The name reported in errors, usually the file name.
    pub fn from_json_value(
        value: &Value,
        source_name: &str,
    ) -> Result<BuildConfiguration, ChainbuildError> {
        BuildConfiguration::validate(value).map_err(|m| {
            ChainbuildError::MalformedConfiguration(String::from(source_name), m)
        })
    }

    fn validate(value: &Value) -> Result<BuildConfiguration, Malformation> {
        let map = value.as_object().ok_or(Malformation::NotAnObject)?;

        for (key, node) in map {
            let known = SECTION_KEYS.contains(&key.as_str()) || key == PLUGINS_KEY;
            if !known {
                log::warn!("Ignoring unrecognized configuration key {}", key);
            } else if SECTION_KEYS.contains(&key.as_str()) && !node.is_object() {
                return Err(Malformation::WrongType {
                    key: key.clone(),
                    expected: "an object",
                });
            }
        }

        for key in required_keys() {
            if let Some(parent) = non_object_parent(value, key) {
                return Err(wrong_type(&parent, "an object"));
            }
        }

        let missing_keys: Vec<String> = required_keys()
            .into_iter()
            .filter(|k| !value.contains_key(k))
            .map(String::from)
            .collect();

        if !missing_keys.is_empty() {
            return Err(Malformation::MissingKeys(missing_keys));
        }

        let compiler_version = required_str(value, COMPILER_VERSION_KEY)?;
        if SemVer::new(compiler_version).is_none() {
            return Err(unsupported(COMPILER_VERSION_KEY, compiler_version));
        }

        let gas_report_currency = required_str(value, GAS_REPORT_CURRENCY_KEY)?;
        let currency_code = gas_report_currency.len() == 3
            && gas_report_currency.chars().all(|c| c.is_ascii_uppercase());
        if !currency_code {
            return Err(unsupported(GAS_REPORT_CURRENCY_KEY, gas_report_currency));
        }

        let plugins = if value.contains_key(PLUGINS_KEY) {
            let names = value
                .get_array_for_key(PLUGINS_KEY)
                .ok_or_else(|| wrong_type(PLUGINS_KEY, "an array of plugin names"))?;
            plugins_from_names(names)?
        } else {
            Vec::new()
        };

        let configuration = BuildConfiguration {
            compiler_version: String::from(compiler_version),
            optimizer_enabled: required_bool(value, OPTIMIZER_ENABLED_KEY)?,
            optimizer_runs: required_count(value, OPTIMIZER_RUNS_KEY)?,
            sources_path: required_path(value, SOURCES_KEY)?,
            gas_report_currency: String::from(gas_report_currency),
            type_output_dir: required_path(value, TYPE_OUTPUT_DIR_KEY)?,
            type_target: TypeTarget::from_str(required_str(value, TYPE_TARGET_KEY)?)?,
            type_always_generate_overloads: required_bool(
                value,
                TYPE_ALWAYS_GENERATE_OVERLOADS_KEY,
            )?,
            test_bail_on_first_failure: required_bool(value, TEST_BAIL_KEY)?,
            docs_pages: DocsPages::from_str(required_str(value, DOCS_PAGES_KEY)?)?,
            docs_output_dir: required_path(value, DOCS_OUTPUT_DIR_KEY)?,
            docs_templates_dir: required_path(value, DOCS_TEMPLATES_KEY)?,
            plugins,
        };

        log::debug!(
            "Loaded configuration for compiler {} with {} plugin(s)",
            configuration.compiler_version,
            configuration.plugins.len()
        );

        Ok(configuration)
    }

    /// The default configuration written by `chainbuild init`.
    pub fn template() -> BuildConfiguration {
        BuildConfiguration {
            compiler_version: String::from("0.8.24"),
            optimizer_enabled: true,
            optimizer_runs: 10_000_000,
            sources_path: PathBuf::from("./contracts"),
            gas_report_currency: String::from("USD"),
            type_output_dir: PathBuf::from("typechain-types"),
            type_target: TypeTarget::EthersV6,
            type_always_generate_overloads: false,
            test_bail_on_first_failure: true,
            docs_pages: DocsPages::Files,
            docs_output_dir: PathBuf::from("docs"),
            docs_templates_dir: PathBuf::from("docs/templates"),
            plugins: vec![Plugin::Toolbox, Plugin::DocGen],
        }
    }

    pub fn compiler_version(&self) -> &str {
        &self.compiler_version
    }

    pub fn optimizer_enabled(&self) -> bool {
        self.optimizer_enabled
    }

    pub fn optimizer_runs(&self) -> u64 {
        self.optimizer_runs
    }

    pub fn sources_path(&self) -> &Path {
        &self.sources_path
    }

    pub fn gas_report_currency(&self) -> &str {
        &self.gas_report_currency
    }

    pub fn type_output_dir(&self) -> &Path {
        &self.type_output_dir
    }

    pub fn type_target(&self) -> TypeTarget {
        self.type_target
    }

    pub fn type_always_generate_overloads(&self) -> bool {
        self.type_always_generate_overloads
    }

    pub fn test_bail_on_first_failure(&self) -> bool {
        self.test_bail_on_first_failure
    }

    pub fn docs_pages(&self) -> DocsPages {
        self.docs_pages
    }

    pub fn docs_output_dir(&self) -> &Path {
        &self.docs_output_dir
    }

    pub fn docs_templates_dir(&self) -> &Path {
        &self.docs_templates_dir
    }

    /// The plugins listed in the configuration, in file order.
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// The built-in capabilities plus those the plugins provide.
    pub fn capabilities(&self) -> Vec<Capability> {
        resolve_capabilities(&self.plugins)
    }

    /// Check that the input directories named by the configuration exist. Output directories
    /// are created by the tools that write them and are not checked.
    ///
    /// # Arguments
    ///
    /// * `base_directory` - The directory relative paths resolve against.
    /// * `source_name` - The name reported in errors, usually the configuration file name.
    pub fn verify_paths(
        &self,
        base_directory: &Path,
        source_name: &str,
    ) -> Result<(), ChainbuildError> {
        let inputs = [
            (SOURCES_KEY, &self.sources_path),
            (DOCS_TEMPLATES_KEY, &self.docs_templates_dir),
        ];

        for (key, path) in inputs {
            let resolved = if path.is_absolute() {
                path.clone()
            } else {
                base_directory.join(path)
            };

            if !resolved.is_dir() {
                return Err(ChainbuildError::MalformedConfiguration(
                    String::from(source_name),
                    Malformation::PathNotFound {
                        key: String::from(key),
                        path: resolved.display().to_string(),
                    },
                ));
            }
        }

        Ok(())
    }

    /// Convert the configuration to the JSON layout it was loaded from.
    pub fn to_json(&self) -> Value {
        let mut json_value = Value::Object(Map::new());

        let plugin_names: Vec<String> = self.plugins.iter().map(|p| p.to_string()).collect();
        json_value.set_node_for_key(PLUGINS_KEY, json![plugin_names]);

        json_value.set_node_for_key(COMPILER_VERSION_KEY, json![self.compiler_version]);
        json_value.set_node_for_key(OPTIMIZER_ENABLED_KEY, json![self.optimizer_enabled]);
        json_value.set_node_for_key(OPTIMIZER_RUNS_KEY, json![self.optimizer_runs]);
        json_value.set_node_for_key(SOURCES_KEY, path_node(&self.sources_path));
        json_value.set_node_for_key(GAS_REPORT_CURRENCY_KEY, json![self.gas_report_currency]);
        json_value.set_node_for_key(TYPE_OUTPUT_DIR_KEY, path_node(&self.type_output_dir));
        json_value.set_node_for_key(TYPE_TARGET_KEY, json![self.type_target.to_string()]);
        json_value.set_node_for_key(
            TYPE_ALWAYS_GENERATE_OVERLOADS_KEY,
            json![self.type_always_generate_overloads],
        );
        json_value.set_node_for_key(TEST_BAIL_KEY, json![self.test_bail_on_first_failure]);
        json_value.set_node_for_key(DOCS_PAGES_KEY, json![self.docs_pages.to_string()]);
        json_value.set_node_for_key(DOCS_OUTPUT_DIR_KEY, path_node(&self.docs_output_dir));
        json_value.set_node_for_key(DOCS_TEMPLATES_KEY, path_node(&self.docs_templates_dir));

        json_value
    }

    /// Write the configuration in JSON form to the path at `config_file`, creating the parent
    /// directory if needed.
    ///
    /// # Arguments
    ///
    /// * `config_file` - The path in the file system to write the configuration file.
    pub fn write_to_file_as_json(&self, config_file: &Path) -> Result<(), ChainbuildError> {
        if let Some(parent) = config_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut f = std::fs::File::create(config_file)?;
        self.write_to_stream_as_json(&mut f)?;

        log::info!("Wrote configuration to {}", config_file.display());
        Ok(())
    }

    /// Convert the configuration to JSON and write the JSON to `stream`.
    ///
    /// # Arguments
    ///
    /// * `stream` - The stream that will receive the JSON.
    pub fn write_to_stream_as_json(&self, stream: &mut dyn Write) -> Result<(), ChainbuildError> {
        let pretty_json = pretty_print_json(&self.to_json())?;
        writeln!(stream, "{pretty_json}")?;
        Ok(())
    }
}

fn unsupported(key: &str, value: &str) -> Malformation {
    Malformation::UnsupportedValue {
        key: String::from(key),
        value: String::from(value),
    }
}

fn wrong_type(key: &str, expected: &'static str) -> Malformation {
    Malformation::WrongType {
        key: String::from(key),
        expected,
    }
}

/// Return the first member on the way to `key` that exists but is not an object.
fn non_object_parent(value: &Value, key: &str) -> Option<String> {
    let names: Vec<&str> = key.split('/').collect();

    (1..names.len())
        .map(|end| names[..end].join("/"))
        .find(|parent| {
            value
                .borrow_value_for_key(parent)
                .map_or(false, |node| !node.is_object())
        })
}

fn path_node(path: &Path) -> Value {
    json![path.to_string_lossy()]
}

fn required_str<'a>(value: &'a Value, key: &str) -> Result<&'a str, Malformation> {
    value
        .get_str_for_key(key)
        .ok_or_else(|| wrong_type(key, "a string"))
}

fn required_bool(value: &Value, key: &str) -> Result<bool, Malformation> {
    value
        .get_bool_for_key(key)
        .ok_or_else(|| wrong_type(key, "a boolean"))
}

// Negative integers get their own error so the message can show the value.
fn required_count(value: &Value, key: &str) -> Result<u64, Malformation> {
    let node = value
        .borrow_value_for_key(key)
        .ok_or_else(|| wrong_type(key, "a non-negative integer"))?;

    if let Some(count) = node.as_u64() {
        return Ok(count);
    }

    match value.get_int_for_key(key) {
        Some(negative) => Err(Malformation::Negative {
            key: String::from(key),
            value: negative,
        }),
        None => Err(wrong_type(key, "a non-negative integer")),
    }
}

fn required_path(value: &Value, key: &str) -> Result<PathBuf, Malformation> {
    let text = value
        .get_str_for_key(key)
        .ok_or_else(|| wrong_type(key, "a path string"))?;

    if text.trim().is_empty() {
        return Err(Malformation::EmptyPath(String::from(key)));
    }

    Ok(PathBuf::from(text))
}

fn plugins_from_names(names: &[Value]) -> Result<Vec<Plugin>, Malformation> {
    names
        .iter()
        .map(|n| {
            let name = n
                .as_str()
                .ok_or_else(|| wrong_type(PLUGINS_KEY, "an array of plugin names"))?;
            Plugin::from_str(name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_configuration() -> Value {
        json!({
            "plugins": ["toolbox", "docgen"],
            "solidity": {
                "version": "0.8.24",
                "settings": { "optimizer": { "enabled": true, "runs": 10000000 } }
            },
            "paths": { "sources": "./contracts" },
            "gasReporter": { "currency": "USD" },
            "typechain": {
                "outDir": "typechain-types",
                "target": "ethers-v6",
                "alwaysGenerateOverloads": false
            },
            "mocha": { "bail": true },
            "docgen": { "pages": "files", "outputDir": "docs", "templates": "docs/templates" }
        })
    }

    fn remove_key(value: &mut Value, section: &str, key: &str) {
        value[section].as_object_mut().unwrap().remove(key);
    }

    fn malformation_of(value: &Value) -> Malformation {
        match BuildConfiguration::from_json_value(value, "test.json") {
            Err(ChainbuildError::MalformedConfiguration(source, m)) => {
                assert_eq!(source, "test.json");
                m
            }
            Err(e) => panic!("Unexpected error kind: {e}"),
            Ok(_) => panic!("Configuration unexpectedly loaded"),
        }
    }

    #[test]
    fn test_load_valid_configuration() {
        let configuration =
            BuildConfiguration::from_json_value(&valid_configuration(), "test.json").unwrap();

        assert_eq!(configuration.compiler_version(), "0.8.24");
        assert!(configuration.optimizer_enabled());
        assert_eq!(configuration.optimizer_runs(), 10000000);
        assert_eq!(configuration.sources_path(), Path::new("./contracts"));
        assert_eq!(configuration.gas_report_currency(), "USD");
        assert_eq!(configuration.type_output_dir(), Path::new("typechain-types"));
        assert_eq!(configuration.type_target(), TypeTarget::EthersV6);
        assert!(!configuration.type_always_generate_overloads());
        assert!(configuration.test_bail_on_first_failure());
        assert_eq!(configuration.docs_pages(), DocsPages::Files);
        assert_eq!(configuration.docs_output_dir(), Path::new("docs"));
        assert_eq!(configuration.docs_templates_dir(), Path::new("docs/templates"));
        assert_eq!(configuration.plugins(), &[Plugin::Toolbox, Plugin::DocGen]);
    }

    #[test]
    fn test_template_matches_valid_configuration() {
        let configuration =
            BuildConfiguration::from_json_value(&valid_configuration(), "test.json").unwrap();
        assert_eq!(configuration, BuildConfiguration::template());
    }

    #[test]
    fn test_load_is_idempotent() {
        let text = valid_configuration().to_string();
        let first = BuildConfiguration::from_json_str(&text, "test.json").unwrap();
        let second = BuildConfiguration::from_json_str(&text, "test.json").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_sources_path() {
        let mut value = valid_configuration();
        remove_key(&mut value, "paths", "sources");

        assert_eq!(
            malformation_of(&value),
            Malformation::MissingKeys(vec![String::from("paths/sources")])
        );
    }

    #[test]
    fn test_missing_section_reports_every_key() {
        let mut value = valid_configuration();
        value.as_object_mut().unwrap().remove("docgen");

        assert_eq!(
            malformation_of(&value),
            Malformation::MissingKeys(vec![
                String::from("docgen/pages"),
                String::from("docgen/outputDir"),
                String::from("docgen/templates"),
            ])
        );
    }

    #[test]
    fn test_bail_false_is_not_absent() {
        let mut value = valid_configuration();
        value.set_node_for_key(TEST_BAIL_KEY, json!(false));

        let configuration = BuildConfiguration::from_json_value(&value, "test.json").unwrap();
        assert!(!configuration.test_bail_on_first_failure());

        remove_key(&mut value, "mocha", "bail");
        assert_eq!(
            malformation_of(&value),
            Malformation::MissingKeys(vec![String::from("mocha/bail")])
        );
    }

    #[test]
    fn test_negative_optimizer_runs() {
        let mut value = valid_configuration();
        value.set_node_for_key(OPTIMIZER_RUNS_KEY, json!(-1));

        assert_eq!(
            malformation_of(&value),
            Malformation::Negative {
                key: String::from(OPTIMIZER_RUNS_KEY),
                value: -1,
            }
        );
    }

    #[test]
    fn test_non_integer_optimizer_runs() {
        for runs in [json!(200.5), json!("200"), json!(null), json!(true)] {
            let mut value = valid_configuration();
            value.set_node_for_key(OPTIMIZER_RUNS_KEY, runs);

            assert_eq!(
                malformation_of(&value),
                Malformation::WrongType {
                    key: String::from(OPTIMIZER_RUNS_KEY),
                    expected: "a non-negative integer",
                }
            );
        }
    }

    #[test]
    fn test_zero_optimizer_runs() {
        let mut value = valid_configuration();
        value.set_node_for_key(OPTIMIZER_RUNS_KEY, json!(0));

        let configuration = BuildConfiguration::from_json_value(&value, "test.json").unwrap();
        assert_eq!(configuration.optimizer_runs(), 0);
    }

    #[test]
    fn test_empty_paths() {
        for key in [
            SOURCES_KEY,
            TYPE_OUTPUT_DIR_KEY,
            DOCS_OUTPUT_DIR_KEY,
            DOCS_TEMPLATES_KEY,
        ] {
            let mut value = valid_configuration();
            value.set_node_for_key(key, json!(""));

            assert_eq!(
                malformation_of(&value),
                Malformation::EmptyPath(String::from(key))
            );
        }
    }

    #[test]
    fn test_wrong_type_for_boolean() {
        let mut value = valid_configuration();
        value.set_node_for_key(OPTIMIZER_ENABLED_KEY, json!("true"));

        assert_eq!(
            malformation_of(&value),
            Malformation::WrongType {
                key: String::from(OPTIMIZER_ENABLED_KEY),
                expected: "a boolean",
            }
        );
    }

    #[test]
    fn test_section_that_is_not_an_object() {
        let mut value = valid_configuration();
        value.set_node_for_key("paths", json!("./contracts"));

        assert_eq!(
            malformation_of(&value),
            Malformation::WrongType {
                key: String::from("paths"),
                expected: "an object",
            }
        );
    }

    #[test]
    fn test_nested_member_that_is_not_an_object() {
        let mut value = valid_configuration();
        value.set_node_for_key("solidity/settings", json!(5));

        assert_eq!(
            malformation_of(&value),
            Malformation::WrongType {
                key: String::from("solidity/settings"),
                expected: "an object",
            }
        );
    }

    #[test]
    fn test_plugins_that_are_not_an_array() {
        let mut value = valid_configuration();
        value.set_node_for_key(PLUGINS_KEY, json!("toolbox"));

        assert_eq!(
            malformation_of(&value),
            Malformation::WrongType {
                key: String::from(PLUGINS_KEY),
                expected: "an array of plugin names",
            }
        );
    }

    #[test]
    fn test_unsupported_values() {
        let cases = [
            (COMPILER_VERSION_KEY, "latest"),
            (GAS_REPORT_CURRENCY_KEY, "usd"),
            (TYPE_TARGET_KEY, "viem"),
            (DOCS_PAGES_KEY, "contracts"),
        ];

        for (key, text) in cases {
            let mut value = valid_configuration();
            value.set_node_for_key(key, json!(text));

            assert_eq!(
                malformation_of(&value),
                Malformation::UnsupportedValue {
                    key: String::from(key),
                    value: String::from(text),
                }
            );
        }
    }

    #[test]
    fn test_plugins_are_optional() {
        let mut value = valid_configuration();
        value.as_object_mut().unwrap().remove(PLUGINS_KEY);

        let configuration = BuildConfiguration::from_json_value(&value, "test.json").unwrap();
        assert!(configuration.plugins().is_empty());
        assert_eq!(configuration.capabilities(), Capability::built_in());
    }

    #[test]
    fn test_unknown_plugin() {
        let mut value = valid_configuration();
        value.set_node_for_key(PLUGINS_KEY, json!(["toolbox", "deploy"]));

        assert_eq!(
            malformation_of(&value),
            Malformation::UnsupportedValue {
                key: String::from(PLUGINS_KEY),
                value: String::from("deploy"),
            }
        );
    }

    #[test]
    fn test_unknown_top_level_key_is_ignored() {
        let mut value = valid_configuration();
        value.set_node_for_key("networks", json!({"hardhat": {}}));

        assert!(BuildConfiguration::from_json_value(&value, "test.json").is_ok());
    }

    #[test]
    fn test_syntax_error() {
        let result = BuildConfiguration::from_json_str("{ \"solidity\": ", "broken.json");
        match result {
            Err(ChainbuildError::MalformedConfiguration(source, Malformation::Syntax(_))) => {
                assert_eq!(source, "broken.json")
            }
            _ => panic!("Expected a syntax error"),
        }
    }

    #[test]
    fn test_top_level_array() {
        assert_eq!(malformation_of(&json!([])), Malformation::NotAnObject);
    }

    #[test]
    fn test_to_json_reloads_to_equal_configuration() {
        let configuration = BuildConfiguration::template();
        let reloaded =
            BuildConfiguration::from_json_value(&configuration.to_json(), "test.json").unwrap();
        assert_eq!(configuration, reloaded);
    }

    #[test]
    fn test_load_from_file() {
        let directory = tempfile::tempdir().unwrap();
        let config_file = directory.path().join("chainbuild.config.json");
        std::fs::write(&config_file, valid_configuration().to_string()).unwrap();

        let first = load(&config_file).unwrap();
        let second = load(&config_file).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.optimizer_runs(), 10000000);
    }

    #[test]
    fn test_load_bad_extension() {
        let directory = tempfile::tempdir().unwrap();
        let config_file = directory.path().join("chainbuild.config.toml");
        std::fs::write(&config_file, valid_configuration().to_string()).unwrap();

        assert!(matches!(
            load(&config_file),
            Err(ChainbuildError::ConfigFileBadExtension(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let directory = tempfile::tempdir().unwrap();
        let config_file = directory.path().join("absent.json");

        assert!(matches!(load(&config_file), Err(ChainbuildError::IO(_))));
    }

    #[test]
    fn test_load_and_verify() {
        let directory = tempfile::tempdir().unwrap();
        let config_file = directory.path().join("chainbuild.config.json");
        std::fs::write(&config_file, valid_configuration().to_string()).unwrap();

        let error = load_and_verify(&config_file).unwrap_err();
        match &error {
            ChainbuildError::MalformedConfiguration(source, _) => {
                assert_eq!(source, &config_file.display().to_string())
            }
            _ => panic!("Expected a malformed configuration error"),
        }
        assert!(error
            .to_string()
            .starts_with(&format!("Malformed configuration in {}:", config_file.display())));
        assert_eq!(
            error.malformation(),
            Some(&Malformation::PathNotFound {
                key: String::from(SOURCES_KEY),
                path: directory.path().join("./contracts").display().to_string(),
            })
        );

        std::fs::create_dir(directory.path().join("contracts")).unwrap();
        std::fs::create_dir_all(directory.path().join("docs/templates")).unwrap();

        assert!(load_and_verify(&config_file).is_ok());
    }

    #[test]
    fn test_base_directory_of_bare_file_name() {
        assert_eq!(
            base_directory_of(Path::new("chainbuild.config.json")),
            Path::new(".")
        );
        assert_eq!(base_directory_of(Path::new("sub/x.json")), Path::new("sub"));
    }

    #[test]
    fn test_verify_paths_names_the_configuration_file() {
        let directory = tempfile::tempdir().unwrap();
        let configuration = BuildConfiguration::template();

        let error = configuration
            .verify_paths(directory.path(), "chainbuild.config.json")
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            format!(
                "Malformed configuration in chainbuild.config.json: path {} for key paths/sources does not exist",
                directory.path().join("./contracts").display()
            )
        );
    }

    #[test]
    fn test_write_to_file_and_reload() {
        let directory = tempfile::tempdir().unwrap();
        let config_file = directory.path().join("nested/chainbuild.config.json");

        let configuration = BuildConfiguration::template();
        configuration.write_to_file_as_json(&config_file).unwrap();

        assert_eq!(load(&config_file).unwrap(), configuration);
    }

    #[test]
    fn test_shared_across_threads() {
        let configuration = BuildConfiguration::template();

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert_eq!(configuration.optimizer_runs(), 10_000_000);
                    assert_eq!(configuration.sources_path(), Path::new("./contracts"));
                });
            }
        });
    }
}
