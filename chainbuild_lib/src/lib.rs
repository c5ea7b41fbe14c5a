//! # Chainbuild Lib
//!
//! `chainbuild_lib` loads and validates the build configuration of a smart-contract toolchain
//! and hands each external tool (compiler, type-binding generator, test runner, gas reporter,
//! coverage instrumenter, documentation generator) the settings it needs.
//!
//! ## Chainbuild Lib Design
//!
//! - [`config_file::load`] reads a configuration file once into an immutable
//!   [`BuildConfiguration`].
//! - Plugins named in the file resolve into an explicit list of [`Capability`] values.
//! - The [`BuildOrchestrator`] borrows the configuration and produces the parameter set for
//!   every enabled tool.

pub use self::capability::Capability;
pub use self::config_file::{load, load_and_verify, BuildConfiguration};
pub use self::error::{ChainbuildError, Malformation};
pub use self::orchestrator::{BuildOrchestrator, ToolInvocation};

pub mod capability;
pub mod config_file;
pub mod consumer_settings;
pub mod error;
mod json;
pub mod orchestrator;
pub mod targets;
