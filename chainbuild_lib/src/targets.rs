//! The `targets` module defines the enumerated values accepted by the type-binding generator and
//! the documentation generator.

use crate::error::Malformation;
use std::fmt;
use std::str::FromStr;

/// The key in the configuration file for the type-binding target.
pub static TYPE_TARGET_KEY: &str = "typechain/target";

/// The key in the configuration file for the documentation page grouping.
pub static DOCS_PAGES_KEY: &str = "docgen/pages";

/// The flavor of typed bindings the type-binding generator emits.
#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub enum TypeTarget {
    /// Bindings for ethers.js version 5.
    EthersV5,

    /// Bindings for ethers.js version 6.
    EthersV6,

    /// Bindings for web3.js version 1.
    Web3V1,

    /// Bindings for Truffle version 5.
    TruffleV5,
}

impl FromStr for TypeTarget {
    type Err = Malformation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ethers-v5" => Ok(TypeTarget::EthersV5),
            "ethers-v6" => Ok(TypeTarget::EthersV6),
            "web3-v1" => Ok(TypeTarget::Web3V1),
            "truffle-v5" => Ok(TypeTarget::TruffleV5),
            _ => Err(Malformation::UnsupportedValue {
                key: String::from(TYPE_TARGET_KEY),
                value: String::from(s),
            }),
        }
    }
}

impl fmt::Display for TypeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TypeTarget::EthersV5 => "ethers-v5",
            TypeTarget::EthersV6 => "ethers-v6",
            TypeTarget::Web3V1 => "web3-v1",
            TypeTarget::TruffleV5 => "truffle-v5",
        };

        write!(f, "{}", text)
    }
}

/// How the documentation generator groups contract documentation into pages.
#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub enum DocsPages {
    /// Everything on a single page.
    Single,

    /// One page per documented item (contract, library, interface).
    Items,

    /// One page per source file.
    Files,
}

impl FromStr for DocsPages {
    type Err = Malformation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(DocsPages::Single),
            "items" => Ok(DocsPages::Items),
            "files" => Ok(DocsPages::Files),
            _ => Err(Malformation::UnsupportedValue {
                key: String::from(DOCS_PAGES_KEY),
                value: String::from(s),
            }),
        }
    }
}

impl fmt::Display for DocsPages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DocsPages::Single => "single",
            DocsPages::Items => "items",
            DocsPages::Files => "files",
        };

        write!(f, "{}", text)
    }
}
