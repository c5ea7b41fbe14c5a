//! The module contains functions and a trait that simplify working with [`Value`] objects
//! that hold a build configuration. Keys may name nested members by separating the member
//! names with '/', for example `solidity/settings/optimizer/runs`.
use crate::error::ChainbuildError;
use serde_json::{Map, Value};

/// Add a '/' character as a prefix to a key.
///
/// The function converts a key into the JSON pointer form used by [`Value::pointer`] and
/// [`Value::pointer_mut`].
///
/// # Arguments
///
/// * `key` - The string slice containing the key to decorate.
fn json_path(key: &str) -> String {
    let mut jp = String::from("/");
    jp += key;
    jp
}

/// Pretty-print `value` using two space indentation.
///
/// # Arguments
///
/// * `value` - The JSON value to format.
pub fn pretty_print_json(value: &Value) -> Result<String, ChainbuildError> {
    let standard_json = format!("{value}");
    jsonxf::pretty_print(&standard_json).map_err(ChainbuildError::JSONFormat)
}

/// Trait for use with [`Value`] that adds keyed access to the members of JSON objects.
pub trait JSONMutate {
    fn borrow_value_for_key(&self, key: &str) -> Option<&Value>;
    fn set_node_for_key(&mut self, key: &str, node: Value);
    fn get_array_for_key(&self, key: &str) -> Option<&Vec<Value>>;
    fn get_str_for_key(&self, key: &str) -> Option<&str>;
    fn get_bool_for_key(&self, key: &str) -> Option<bool>;
    fn get_int_for_key(&self, key: &str) -> Option<i64>;
    fn contains_key(&self, key: &str) -> bool;
}

impl JSONMutate for Value {
    /// Return a reference to the [`Value`] stored for `key`, or `None` if the object has no
    /// member for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn borrow_value_for_key(&self, key: &str) -> Option<&Value> {
        self.pointer(&json_path(key))
    }

    /// Store `node` for `key`. Intermediate objects named by a nested key are created when
    /// they do not exist. Nothing is stored if an intermediate member exists but is not an
    /// object.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    /// * `node` - The [`Value`] object to use as the new value for `key`.
    fn set_node_for_key(&mut self, key: &str, node: Value) {
        if let Some(v) = self.pointer_mut(&json_path(key)) {
            *v = node;
            return;
        }

        let mut current = self;
        let mut names = key.split('/').peekable();
        while let Some(name) = names.next() {
            let map = match current.as_object_mut() {
                Some(m) => m,
                None => return,
            };

            if names.peek().is_none() {
                map.insert(String::from(name), node);
                return;
            }

            current = map
                .entry(String::from(name))
                .or_insert_with(|| Value::Object(Map::new()));
        }
    }

    /// Return a reference to the JSON array stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn get_array_for_key(&self, key: &str) -> Option<&Vec<Value>> {
        self.pointer(&json_path(key)).and_then(|v| v.as_array())
    }

    /// Return the text of the JSON string stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn get_str_for_key(&self, key: &str) -> Option<&str> {
        self.pointer(&json_path(key)).and_then(|v| v.as_str())
    }

    /// Return the boolean stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn get_bool_for_key(&self, key: &str) -> Option<bool> {
        self.pointer(&json_path(key)).and_then(|v| v.as_bool())
    }

    /// Return the i64 stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn get_int_for_key(&self, key: &str) -> Option<i64> {
        self.pointer(&json_path(key)).and_then(|v| v.as_i64())
    }

    /// Return true if the JSON object has a member for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The key for which to search.
    fn contains_key(&self, key: &str) -> bool {
        self.is_object() && self.borrow_value_for_key(key).is_some()
    }
}
