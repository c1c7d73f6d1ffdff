use std::{fs, path::Path};

use serde_yaml::Value;

/// Reads and parses a YAML file. Any failure is a silent `None`; callers fall
/// back to their defaults.
pub fn load_yaml(path: &Path) -> Option<Value> {
    let txt = fs::read_to_string(path).ok()?;
    serde_yaml::from_str(&txt).ok()
}
