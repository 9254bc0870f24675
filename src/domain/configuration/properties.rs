//! Flat key/value view over the shell configuration file.

use std::collections::BTreeMap;

/// Dotted-key configuration, the shape the service client reads settings in.
///
/// Nested TOML tables and quoted dotted keys collapse into the same key space:
/// `[a.b] c = "x"` and `"a.b.c" = "x"` both resolve `a.b.c`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    entries: BTreeMap<String, String>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key, falling back to `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Set a key, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Build from a parsed TOML document.
    pub fn from_toml(table: &toml::Table) -> Self {
        let mut config = Self::new();
        flatten_into(&mut config, None, table);
        config
    }
}

fn flatten_into(config: &mut Configuration, prefix: Option<&str>, table: &toml::Table) {
    for (key, value) in table {
        let full_key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };

        match value {
            toml::Value::Table(nested) => flatten_into(config, Some(&full_key), nested),
            other => config.set(full_key, scalar_to_string(other)),
        }
    }
}

fn scalar_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(items) => {
            items.iter().map(scalar_to_string).collect::<Vec<_>>().join(",")
        }
        other => other.to_string(),
    }
}
