//! Detect and fill in configuration fields missing from older config files.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};

pub const KNOWN_FIELDS: [&str; 4] = ["database", "user", "show_tips", "separator_char"];

fn as_mapping(content: &str) -> AppResult<Mapping> {
    let yaml: Value = serde_yaml::from_str(content)?;
    match yaml {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("configuration is not a YAML mapping".into())),
    }
}

/// Known fields absent from the given YAML text.
pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
    let map = as_mapping(content)?;
    Ok(KNOWN_FIELDS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Add every missing field with its default value.
///
/// Returns the new YAML text and the fields that were added; existing values
/// are kept as they are.
pub fn complete(content: &str) -> AppResult<(String, Vec<&'static str>)> {
    let mut map = as_mapping(content)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Config("unexpected default configuration".into())),
    };

    let mut added = Vec::new();
    for key in KNOWN_FIELDS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            let v = defaults.get(&k).cloned().unwrap_or(Value::Null);
            map.insert(k, v);
            added.push(key);
        }
    }

    Ok((serde_yaml::to_string(&Value::Mapping(map))?, added))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_fields() {
        let missing = missing_fields("database: a.sqlite\nuser: bob\n").unwrap();
        assert_eq!(missing, vec!["show_tips", "separator_char"]);
    }

    #[test]
    fn complete_keeps_existing_values() {
        let (yaml, added) = complete("database: a.sqlite\nshow_tips: false\n").unwrap();
        assert_eq!(added, vec!["user", "separator_char"]);

        let cfg = Config::from_yaml(&yaml).unwrap();
        assert_eq!(cfg.database, "a.sqlite");
        assert!(!cfg.show_tips);
        assert_eq!(cfg.separator_char, "-");
        assert!(missing_fields(&yaml).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_mapping_files() {
        assert!(missing_fields("- just\n- a list\n").is_err());
    }
}
