use serde::{Deserialize, Serialize};

/// Configuration for the differ.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Compare only the class's own fields, never its members.
    pub exclude_members: bool,
    /// Compare only the enum's own fields, never its items.
    pub exclude_items: bool,
}

impl DiffConfig {
    /// Compare top-level fields only.
    pub fn shallow() -> Self {
        Self {
            exclude_members: true,
            exclude_items: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_descends() {
        let c = DiffConfig::default();
        assert!(!c.exclude_members);
        assert!(!c.exclude_items);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let c: DiffConfig = serde_json::from_str(r#"{"exclude_members": true}"#).unwrap();
        assert!(c.exclude_members);
        assert!(!c.exclude_items);
        assert_eq!(serde_json::from_str::<DiffConfig>("{}").unwrap(), DiffConfig::default());
    }
}
