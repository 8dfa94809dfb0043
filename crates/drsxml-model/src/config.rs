//! Depositor identity written into every batch head.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DEPOSITOR_NAME: &str = "desres:desres";
pub const DEFAULT_DEPOSITOR_EMAIL: &str = "dl@designresearchsociety.org";
pub const DEFAULT_REGISTRANT: &str = "Digital Library";
pub const DEFAULT_PUBLISHER_NAME: &str = "Design Research Society";

/// Fixed identity values for a deposit run.
///
/// Fields missing from a configuration file keep their built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositorConfig {
    pub depositor_name: String,
    pub email_address: String,
    pub registrant: String,
    /// Publisher named in proceedings metadata.
    pub publisher_name: String,
}

impl Default for DepositorConfig {
    fn default() -> Self {
        Self {
            depositor_name: DEFAULT_DEPOSITOR_NAME.to_string(),
            email_address: DEFAULT_DEPOSITOR_EMAIL.to_string(),
            registrant: DEFAULT_REGISTRANT.to_string(),
            publisher_name: DEFAULT_PUBLISHER_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: DepositorConfig =
            serde_json::from_str(r#"{"registrant": "Test Registrant"}"#).expect("parse");
        assert_eq!(config.registrant, "Test Registrant");
        assert_eq!(config.depositor_name, DEFAULT_DEPOSITOR_NAME);
        assert_eq!(config.publisher_name, DEFAULT_PUBLISHER_NAME);
    }
}
