//! Tooling options carried alongside the resolved configuration

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Environment variable that turns gas reporting off when set.
pub const GAS_REPORTER_DISABLE_VAR: &str = "DISABLE_GAS_REPORTER";

/// Options for the test runner, gas reporter and type generator.
///
/// None of these affect the compiler, network or verification sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiscOptions {
    /// Account index used as `deployer` on every network
    pub deployer_account: u32,

    /// Test timeout in milliseconds; 0 disables the timeout
    pub test_timeout_ms: u64,

    pub gas_reporter_enabled: bool,

    pub typechain_out_dir: String,

    pub typechain_target: String,
}

impl Default for MiscOptions {
    fn default() -> Self {
        Self {
            deployer_account: 0,
            test_timeout_ms: 0,
            gas_reporter_enabled: true,
            typechain_out_dir: "build/types".to_string(),
            typechain_target: "ethers-v5".to_string(),
        }
    }
}

impl MiscOptions {
    /// Top-level sections these options own, with their rendered values.
    pub fn to_sections(&self) -> Vec<(&'static str, Value)> {
        vec![
            (
                "namedAccounts",
                json!({ "deployer": { "default": self.deployer_account } }),
            ),
            ("mocha", json!({ "timeout": self.test_timeout_ms })),
            (
                "gasReporter",
                json!({ "enabled": self.gas_reporter_enabled }),
            ),
            (
                "typechain",
                json!({
                    "outDir": self.typechain_out_dir,
                    "target": self.typechain_target,
                }),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MiscOptions::default();
        assert!(options.gas_reporter_enabled);
        assert_eq!(options.test_timeout_ms, 0);
        assert_eq!(options.typechain_target, "ethers-v5");
    }

    #[test]
    fn test_sections() {
        let sections = MiscOptions::default().to_sections();
        let keys: Vec<&str> = sections.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["namedAccounts", "mocha", "gasReporter", "typechain"]);
        assert_eq!(sections[0].1["deployer"]["default"], 0);
        assert_eq!(sections[3].1["outDir"], "build/types");
    }
}
