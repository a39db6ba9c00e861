//! Misc tooling options

use deploy_meta::MiscOptions;
use deploy_meta::options::GAS_REPORTER_DISABLE_VAR;

use crate::env::EnvSnapshot;

pub struct MiscOptionsResolver;

impl MiscOptionsResolver {
    /// Defaults, with gas reporting off when the disable flag is set to anything non-empty.
    pub fn resolve(env: &EnvSnapshot) -> MiscOptions {
        let gas_reporter_enabled = !env.is_set(GAS_REPORTER_DISABLE_VAR);
        tracing::debug!(gas_reporter_enabled, "Resolved misc options");

        MiscOptions {
            gas_reporter_enabled,
            ..MiscOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_reporter_enabled_by_default() {
        assert!(MiscOptionsResolver::resolve(&EnvSnapshot::default()).gas_reporter_enabled);
    }

    #[test]
    fn test_any_value_disables_gas_reporter() {
        for value in ["1", "true", "false", "0"] {
            let env = EnvSnapshot::from_pairs([(GAS_REPORTER_DISABLE_VAR, value)]);
            assert!(!MiscOptionsResolver::resolve(&env).gas_reporter_enabled);
        }
    }

    #[test]
    fn test_empty_value_keeps_gas_reporter() {
        let env = EnvSnapshot::from_pairs([(GAS_REPORTER_DISABLE_VAR, "")]);
        assert!(MiscOptionsResolver::resolve(&env).gas_reporter_enabled);
    }
}
