use std::collections::BTreeMap;

use deploy_core::compiler::EXTRA_COMPILER_VAR;
use deploy_core::{BaseFragment, ConfigResolver, CredentialResolver, EnvSnapshot};
use deploy_meta::compiler::INTERFACE_TESTER_FILE;
use deploy_meta::explorer::is_builtin_chain;
use deploy_meta::network::{FORK_FLAG_VAR, LOCAL_NETWORK};
use proptest::prelude::*;

/// Variables the resolvers read, plus one they never touch.
const VARS: &[&str] = &[
    "INFURA_KEY",
    "SHOULD_FORK",
    "MAINNET_PRIVKEY",
    "DEVNET_PRIVKEY",
    "ETHERSCAN_API_KEY",
    "fogISCAN_API_KEY",
    "NOVA_fogISCAN_API_KEY",
    "INTERFACE_TESTER_SOLC_VERSION",
    "DISABLE_GAS_REPORTER",
    "UNRELATED",
];

fn env_strategy() -> impl Strategy<Value = EnvSnapshot> {
    prop::collection::btree_map(prop::sample::select(VARS), "\\PC{0,12}", 0..VARS.len()).prop_map(
        |vars: BTreeMap<&str, String>| EnvSnapshot::from_pairs(vars),
    )
}

fn env_without(var: &'static str) -> impl Strategy<Value = EnvSnapshot> {
    env_strategy().prop_map(move |env| {
        let pairs: Vec<(String, String)> = VARS
            .iter()
            .filter(|name| **name != var)
            .filter_map(|name| env.get(name).map(|v| (name.to_string(), v.to_string())))
            .collect();
        EnvSnapshot::from_pairs(pairs)
    })
}

proptest! {
    #[test]
    fn single_compiler_without_extra_version(env in env_without(EXTRA_COMPILER_VAR)) {
        let config = ConfigResolver::resolve_with_base(&BaseFragment::default(), &env);
        prop_assert_eq!(config.compiler_set().compilers().len(), 1);
        prop_assert!(config.compiler_set().overrides().is_empty());
    }

    #[test]
    fn extra_version_adds_compiler_and_override(
        env in env_without(EXTRA_COMPILER_VAR),
        version in "\\PC{1,12}",
    ) {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for name in VARS {
            if let Some(value) = env.get(name) {
                pairs.push((name.to_string(), value.to_string()));
            }
        }
        pairs.push((EXTRA_COMPILER_VAR.to_string(), version.clone()));
        let env = EnvSnapshot::from_pairs(pairs);

        let config = ConfigResolver::resolve_with_base(&BaseFragment::default(), &env);
        let set = config.compiler_set();
        prop_assert_eq!(set.compilers().len(), 2);
        prop_assert_eq!(&set.compilers()[1].version, &version);
        prop_assert_eq!(&set.override_for(INTERFACE_TESTER_FILE).unwrap().version, &version);
    }

    #[test]
    fn credentials_never_exceed_one(env in env_strategy(), var in prop::sample::select(VARS)) {
        prop_assert!(CredentialResolver::resolve_credentials(var, &env).len() <= 1);

        let config = ConfigResolver::resolve_with_base(&BaseFragment::default(), &env);
        for endpoint in config.networks().values() {
            prop_assert!(endpoint.credentials.len() <= 1);
        }
    }

    #[test]
    fn resolution_is_idempotent(env in env_strategy()) {
        let base = BaseFragment::parse("defaultNetwork = \"hardhat\"").unwrap();
        let first = ConfigResolver::resolve_with_base(&base, &env);
        let second = ConfigResolver::resolve_with_base(&base, &env.clone());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.to_document(), second.to_document());
    }

    #[test]
    fn every_unknown_chain_has_a_custom_entry(env in env_strategy()) {
        let config = ConfigResolver::resolve_with_base(&BaseFragment::default(), &env);
        for network in config.explorer_api_keys().keys() {
            if !is_builtin_chain(network) {
                prop_assert!(
                    config.explorer_custom_chains().iter().any(|c| &c.network == network),
                    "{} has a key but no chain entry", network
                );
            }
        }
    }

    #[test]
    fn fork_only_for_exact_literal(value in "\\PC{0,4}") {
        let env = EnvSnapshot::from_pairs([(FORK_FLAG_VAR, value.as_str())]);
        let config = ConfigResolver::resolve_with_base(&BaseFragment::default(), &env);
        let local = config.network(LOCAL_NETWORK).unwrap();
        prop_assert_eq!(local.fork_enabled(), value == "1");
    }
}

#[test]
fn every_explorer_network_is_routable() {
    // Holds for the static tables regardless of which keys are set.
    for network in deploy_meta::explorer::explorer_networks() {
        assert!(
            is_builtin_chain(network) || deploy_meta::explorer::custom_chain(network).is_some(),
            "{network} would be unroutable"
        );
    }
}
