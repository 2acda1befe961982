use eth2_networks::prelude::*;
use serde::Deserialize;

const MAINNET_GENESIS: i64 = 1606824023;

#[derive(Debug, Deserialize)]
struct ValidatorConfig {
    network: Network,
    key_path: String,
}

#[test]
fn resolves_network_from_config() {
    let config: ValidatorConfig =
        serde_json::from_str(r#"{ "network": "mainnet", "key_path": "/0/0/0" }"#).unwrap();
    let registry = NetworkRegistry::new();

    assert_eq!(config.network, Network::Main);
    assert_eq!(
        registry.deposit_contract_address(&config.network).unwrap(),
        "0x00000000219ab540356cBB839Cbe05303d7705Fa"
    );
    assert_eq!(registry.full_path(&config.network, &config.key_path), "m/12381/3600/0/0/0");
    assert!(registry.full_path(&config.network, "").starts_with(BASE_EIP2334_PATH));
}

#[test]
fn unsupported_network_in_config_fails_on_use() {
    let config: ValidatorConfig =
        serde_json::from_str(r#"{ "network": "medalla", "key_path": "/0/0/0" }"#).unwrap();
    let registry = NetworkRegistry::new();

    assert_eq!(config.network, Network::Unknown("medalla".to_string()));
    let err = registry.fork_version(&config.network).unwrap_err();
    assert_eq!(err.to_string(), r#"undefined network: "medalla""#);
}

#[test]
fn one_hour_after_mainnet_genesis() {
    let registry = NetworkRegistry::with_clock(FixedClock::new(MAINNET_GENESIS + 3600));

    assert_eq!(registry.estimated_current_slot(&Network::Main).unwrap(), Slot::new(300));
    assert_eq!(registry.estimated_current_epoch(&Network::Main).unwrap(), Epoch::new(9));
    // devnet genesis is two years later
    assert_eq!(registry.estimated_current_slot(&Network::Dev).unwrap(), Slot::new(0));
}

#[test]
fn shared_registry_across_threads() {
    let registry = std::sync::Arc::new(NetworkRegistry::with_clock(FixedClock::new(
        MAINNET_GENESIS + 32 * 12,
    )));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || registry.estimated_current_epoch(&Network::Main).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Epoch::new(1));
    }
}
