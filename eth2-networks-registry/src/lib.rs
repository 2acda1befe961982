#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Static protocol parameters of the supported beacon chain networks, and
//! estimation of the current slot and epoch from wall-clock time.
//!
//! The parameters are kept in an embedded table keyed by network tag, so
//! supporting another network is a data change. They are exposed through
//! [`NetworkRegistry`], which also owns the [`Clock`] used by the `current`
//! estimators, and through free functions reading the system clock.
//!
//! Looking up a network outside the supported set yields
//! [`NetworkError::UnknownNetwork`]. Treat it as fatal.
//!
//! ```
//! use eth2_networks_registry::{fork_version, parse_network, Network};
//!
//! let network = parse_network("mainnet");
//! assert_eq!(network, Network::Main);
//! assert_eq!(fork_version(&network).unwrap(), [0, 0, 0, 0]);
//! assert!(fork_version(&parse_network("olympic")).is_err());
//! ```

pub use eth2_networks_core::{
    types::{parse_network, Epoch, ForkVersion, Network, Slot},
    Clock, FixedClock, SystemClock,
};

mod env;
pub use env::{network_from_env, NETWORK_ENV_VAR};

mod errors;
pub use errors::{NetworkError, Result};

mod params;
pub use params::{NetworkParameters, SLOTS_PER_EPOCH, SLOT_DURATION_SECONDS};

mod registry;
pub use registry::NetworkRegistry;

use std::time::Duration;

/// Parameters of `network`. See [`NetworkRegistry::parameters`].
pub fn parameters(network: &Network) -> Result<&'static NetworkParameters> {
    NetworkRegistry::new().parameters(network)
}

/// See [`NetworkRegistry::fork_version`].
pub fn fork_version(network: &Network) -> Result<ForkVersion> {
    NetworkRegistry::new().fork_version(network)
}

/// See [`NetworkRegistry::deposit_contract_address`].
pub fn deposit_contract_address(network: &Network) -> Result<&'static str> {
    NetworkRegistry::new().deposit_contract_address(network)
}

/// See [`NetworkRegistry::min_genesis_time`].
pub fn min_genesis_time(network: &Network) -> Result<u64> {
    NetworkRegistry::new().min_genesis_time(network)
}

/// See [`NetworkRegistry::full_path`].
pub fn full_path(network: &Network, relative_path: &str) -> String {
    NetworkRegistry::new().full_path(network, relative_path)
}

pub fn slot_duration(network: &Network) -> Duration {
    NetworkRegistry::new().slot_duration(network)
}

pub fn slots_per_epoch(network: &Network) -> u64 {
    NetworkRegistry::new().slots_per_epoch(network)
}

/// See [`NetworkRegistry::estimated_slot_at_time`].
pub fn estimated_slot_at_time(network: &Network, timestamp: i64) -> Result<Slot> {
    NetworkRegistry::new().estimated_slot_at_time(network, timestamp)
}

/// Slot in progress according to the system clock.
pub fn estimated_current_slot(network: &Network) -> Result<Slot> {
    NetworkRegistry::new().estimated_current_slot(network)
}

pub fn estimated_epoch_at_slot(network: &Network, slot: Slot) -> Epoch {
    NetworkRegistry::new().estimated_epoch_at_slot(network, slot)
}

/// Epoch in progress according to the system clock.
pub fn estimated_current_epoch(network: &Network) -> Result<Epoch> {
    NetworkRegistry::new().estimated_current_epoch(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_match_registry() {
        let registry = NetworkRegistry::new();
        for network in Network::KNOWN {
            assert_eq!(fork_version(&network).unwrap(), registry.fork_version(&network).unwrap());
            assert_eq!(
                deposit_contract_address(&network).unwrap(),
                registry.deposit_contract_address(&network).unwrap()
            );
            assert_eq!(
                parameters(&network).unwrap().min_genesis_time(),
                min_genesis_time(&network).unwrap()
            );
        }
    }

    #[test]
    fn current_slot_is_past_genesis() {
        let slot = estimated_current_slot(&Network::Main).unwrap();
        assert!(slot > Slot::new(0));
        assert_eq!(
            estimated_epoch_at_slot(&Network::Main, slot),
            Epoch::new((slot / SLOTS_PER_EPOCH).as_u64())
        );
        assert!(estimated_current_epoch(&Network::Main).unwrap() >= Epoch::new(slot.as_u64() / 32));
    }
}
